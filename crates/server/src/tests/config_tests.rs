use super::{load_settings_from, Settings};

use std::{collections::HashMap, fs, path::PathBuf};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_apply_without_file_or_env() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let settings = load_settings_from(&temp_root.path().join("server.toml"), env_from(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.server_bind, "127.0.0.1:5000");
}

#[test]
fn settings_file_overrides_defaults() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let path = temp_root.path().join("server.toml");
    fs::write(
        &path,
        "bind_addr = \"0.0.0.0:8080\"\nstatic_dir = \"dist/public\"\ndatabase_url = \"postgres://cafe\"\n",
    )
    .expect("write settings");

    let settings = load_settings_from(&path, env_from(&[]));
    assert_eq!(settings.server_bind, "0.0.0.0:8080");
    assert_eq!(settings.static_dir, Some(PathBuf::from("dist/public")));
    assert_eq!(settings.database_url.as_deref(), Some("postgres://cafe"));
}

#[test]
fn environment_overrides_the_settings_file() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let path = temp_root.path().join("server.toml");
    fs::write(&path, "bind_addr = \"0.0.0.0:8080\"\n").expect("write settings");

    let settings = load_settings_from(
        &path,
        env_from(&[
            ("SERVER_BIND", "127.0.0.1:6000"),
            ("APP__BIND_ADDR", "127.0.0.1:7000"),
            ("STATIC_DIR", "public"),
        ]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:7000");
    assert_eq!(settings.static_dir, Some(PathBuf::from("public")));
}

#[test]
fn port_binds_all_interfaces_unless_bind_is_explicit() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let path = temp_root.path().join("server.toml");

    let settings = load_settings_from(&path, env_from(&[("PORT", "3001")]));
    assert_eq!(settings.server_bind, "0.0.0.0:3001");

    let settings = load_settings_from(
        &path,
        env_from(&[("PORT", "3001"), ("SERVER_BIND", "127.0.0.1:9000")]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:9000");
}

#[test]
fn invalid_port_and_blank_values_are_ignored() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let path = temp_root.path().join("server.toml");
    let settings = load_settings_from(
        &path,
        env_from(&[("PORT", "eighty"), ("DATABASE_URL", "  ")]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn malformed_settings_file_falls_back_to_defaults() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let path = temp_root.path().join("server.toml");
    fs::write(&path, "bind_addr = [").expect("write settings");
    let settings = load_settings_from(&path, env_from(&[]));
    assert_eq!(settings, Settings::default());
}
