use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    /// Built single-page app to serve for non-API paths.
    pub static_dir: Option<PathBuf>,
    /// Reserved for a future submission store; the form endpoints ignore it.
    pub database_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:5000".into(),
            static_dir: None,
            database_url: None,
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the flat `server.toml` table, then environment overrides.
/// `PORT` binds every interface and loses to an explicit bind address.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("bind_addr") {
                    settings.server_bind = v.clone();
                }
                if let Some(v) = file_cfg.get("static_dir") {
                    settings.static_dir = Some(PathBuf::from(v));
                }
                if let Some(v) = file_cfg.get("database_url") {
                    settings.database_url = Some(v.clone());
                }
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring malformed settings file");
            }
        }
    }

    let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    if let Some(v) = env("PORT") {
        match v.trim().parse::<u16>() {
            Ok(port) => settings.server_bind = format!("0.0.0.0:{port}"),
            Err(error) => warn!(value = %v, %error, "ignoring invalid PORT"),
        }
    }
    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("STATIC_DIR") {
        settings.static_dir = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__STATIC_DIR") {
        settings.static_dir = Some(PathBuf::from(v));
    }

    if let Some(v) = env("DATABASE_URL") {
        settings.database_url = Some(v);
    }
    if let Some(v) = env("APP__DATABASE_URL") {
        settings.database_url = Some(v);
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
