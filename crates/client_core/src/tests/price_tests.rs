use super::*;

#[test]
fn strips_currency_symbol() {
    assert_eq!(parse_price("$4.50"), 4.50);
    assert_eq!(parse_price("$12.95"), 12.95);
}

#[test]
fn drops_every_non_numeric_character() {
    assert_eq!(parse_price("USD 1,299.00"), 1299.0);
    assert_eq!(parse_price("€-3.25"), 3.25);
}

#[test]
fn reads_only_the_leading_decimal_literal() {
    assert_eq!(parse_price("4.50.1"), 4.5);
    assert_eq!(parse_price(".5"), 0.5);
    assert_eq!(parse_price("7."), 7.0);
}

#[test]
fn text_without_digits_is_nan() {
    assert!(parse_price("free").is_nan());
    assert!(parse_price("$.").is_nan());
    assert!(parse_price("").is_nan());
}

#[test]
fn formats_with_two_decimals() {
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(13.45), "$13.45");
    assert_eq!(format_price(9.5), "$9.50");
}
