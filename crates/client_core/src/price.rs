use shared::domain::MenuItem;

/// Numeric value of a display price such as `"$4.50"`.
///
/// Every character other than an ASCII digit or `.` is dropped, then the
/// longest leading decimal literal is read: `"4.50.1"` reads as 4.5 and `".5"`
/// as 0.5. Text with no digits yields NaN, which carries into any total built
/// from it.
pub fn parse_price(display: &str) -> f64 {
    let numeric: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let int_len = numeric.bytes().take_while(u8::is_ascii_digit).count();
    let mut end = int_len;
    let mut frac_len = 0;
    if numeric[int_len..].starts_with('.') {
        frac_len = numeric[int_len + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        end = int_len + 1 + frac_len;
    }

    if int_len + frac_len == 0 {
        return f64::NAN;
    }

    numeric[..end].parse().unwrap_or(f64::NAN)
}

pub fn unit_price(item: &MenuItem) -> f64 {
    parse_price(&item.price)
}

pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
#[path = "tests/price_tests.rs"]
mod tests;
