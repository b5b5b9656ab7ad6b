use std::fmt::Write as _;

use client_core::{price::format_price, Cart};
use shared::{
    domain::{MenuItem, Testimonial},
    protocol::FieldViolation,
};

pub const EMPTY_CART: &str = "Your cart is empty.";
pub const CHECKOUT_NOTICE: &str = "Please sign in to complete your order.";

pub fn menu_line(item: &MenuItem) -> String {
    let mut line = format!("[{}] {} {}", item.id, item.name, item.price);
    if let Some(tag) = &item.tag {
        let _ = write!(line, " ({tag})");
    }
    line
}

pub fn menu(title: &str, items: &[MenuItem]) -> String {
    let mut out = format!("{title}\n");
    for item in items {
        let _ = writeln!(out, "  {}", menu_line(item));
        let _ = writeln!(out, "      {}", item.description);
    }
    out
}

/// One full star per whole point, a half star for a remainder of at least .5.
pub fn stars(rating: f32) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let mut out = "★".repeat(full);
    if rating - rating.floor() >= 0.5 {
        out.push('½');
    }
    out
}

pub fn testimonials(entries: &[Testimonial]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{} {}", stars(entry.rating), entry.rating);
        let _ = writeln!(out, "  \"{}\"", entry.text);
        let _ = writeln!(out, "  - {}, {}", entry.name, entry.title);
    }
    out
}

pub fn cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return format!("{EMPTY_CART}\n");
    }
    let mut out = String::new();
    for line in cart.items() {
        let item = &line.menu_item;
        let _ = writeln!(
            out,
            "[{}] {} x{} @ {}",
            item.id, item.name, line.quantity, item.price
        );
    }
    let _ = writeln!(
        out,
        "Items: {}  Total: {}",
        cart.total_items(),
        format_price(cart.total_price())
    );
    out
}

pub fn violations(message: &str, errors: &[FieldViolation]) -> String {
    let mut out = format!("{message}\n");
    for error in errors {
        let _ = writeln!(out, "  {}: {}", error.field, error.message);
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
