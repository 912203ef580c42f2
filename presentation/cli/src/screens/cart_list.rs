use business::domain::cart::model::{Cart, CartEntry};

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Shopping cart screen: one line per entry with its line total, then the
/// cart total.
pub fn render(cart: &Cart) -> String {
    if cart.is_empty() {
        return EMPTY_CART_MESSAGE.to_string();
    }

    let mut lines: Vec<String> = cart.entries().iter().map(render_entry).collect();
    lines.push(String::new());
    lines.push(format!(
        "{} products, {} items    Total: ${}",
        cart.badge_count(),
        cart.unit_count(),
        cart.total()
    ));
    lines.join("\n")
}

fn render_entry(entry: &CartEntry) -> String {
    format!(
        "{:<4} {:<28} (-) {:>3} (+)  ${}",
        entry.product.id.as_str(),
        entry.product.name,
        entry.quantity,
        entry.line_total()
    )
}
