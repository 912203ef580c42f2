use business::domain::cart::model::Cart;
use business::domain::product::model::Product;

use super::badge::CartBadge;

/// Catalog screen: the cart badge followed by every product, marking the
/// ones already in the cart.
pub fn render(products: &[Product], cart: &Cart, badge: &CartBadge) -> String {
    let mut lines = vec![badge.render(), String::new()];
    lines.extend(products.iter().map(|product| {
        let in_cart = cart
            .entry(&product.id)
            .map(|entry| format!("  x{}", entry.quantity))
            .unwrap_or_default();
        format!(
            "{:<4} {:<28} ${}{}",
            product.id.as_str(),
            product.name,
            product.price,
            in_cart
        )
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::{ProductId, UnitPrice};

    fn product(id: &str, name: &str, price: u32) -> Product {
        Product::from_repository(
            ProductId::new(id).unwrap(),
            name.to_string(),
            UnitPrice::from(price),
            String::new(),
            vec![],
            String::new(),
        )
    }

    #[test]
    fn should_list_products_with_badge_and_in_cart_markers() {
        let products = vec![product("1", "Pegasus", 120), product("2", "Old Skool", 70)];
        let cart = Cart::new()
            .with_added(&products[1])
            .with_added(&products[1]);
        let badge = CartBadge::new(&cart);

        let output = render(&products, &cart, &badge);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "[Cart: 1]");
        assert!(lines[2].contains("Pegasus"));
        assert!(lines[2].ends_with("$120"));
        assert!(lines[3].contains("Old Skool"));
        assert!(lines[3].ends_with("$70  x2"));
    }
}
