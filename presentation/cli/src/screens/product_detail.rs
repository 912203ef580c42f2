use business::domain::cart::model::Cart;
use business::domain::product::model::Product;

/// Product detail screen. The "in cart" line (and with it the remove
/// action) only appears when the product is already in the cart.
pub fn render(product: &Product, cart: &Cart) -> String {
    let mut lines = vec![
        product.name.clone(),
        format!("${}", product.price),
        String::new(),
    ];
    if !product.description.is_empty() {
        lines.push(product.description.clone());
        lines.push(String::new());
    }
    lines.extend(product.images.iter().map(|image| format!("  {}", image)));

    if let Some(entry) = cart.entry(&product.id) {
        lines.push(String::new());
        lines.push(format!(
            "In cart: {} (remove with `storefront remove {}`)",
            entry.quantity, product.id
        ));
    }
    lines.join("\n")
}
