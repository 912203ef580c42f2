use serde::{Deserialize, Serialize};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::{Cart, CartEntry};
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{ProductId, UnitPrice};

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record.json")]
    Json(#[from] serde_json::Error),
    #[error("record.product")]
    Product(#[from] ProductError),
    #[error("record.cart")]
    Cart(#[from] CartError),
}

/// Stored form of a cart entry. The stored cart is a JSON array of these.
///
/// Carries every product field the cart screens display, so a restored
/// cart never needs the catalog.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntryRecord {
    pub product_id: String,
    pub product_name: String,
    pub unit_price: PriceValue,
    pub image_ref: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
}

/// Prices are written as decimal strings so no precision is lost, and read
/// back from either a string or a plain JSON number.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Text(String),
    Number(serde_json::Number),
}

impl PriceValue {
    fn parse(&self) -> Result<UnitPrice, ProductError> {
        match self {
            PriceValue::Text(text) => text.parse(),
            PriceValue::Number(number) => number.to_string().parse(),
        }
    }
}

impl CartEntryRecord {
    pub fn from_domain(entry: &CartEntry) -> Self {
        let product = &entry.product;
        Self {
            product_id: product.id.as_str().to_string(),
            product_name: product.name.clone(),
            unit_price: PriceValue::Text(product.price.to_string()),
            image_ref: product.image.clone(),
            images: product.images.clone(),
            description: product.description.clone(),
            quantity: entry.quantity,
        }
    }

    pub fn into_domain(self) -> Result<CartEntry, RecordError> {
        let price = self.unit_price.parse()?;
        let product = Product::from_repository(
            ProductId::new(self.product_id)?,
            self.product_name,
            price,
            self.image_ref,
            self.images,
            self.description,
        );
        Ok(CartEntry {
            product,
            quantity: self.quantity,
        })
    }
}

pub fn encode_cart(cart: &Cart) -> Result<String, serde_json::Error> {
    let records: Vec<CartEntryRecord> = cart
        .entries()
        .iter()
        .map(CartEntryRecord::from_domain)
        .collect();
    serde_json::to_string(&records)
}

/// Rebuilds a cart, rejecting records that break the cart invariants
/// (zero quantity, repeated product id, negative price).
pub fn decode_cart(raw: &str) -> Result<Cart, RecordError> {
    let records: Vec<CartEntryRecord> = serde_json::from_str(raw)?;
    let entries = records
        .into_iter()
        .map(CartEntryRecord::into_domain)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Cart::from_entries(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: &str, price: &str) -> Product {
        Product::from_repository(
            ProductId::new(id).unwrap(),
            format!("Sneaker {}", id),
            price.parse().unwrap(),
            format!("https://cdn.example.com/{}.jpg", id),
            vec![
                format!("https://cdn.example.com/{}-1.jpg", id),
                format!("https://cdn.example.com/{}-2.jpg", id),
            ],
            "Breathable mesh upper".to_string(),
        )
    }

    #[test]
    fn should_write_documented_field_names() {
        let cart = Cart::new().with_added(&product("A", "10"));

        let raw = encode_cart(&cart).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let first = &value[0];
        assert_eq!(first["productId"], "A");
        assert_eq!(first["productName"], "Sneaker A");
        assert_eq!(first["unitPrice"], "10");
        assert_eq!(first["imageRef"], "https://cdn.example.com/A.jpg");
        assert_eq!(first["quantity"], 1);
    }

    #[test]
    fn should_round_trip_entries_and_order() {
        let a = product("A", "19.99");
        let b = product("B", "5");
        let cart = Cart::new().with_added(&a).with_added(&b).with_added(&a);

        let restored = decode_cart(&encode_cart(&cart).unwrap()).unwrap();

        assert_eq!(restored, cart);
        assert_eq!(restored.entries()[0].product.price.to_string(), "19.99");
    }

    #[test]
    fn should_accept_numeric_price_and_missing_optional_fields() {
        let raw = r#"[{"productId":"7","productName":"Cap","unitPrice":12.5,"imageRef":"cap.jpg","quantity":3}]"#;

        let cart = decode_cart(raw).unwrap();

        let entry = &cart.entries()[0];
        assert_eq!(entry.quantity, 3);
        assert_eq!(entry.product.price.to_string(), "12.5");
        assert!(entry.product.images.is_empty());
        assert!(entry.product.description.is_empty());
    }

    #[test]
    fn should_reject_zero_quantity() {
        let raw = r#"[{"productId":"7","productName":"Cap","unitPrice":"1","imageRef":"","quantity":0}]"#;

        assert!(matches!(decode_cart(raw), Err(RecordError::Cart(_))));
    }

    #[test]
    fn should_reject_duplicated_product_id() {
        let raw = r#"[
            {"productId":"7","productName":"Cap","unitPrice":"1","imageRef":"","quantity":1},
            {"productId":"7","productName":"Cap","unitPrice":"1","imageRef":"","quantity":2}
        ]"#;

        assert!(matches!(decode_cart(raw), Err(RecordError::Cart(_))));
    }

    #[test]
    fn should_reject_negative_price() {
        let raw = r#"[{"productId":"7","productName":"Cap","unitPrice":-1,"imageRef":"","quantity":1}]"#;

        assert!(matches!(decode_cart(raw), Err(RecordError::Product(_))));
    }

    #[test]
    fn should_reject_missing_required_field() {
        let raw = r#"[{"productId":"7","unitPrice":"1","imageRef":"","quantity":1}]"#;

        assert!(matches!(decode_cart(raw), Err(RecordError::Json(_))));
    }

    #[test]
    fn should_reject_non_array_record() {
        assert!(matches!(decode_cart("{\"cart\":[]}"), Err(RecordError::Json(_))));
        assert!(matches!(decode_cart("not json"), Err(RecordError::Json(_))));
    }

    #[test]
    fn should_decode_empty_array_as_empty_cart() {
        assert!(decode_cart("[]").unwrap().is_empty());
    }

    fn entry_strategy() -> impl Strategy<Value = (String, u64, u32, Vec<String>)> {
        (
            "[A-Za-z0-9 ]{1,24}",
            0u64..10_000_000,
            1u32..=u32::MAX,
            proptest::collection::vec("[a-z0-9/:.]{1,16}", 0..3),
        )
    }

    proptest! {
        #[test]
        fn should_round_trip_any_cart(
            entries in proptest::collection::vec(entry_strategy(), 1..8)
        ) {
            let entries = entries
                .into_iter()
                .enumerate()
                .map(|(index, (name, cents, quantity, images))| CartEntry {
                    product: Product::from_repository(
                        ProductId::new(format!("sku-{}", index)).unwrap(),
                        name,
                        format!("{}.{:02}", cents / 100, cents % 100).parse().unwrap(),
                        format!("https://cdn.example.com/{}.jpg", index),
                        images,
                        String::new(),
                    ),
                    quantity,
                })
                .collect();
            let cart = Cart::from_entries(entries).unwrap();

            let restored = decode_cart(&encode_cart(&cart).unwrap()).unwrap();

            prop_assert_eq!(restored, cart);
        }
    }
}
