use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A menu item with a quantity, as held in a cart and as stored on an order.
///
/// Prices serialise as decimal strings and accept either strings or numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Menu item id.
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    #[serde(alias = "qty")]
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
