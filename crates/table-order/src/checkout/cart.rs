use crate::model::CartItem;
use rust_decimal::Decimal;

/// The items one diner is about to order. Not shared between sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `item`, merging quantities with an existing line for the same menu id.
    pub fn add(&mut self, item: CartItem) {
        if item.quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    /// Sets the quantity of a line. Zero or less removes it.
    pub fn set_quantity(&mut self, id: u64, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity, to two decimal places.
    pub fn total(&self) -> Decimal {
        let mut total = self
            .items
            .iter()
            .map(CartItem::line_total)
            .sum::<Decimal>()
            .round_dp(2);
        total.rescale(2);
        total
    }

    /// Number of units across all lines.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
