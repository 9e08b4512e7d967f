//! Cart Model

use crate::models::product::Product;
use serde::{Deserialize, Serialize};

/// Cart item - precursor of an order line, owned by one customer
///
/// References a live [`Product`]; price, discount and stock stay live until
/// checkout snapshots them into order details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub quantity: i32,
    pub product: Product,
    pub user_id: String,
}

impl CartItem {
    /// Line total at the live effective price
    pub fn line_total(&self) -> f64 {
        self.product.effective_price() * self.quantity as f64
    }

    /// Whether the requested quantity is still covered by live stock
    pub fn in_stock(&self) -> bool {
        self.quantity <= self.product.quantity
    }
}
