//! Checkout pre-validation and order placement
//!
//! Client-side gate in front of order creation: an empty cart or a line
//! exceeding live stock never becomes a request. The backend re-validates
//! and snapshots the cart authoritatively; this layer only exists so the
//! obvious rejections surface before the round trip.

use crate::error::ConsoleResult;
use shared::client::CreateOrderRequest;
use shared::models::{CartItem, Order};
use shop_client::OrderRepository;
use std::sync::Arc;
use thiserror::Error;

/// Fixed price of the optional extended warranty
pub const WARRANTY_PRICE: f64 = 700_000.0;

/// A cart line that cannot be fulfilled at its requested quantity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{product_name}: requested {requested}, only {available} in stock")]
pub struct LineIssue {
    pub product_name: String,
    pub requested: i32,
    pub available: i32,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("insufficient stock for {} item(s)", .0.len())]
    InsufficientStock(Vec<LineIssue>),
}

/// Totals shown on the checkout summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutSummary {
    pub subtotal: f64,
    /// `WARRANTY_PRICE` when selected, zero otherwise
    pub warranty_price: f64,
    pub total: f64,
}

/// Checkout state for the selected cart items
pub struct Checkout {
    items: Vec<CartItem>,
    warranty: bool,
}

impl Checkout {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self {
            items,
            warranty: false,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn warranty(&self) -> bool {
        self.warranty
    }

    pub fn set_warranty(&mut self, warranty: bool) {
        self.warranty = warranty;
    }

    /// Reject carts the backend would reject anyway
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let issues: Vec<LineIssue> = self
            .items
            .iter()
            .filter(|item| !item.in_stock())
            .map(|item| LineIssue {
                product_name: item.product.name.clone(),
                requested: item.quantity,
                available: item.product.quantity,
            })
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::InsufficientStock(issues))
        }
    }

    /// Totals at live prices
    pub fn summary(&self) -> CheckoutSummary {
        let subtotal: f64 = self.items.iter().map(CartItem::line_total).sum();
        let warranty_price = if self.warranty { WARRANTY_PRICE } else { 0.0 };
        CheckoutSummary {
            subtotal,
            warranty_price,
            total: subtotal + warranty_price,
        }
    }

    /// Validate, then submit the order
    ///
    /// Only cart item ids and options go over the wire; the backend snapshots
    /// prices and decrements stock itself.
    pub async fn place_order(&self, repo: &Arc<dyn OrderRepository>) -> ConsoleResult<Order> {
        self.validate()?;

        let request = CreateOrderRequest {
            cart_item_ids: self.items.iter().map(|item| item.id.clone()).collect(),
            warranty: self.warranty,
        };
        tracing::debug!(
            items = request.cart_item_ids.len(),
            warranty = request.warranty,
            "placing order"
        );
        let order = repo.create_order(&request).await?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Product;

    fn item(id: &str, quantity: i32, price: f64, discount: f64, stock: i32) -> CartItem {
        CartItem {
            id: id.to_string(),
            quantity,
            product: Product {
                id: format!("prod-{id}"),
                name: format!("Product {id}"),
                price,
                discount,
                quantity: stock,
                image_urls: vec![],
            },
            user_id: "user-1".to_string(),
        }
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let checkout = Checkout::new(vec![]);
        assert!(matches!(checkout.validate(), Err(CheckoutError::EmptyCart)));
    }

    #[test]
    fn test_over_stock_lines_are_each_reported() {
        let checkout = Checkout::new(vec![
            item("a", 2, 100.0, 0.0, 10),
            item("b", 5, 100.0, 0.0, 3),
            item("c", 4, 100.0, 0.0, 1),
        ]);
        let Err(CheckoutError::InsufficientStock(issues)) = checkout.validate() else {
            panic!("expected stock rejection");
        };
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].requested, 5);
        assert_eq!(issues[0].available, 3);
    }

    #[test]
    fn test_summary_uses_discounted_prices() {
        let mut checkout = Checkout::new(vec![
            item("a", 2, 100.0, 0.0, 10),
            // 20% off: effective 80 each
            item("b", 1, 100.0, 20.0, 10),
        ]);
        let summary = checkout.summary();
        assert_eq!(summary.subtotal, 280.0);
        assert_eq!(summary.warranty_price, 0.0);
        assert_eq!(summary.total, 280.0);

        checkout.set_warranty(true);
        let summary = checkout.summary();
        assert_eq!(summary.warranty_price, WARRANTY_PRICE);
        assert_eq!(summary.total, 280.0 + WARRANTY_PRICE);
    }
}
