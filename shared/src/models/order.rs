//! Order Model

use crate::models::product::ProductInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status
///
/// The directed transition graph over these states lives in
/// [`crate::workflow`]; nothing else is allowed to move an order between
/// statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, waiting for admin confirmation
    #[default]
    PendingConfirmation,
    /// Confirmed, waiting for warehouse pickup
    AwaitingPickup,
    /// Handed to the carrier
    AwaitingDelivery,
    /// Delivered to the customer
    Delivered,
    /// Terminally cancelled (by admin, owner, or refused delivery)
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order. Drives the console filter tabs
    /// and the board columns.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::PendingConfirmation,
        OrderStatus::AwaitingPickup,
        OrderStatus::AwaitingDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Whether no further status transition is defined from this state.
    ///
    /// `Delivered` is terminal for the status graph but still carries the
    /// one-shot receipt confirmation flag.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Wire-format name, matching the serde representation
    pub fn wire_name(&self) -> &'static str {
        match self {
            OrderStatus::PendingConfirmation => "PENDING_CONFIRMATION",
            OrderStatus::AwaitingPickup => "AWAITING_PICKUP",
            OrderStatus::AwaitingDelivery => "AWAITING_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::PendingConfirmation => "Pending confirmation",
            OrderStatus::AwaitingPickup => "Awaiting pickup",
            OrderStatus::AwaitingDelivery => "Awaiting delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Payment status, independent of the workflow transitions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    PartiallyPaid,
    Paid,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::PartiallyPaid => "Partially paid",
            PaymentStatus::Paid => "Paid",
        }
    }
}

/// Order line item - immutable snapshot captured at order time
///
/// Line items do not track live product changes. Optional fields may be
/// absent on the wire; `normalized` fills the documented defaults so views
/// never have to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetail {
    #[serde(default)]
    pub id: String,
    pub quantity: i32,
    /// Unit price at order time
    pub price: f64,
    /// Original price before discount, defaults to `price` when absent
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Discount percentage at order time
    #[serde(default)]
    pub discount: f64,
    /// Product snapshot (id, name, image) captured at order time
    #[serde(default)]
    pub product: ProductInfo,
}

impl OrderDetail {
    /// Original price, falling back to the sale price when the backend
    /// omitted it
    pub fn original_price(&self) -> f64 {
        self.original_price.unwrap_or(self.price)
    }

    /// Line total at the snapshotted unit price
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Order entity as returned by the backend
///
/// `status` is only ever mutated through workflow transitions applied by the
/// backend; the client treats its copy as a cache that can go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// Owning customer, set at creation
    pub user_id: String,
    /// Set once by the owner after delivery, never cleared
    #[serde(default)]
    pub is_confirmed_by_user: bool,
    #[serde(default)]
    pub order_details: Vec<OrderDetail>,
}

impl Order {
    /// Apply wire-format defaults in one place (repository boundary),
    /// instead of scattering fallbacks through every view.
    pub fn normalized(mut self) -> Self {
        for detail in &mut self.order_details {
            if detail.original_price.is_none() {
                detail.original_price = Some(detail.price);
            }
            if detail.quantity <= 0 {
                detail.quantity = 1;
            }
        }
        self
    }

    /// Whether `user_id` owns this order
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
