//! Client-related types shared between the client crate and the backend
//!
//! Request/response DTOs for the auth and order APIs. Kept here so the HTTP
//! client and the in-process test backend agree on the wire format.

use crate::models::Role;
use serde::{Deserialize, Serialize};

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Authenticated user information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub role: Role,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Create-order request, submitted at checkout
///
/// The client only submits cart item ids plus options; the backend snapshots
/// the cart server-side and is the authority on stock validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub cart_item_ids: Vec<String>,
    /// Whether the fixed-price extended warranty was selected
    #[serde(default)]
    pub warranty: bool,
}

/// Aggregate order statistics (admin dashboard)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderStatistics {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub average_order_value: f64,
    pub unique_user_count: u64,
}
