//! Order repository - the sole mutation path for order state
//!
//! Maps workflow actions onto the backend's transition endpoints. The
//! backend re-runs the same state machine authoritatively; whatever it
//! returns replaces the caller's cached copy.

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::client::{ApiResponse, CreateOrderRequest, OrderStatistics};
use shared::models::{Order, Role};
use shared::workflow::Action;
use tracing::{debug, warn};

const ORDERS_BASE: &str = "/api/orders";

/// HTTP method + path for a transition endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Put(String),
    Post(String),
}

/// Resolve the backend endpoint for (action, actor role)
///
/// Cancellation is the one action with role-scoped endpoints; everything
/// else is admin-only and checked again server-side.
pub(crate) fn transition_endpoint(id: &str, action: Action, role: Role) -> Endpoint {
    let suffix = match (action, role) {
        (Action::Confirm, _) => "waiting-pickup",
        (Action::Ship, _) => "waiting-delivery",
        (Action::Deliver, _) => "delivered",
        (Action::Cancel, Role::Admin) => "cancel-admin",
        (Action::Cancel, Role::User) => "cancel-user",
        (Action::RejectDelivery, _) => "cancel-admin",
        (Action::ConfirmReceipt, _) => "confirm-delivery",
    };
    let path = format!("{}/{}/{}", ORDERS_BASE, id, suffix);
    match action {
        Action::ConfirmReceipt => Endpoint::Post(path),
        _ => Endpoint::Put(path),
    }
}

/// Abstraction over fetch/update of order records
///
/// The only allowed mutation path for order state. Implemented for the
/// network client and (behind the `in-process` feature) the router-backed
/// test client; consoles depend on the trait, not a transport.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// All orders (admin scope)
    async fn fetch_all(&self) -> ClientResult<Vec<Order>>;

    /// One user's orders
    async fn fetch_by_user(&self, user_id: &str) -> ClientResult<Vec<Order>>;

    /// Single order detail
    async fn fetch_by_id(&self, id: &str) -> ClientResult<Order>;

    /// Send a transition to the backend and return the updated order
    async fn apply_transition(&self, id: &str, action: Action, role: Role) -> ClientResult<Order>;

    /// Create an order from the caller's cart snapshot
    async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order>;

    /// Aggregate statistics for the admin dashboard
    async fn statistics(&self) -> ClientResult<OrderStatistics>;
}

/// Network-backed order repository
#[derive(Debug, Clone)]
pub struct HttpOrderRepository {
    http: HttpClient,
}

impl HttpOrderRepository {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    async fn fetch_list(&self, path: &str) -> ClientResult<Vec<Order>> {
        let response: ApiResponse<Vec<Order>> = self.http.get(path).await?;
        let orders = HttpClient::expect_data(response, "order list")?;
        Ok(orders.into_iter().map(Order::normalized).collect())
    }

    async fn fetch_scalar<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> ClientResult<T> {
        let response: ApiResponse<T> = self.http.get(path).await?;
        HttpClient::expect_data(response, context)
    }
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    async fn fetch_all(&self) -> ClientResult<Vec<Order>> {
        self.fetch_list(&format!("{}/getAll", ORDERS_BASE)).await
    }

    async fn fetch_by_user(&self, user_id: &str) -> ClientResult<Vec<Order>> {
        self.fetch_list(&format!("{}/user/{}", ORDERS_BASE, user_id))
            .await
    }

    async fn fetch_by_id(&self, id: &str) -> ClientResult<Order> {
        let path = format!("{}/{}", ORDERS_BASE, id);
        let response: ApiResponse<Order> = self.http.get(&path).await?;
        Ok(HttpClient::expect_data(response, "order")?.normalized())
    }

    async fn apply_transition(&self, id: &str, action: Action, role: Role) -> ClientResult<Order> {
        debug!(order_id = %id, action = action.label(), ?role, "applying transition");

        let response: ApiResponse<Order> = match transition_endpoint(id, action, role) {
            Endpoint::Put(path) => self.http.put_empty(&path).await,
            Endpoint::Post(path) => self.http.post_empty(&path).await,
        }
        .inspect_err(|err| {
            warn!(order_id = %id, action = action.label(), %err, "transition rejected");
        })?;

        Ok(HttpClient::expect_data(response, "order")?.normalized())
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order> {
        debug!(items = request.cart_item_ids.len(), warranty = request.warranty, "creating order");
        let response: ApiResponse<Order> = self.http.post(ORDERS_BASE, request).await?;
        Ok(HttpClient::expect_data(response, "order")?.normalized())
    }

    async fn statistics(&self) -> ClientResult<OrderStatistics> {
        let revenue_path = format!("{}/statistics/total-revenue", ORDERS_BASE);
        let orders_path = format!("{}/statistics/total-orders", ORDERS_BASE);
        let average_path = format!("{}/statistics/average-order-value", ORDERS_BASE);
        let users_path = format!("{}/statistics/total-unique-users", ORDERS_BASE);
        let (revenue, orders, average, users) = tokio::try_join!(
            self.fetch_scalar::<f64>(&revenue_path, "total revenue"),
            self.fetch_scalar::<u64>(&orders_path, "total orders"),
            self.fetch_scalar::<f64>(&average_path, "average order value"),
            self.fetch_scalar::<u64>(&users_path, "unique user count"),
        )?;

        Ok(OrderStatistics {
            total_revenue: revenue,
            total_orders: orders,
            average_order_value: average,
            unique_user_count: users,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_endpoint_mapping() {
        assert_eq!(
            transition_endpoint("o1", Action::Confirm, Role::Admin),
            Endpoint::Put("/api/orders/o1/waiting-pickup".to_string())
        );
        assert_eq!(
            transition_endpoint("o1", Action::Ship, Role::Admin),
            Endpoint::Put("/api/orders/o1/waiting-delivery".to_string())
        );
        assert_eq!(
            transition_endpoint("o1", Action::Deliver, Role::Admin),
            Endpoint::Put("/api/orders/o1/delivered".to_string())
        );
        assert_eq!(
            transition_endpoint("o1", Action::RejectDelivery, Role::Admin),
            Endpoint::Put("/api/orders/o1/cancel-admin".to_string())
        );
        assert_eq!(
            transition_endpoint("o1", Action::ConfirmReceipt, Role::User),
            Endpoint::Post("/api/orders/o1/confirm-delivery".to_string())
        );
    }

    #[test]
    fn test_cancel_endpoint_is_role_scoped() {
        assert_eq!(
            transition_endpoint("o1", Action::Cancel, Role::Admin),
            Endpoint::Put("/api/orders/o1/cancel-admin".to_string())
        );
        assert_eq!(
            transition_endpoint("o1", Action::Cancel, Role::User),
            Endpoint::Put("/api/orders/o1/cancel-user".to_string())
        );
    }
}
