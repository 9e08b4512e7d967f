//! In-process client (tower oneshot)
//!
//! Drives the same repository surface against an axum `Router` directly,
//! with zero network overhead. Used by the integration tests to exercise the
//! client against a backend that enforces the workflow authoritatively.

use crate::orders::{Endpoint, OrderRepository, transition_endpoint};
use crate::{ClientError, ClientResult, HttpClient};
use async_trait::async_trait;
use axum::body::Body;
use serde::de::DeserializeOwned;
use shared::client::{ApiResponse, CreateOrderRequest, LoginRequest, LoginResponse, OrderStatistics, UserInfo};
use shared::models::{Order, Role};
use shared::workflow::Action;
use tower::ServiceExt;

const ORDERS_BASE: &str = "/api/orders";

/// Client that calls an axum `Router` in-process
#[derive(Clone)]
pub struct InProcessClient {
    router: axum::Router,
    token: Option<String>,
}

impl InProcessClient {
    pub fn new(router: axum::Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    /// Set the bearer token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Log in against the in-process router and install the token
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<UserInfo> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let body = serde_json::to_vec(&request)?;
        let response: ApiResponse<LoginResponse> = self
            .request(http::Method::POST, "/api/auth/login", Some(body))
            .await?;
        let login = HttpClient::expect_data(response, "login")?;
        self.token = Some(login.token);
        Ok(login.user)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<T> {
        let mut builder = http::Request::builder().method(method).uri(path);

        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let request = builder
            .body(Body::from(body.unwrap_or_default()))
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).to_string();
            return Err(HttpClient::error_from(status, text));
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str, context: &str) -> ClientResult<T> {
        let response: ApiResponse<T> = self.request(http::Method::GET, path, None).await?;
        HttpClient::expect_data(response, context)
    }
}

#[async_trait]
impl OrderRepository for InProcessClient {
    async fn fetch_all(&self) -> ClientResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .get_data(&format!("{}/getAll", ORDERS_BASE), "order list")
            .await?;
        Ok(orders.into_iter().map(Order::normalized).collect())
    }

    async fn fetch_by_user(&self, user_id: &str) -> ClientResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .get_data(&format!("{}/user/{}", ORDERS_BASE, user_id), "order list")
            .await?;
        Ok(orders.into_iter().map(Order::normalized).collect())
    }

    async fn fetch_by_id(&self, id: &str) -> ClientResult<Order> {
        let order: Order = self
            .get_data(&format!("{}/{}", ORDERS_BASE, id), "order")
            .await?;
        Ok(order.normalized())
    }

    async fn apply_transition(&self, id: &str, action: Action, role: Role) -> ClientResult<Order> {
        let (method, path) = match transition_endpoint(id, action, role) {
            Endpoint::Put(path) => (http::Method::PUT, path),
            Endpoint::Post(path) => (http::Method::POST, path),
        };
        let response: ApiResponse<Order> = self.request(method, &path, None).await?;
        Ok(HttpClient::expect_data(response, "order")?.normalized())
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order> {
        let body = serde_json::to_vec(request)?;
        let response: ApiResponse<Order> = self
            .request(http::Method::POST, ORDERS_BASE, Some(body))
            .await?;
        Ok(HttpClient::expect_data(response, "order")?.normalized())
    }

    async fn statistics(&self) -> ClientResult<OrderStatistics> {
        Ok(OrderStatistics {
            total_revenue: self
                .get_data(&format!("{}/statistics/total-revenue", ORDERS_BASE), "total revenue")
                .await?,
            total_orders: self
                .get_data(&format!("{}/statistics/total-orders", ORDERS_BASE), "total orders")
                .await?,
            average_order_value: self
                .get_data(
                    &format!("{}/statistics/average-order-value", ORDERS_BASE),
                    "average order value",
                )
                .await?,
            unique_user_count: self
                .get_data(
                    &format!("{}/statistics/total-unique-users", ORDERS_BASE),
                    "unique user count",
                )
                .await?,
        })
    }
}
