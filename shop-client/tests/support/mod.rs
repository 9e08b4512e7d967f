//! Mock backend for the integration tests
//!
//! An axum router implementing the order API surface the client speaks,
//! enforcing the same transition rules the production backend does. Tokens
//! are fixed: one admin session, one customer session.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use shared::client::{CreateOrderRequest, LoginRequest, LoginResponse, UserInfo};
use shared::error::{ApiErrorCode, AppError};
use shared::models::{Order, OrderStatus, Role};
use shared::response::{ApiResponse, Empty};
use shared::workflow::{Action, Actor, WorkflowError, transition};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const ADMIN_TOKEN: &str = "token-admin";
pub const USER_TOKEN: &str = "token-user";
pub const ADMIN_ID: &str = "admin-1";
pub const CUSTOMER_ID: &str = "user-1";

pub const WARRANTY_PRICE: f64 = 700_000.0;

#[derive(Clone)]
struct Backend {
    orders: Arc<Mutex<HashMap<String, Order>>>,
    me_hits: Arc<AtomicUsize>,
}

pub fn admin_user() -> UserInfo {
    UserInfo {
        id: ADMIN_ID.to_string(),
        username: "admin".to_string(),
        role: Role::Admin,
    }
}

pub fn customer_user() -> UserInfo {
    UserInfo {
        id: CUSTOMER_ID.to_string(),
        username: "customer".to_string(),
        role: Role::User,
    }
}

pub fn seed_order(id: &str, status: OrderStatus, user_id: &str) -> Order {
    Order {
        id: id.to_string(),
        order_date: Utc::now(),
        total_amount: 250.0,
        status,
        payment_status: Default::default(),
        user_id: user_id.to_string(),
        is_confirmed_by_user: false,
        order_details: vec![],
    }
}

/// Build the mock backend router with seeded orders
pub fn router(seed: Vec<Order>) -> Router {
    router_with_me_counter(seed).0
}

/// Router plus a counter of `/api/auth/me` hits, for session refresh tests
pub fn router_with_me_counter(seed: Vec<Order>) -> (Router, Arc<AtomicUsize>) {
    let me_hits = Arc::new(AtomicUsize::new(0));
    let backend = Backend {
        orders: Arc::new(Mutex::new(
            seed.into_iter().map(|o| (o.id.clone(), o)).collect(),
        )),
        me_hits: me_hits.clone(),
    };

    let router = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/logout", post(logout))
        .route("/api/orders", post(create_order))
        .route("/api/orders/getAll", get(get_all))
        .route("/api/orders/user/{user_id}", get(get_by_user))
        .route("/api/orders/statistics/total-revenue", get(total_revenue))
        .route("/api/orders/statistics/total-orders", get(total_orders))
        .route(
            "/api/orders/statistics/average-order-value",
            get(average_order_value),
        )
        .route(
            "/api/orders/statistics/total-unique-users",
            get(total_unique_users),
        )
        .route("/api/orders/{id}", get(get_by_id))
        .route("/api/orders/{id}/waiting-pickup", put(confirm))
        .route("/api/orders/{id}/waiting-delivery", put(ship))
        .route("/api/orders/{id}/delivered", put(deliver))
        .route("/api/orders/{id}/cancel-admin", put(cancel_admin))
        .route("/api/orders/{id}/cancel-user", put(cancel_user))
        .route("/api/orders/{id}/confirm-delivery", post(confirm_delivery))
        .with_state(backend);

    (router, me_hits)
}

fn ok<T: Serialize>(data: T) -> Response {
    Json(ApiResponse::ok(data)).into_response()
}

fn reject(code: ApiErrorCode, message: impl Into<String>) -> Response {
    let err = AppError::with_message(code, message);
    let status = err.http_status();
    (status, Json(ApiResponse::<Empty>::from(err))).into_response()
}

fn authenticate(headers: &HeaderMap) -> Result<UserInfo, Response> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(ADMIN_TOKEN) => Ok(admin_user()),
        Some(USER_TOKEN) => Ok(customer_user()),
        _ => Err(reject(ApiErrorCode::Unauthorized, "invalid or missing token")),
    }
}

// ===== Auth handlers =====

async fn login(Json(request): Json<LoginRequest>) -> Response {
    let session = match (request.username.as_str(), request.password.as_str()) {
        ("admin", "admin-pass") => Some((ADMIN_TOKEN, admin_user())),
        ("customer", "user-pass") => Some((USER_TOKEN, customer_user())),
        _ => None,
    };
    match session {
        Some((token, user)) => ok(LoginResponse {
            token: token.to_string(),
            user,
        }),
        None => reject(ApiErrorCode::Unauthorized, "invalid credentials"),
    }
}

async fn me(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    backend.me_hits.fetch_add(1, Ordering::SeqCst);
    match authenticate(&headers) {
        Ok(user) => ok(user),
        Err(response) => response,
    }
}

async fn logout(headers: HeaderMap) -> Response {
    match authenticate(&headers) {
        Ok(_) => ok(Empty),
        Err(response) => response,
    }
}

// ===== Order read handlers =====

async fn get_all(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    let user = match authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if !user.role.is_admin() {
        return reject(ApiErrorCode::Forbidden, "admin only");
    }
    let orders: Vec<Order> = backend.orders.lock().unwrap().values().cloned().collect();
    ok(orders)
}

async fn get_by_user(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Response {
    let user = match authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if !user.role.is_admin() && user.id != user_id {
        return reject(ApiErrorCode::Forbidden, "not your orders");
    }
    let orders: Vec<Order> = backend
        .orders
        .lock()
        .unwrap()
        .values()
        .filter(|o| o.user_id == user_id)
        .cloned()
        .collect();
    ok(orders)
}

async fn get_by_id(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let user = match authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    let orders = backend.orders.lock().unwrap();
    match orders.get(&id) {
        Some(order) if user.role.is_admin() || order.user_id == user.id => ok(order.clone()),
        Some(_) => reject(ApiErrorCode::Forbidden, "not your order"),
        None => reject(ApiErrorCode::NotFound, format!("order {id} not found")),
    }
}

// ===== Transition handlers =====

fn apply(backend: &Backend, headers: &HeaderMap, id: &str, pick: fn(&Order) -> Action) -> Response {
    let user = match authenticate(headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    let actor = Actor {
        user_id: user.id,
        role: user.role,
    };

    let mut orders = backend.orders.lock().unwrap();
    let Some(order) = orders.get(id) else {
        return reject(ApiErrorCode::NotFound, format!("order {id} not found"));
    };

    match transition(order, pick(order), &actor) {
        Ok(updated) => {
            orders.insert(id.to_string(), updated.clone());
            ok(updated)
        }
        Err(err @ WorkflowError::InvalidTransition { .. }) => {
            reject(ApiErrorCode::InvalidTransition, err.to_string())
        }
        Err(err @ WorkflowError::Forbidden { .. }) => {
            reject(ApiErrorCode::Forbidden, err.to_string())
        }
    }
}

async fn confirm(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    apply(&backend, &headers, &id, |_| Action::Confirm)
}

async fn ship(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    apply(&backend, &headers, &id, |_| Action::Ship)
}

async fn deliver(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    apply(&backend, &headers, &id, |_| Action::Deliver)
}

async fn cancel_admin(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    // Once the carrier has the order, an admin cancel is a delivery rejection.
    apply(&backend, &headers, &id, |order| {
        if order.status == OrderStatus::AwaitingDelivery {
            Action::RejectDelivery
        } else {
            Action::Cancel
        }
    })
}

async fn cancel_user(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    apply(&backend, &headers, &id, |_| Action::Cancel)
}

async fn confirm_delivery(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    apply(&backend, &headers, &id, |_| Action::ConfirmReceipt)
}

// ===== Order creation =====

async fn create_order(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(request): Json<CreateOrderRequest>,
) -> Response {
    let user = match authenticate(&headers) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if request.cart_item_ids.is_empty() {
        return reject(ApiErrorCode::Validation, "cart is empty");
    }

    let mut orders = backend.orders.lock().unwrap();
    let mut total = request.cart_item_ids.len() as f64 * 100.0;
    if request.warranty {
        total += WARRANTY_PRICE;
    }
    let order = Order {
        id: format!("ord-{}", orders.len() + 1),
        order_date: Utc::now(),
        total_amount: total,
        status: OrderStatus::PendingConfirmation,
        payment_status: Default::default(),
        user_id: user.id,
        is_confirmed_by_user: false,
        order_details: vec![],
    };
    orders.insert(order.id.clone(), order.clone());
    ok(order)
}

// ===== Statistics =====

fn stats_guard(headers: &HeaderMap) -> Result<(), Response> {
    let user = authenticate(headers)?;
    if user.role.is_admin() {
        Ok(())
    } else {
        Err(reject(ApiErrorCode::Forbidden, "admin only"))
    }
}

async fn total_revenue(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    if let Err(response) = stats_guard(&headers) {
        return response;
    }
    let revenue: f64 = backend
        .orders
        .lock()
        .unwrap()
        .values()
        .map(|o| o.total_amount)
        .sum();
    ok(revenue)
}

async fn total_orders(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    if let Err(response) = stats_guard(&headers) {
        return response;
    }
    ok(backend.orders.lock().unwrap().len() as u64)
}

async fn average_order_value(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    if let Err(response) = stats_guard(&headers) {
        return response;
    }
    let orders = backend.orders.lock().unwrap();
    let average = if orders.is_empty() {
        0.0
    } else {
        orders.values().map(|o| o.total_amount).sum::<f64>() / orders.len() as f64
    };
    ok(average)
}

async fn total_unique_users(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    if let Err(response) = stats_guard(&headers) {
        return response;
    }
    let orders = backend.orders.lock().unwrap();
    let users: std::collections::HashSet<&str> =
        orders.values().map(|o| o.user_id.as_str()).collect();
    ok(users.len() as u64)
}
