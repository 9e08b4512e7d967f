//! Shop Client - HTTP client for the storefront backend
//!
//! Provides the order repository over the backend REST API: fetching order
//! lists, applying workflow transitions, creating orders from the cart and
//! the auth/session plumbing. The backend is authoritative for every
//! transition; this crate only transports decisions and surfaces rejections.

pub mod config;
pub mod error;
pub mod http;
pub mod orders;
pub mod session;

#[cfg(feature = "in-process")]
pub mod in_process;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, with_cancellation};
pub use http::HttpClient;
pub use orders::{HttpOrderRepository, OrderRepository};
pub use session::{AuthWatch, Session, run_refresh_loop};

#[cfg(feature = "in-process")]
pub use in_process::InProcessClient;

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, CreateOrderRequest, LoginResponse, OrderStatistics, UserInfo};
