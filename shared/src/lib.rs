//! Shared types for the storefront client stack
//!
//! Common types used across the client and console crates: domain models,
//! the order workflow state machine, error types and API response envelopes.

pub mod client;
pub mod error;
pub mod models;
pub mod response;
pub mod workflow;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiErrorCode, AppError};
pub use response::{ApiResponse, Empty};
pub use workflow::{Action, Actor, WorkflowError};
