//! Order workflow state machine
//!
//! Pure transition logic for the order lifecycle. The backend enforces the
//! same rules and is the single source of truth; this mirror exists so the
//! consoles can gate controls before rendering them and fail fast on races.
//!
//! Nothing in the client mutates an order status directly - every change
//! goes through [`transition`] and then the order repository.

pub mod graph;
mod machine;

pub use machine::{Action, Actor, WorkflowError, available_actions, transition};
