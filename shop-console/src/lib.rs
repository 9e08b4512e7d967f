//! Shop Console - headless view models for the storefront order workflow
//!
//! The two roles that drive the order state machine:
//!
//! - [`AdminOrderConsole`]: all orders, full transition surface, table and
//!   kanban board presentations sharing one dispatch path.
//! - [`CustomerOrderView`]: the session user's own orders, with the narrow
//!   customer action set behind an explicit confirmation dialog.
//!
//! Plus the checkout pre-validation path and the dashboard statistics
//! summary. Everything here is presentation-agnostic state: a UI layer
//! renders these structs and forwards events into them.

pub mod admin;
pub mod board;
pub mod checkout;
pub mod customer;
pub mod dashboard;
mod dispatch;
pub mod error;
pub mod list;

pub use admin::AdminOrderConsole;
pub use board::{BoardColumn, CardMove};
pub use checkout::{Checkout, CheckoutError, CheckoutSummary, LineIssue};
pub use customer::{CustomerOrderView, PendingAction};
pub use dashboard::Dashboard;
pub use error::{ConsoleError, ConsoleResult};
pub use list::{OrderListState, SortDirection, SortField};
