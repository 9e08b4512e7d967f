//! Console error types

use shared::models::OrderStatus;
use shared::workflow::WorkflowError;
use shop_client::ClientError;
use thiserror::Error;

/// Console error type
///
/// Every rejected action carries a message naming the reason; the rendering
/// layer shows it verbatim. No transition failure is ever swallowed.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The order is not in the console's current list
    #[error("order {0} is not loaded")]
    UnknownOrder(String),

    /// This order already has a request in flight
    #[error("order {0} already has an action in progress")]
    ActionInFlight(String),

    /// Pre-flight check rejected the action (advisory mirror of the backend)
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// A board move between columns with no connecting edge
    #[error("an order cannot move from {} to {}", from.label(), to.label())]
    InvalidMove { from: OrderStatus, to: OrderStatus },

    /// The mutating action was never confirmed by the user
    #[error("no pending action to confirm")]
    NothingPending,

    /// Checkout pre-validation rejected the cart
    #[error(transparent)]
    Checkout(#[from] crate::checkout::CheckoutError),

    /// Backend rejection or transport failure
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ConsoleError {
    /// Whether the caller should re-render from refreshed data
    pub fn is_stale(&self) -> bool {
        matches!(self, ConsoleError::Client(err) if err.requires_refetch())
    }
}

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;
