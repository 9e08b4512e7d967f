//! Transition table and the pure `transition` function

use crate::models::{Order, OrderStatus, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workflow action requested against an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Admin accepts the order for fulfilment
    Confirm,
    /// Cancel the order (admin anywhere pre-delivery, owner while pending)
    Cancel,
    /// Hand the order to the carrier
    Ship,
    /// Mark the order as delivered
    Deliver,
    /// Customer refused the package
    RejectDelivery,
    /// Owner acknowledges delivery (flips the confirmation flag once)
    ConfirmReceipt,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Confirm,
        Action::Cancel,
        Action::Ship,
        Action::Deliver,
        Action::RejectDelivery,
        Action::ConfirmReceipt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Confirm => "confirm",
            Action::Cancel => "cancel",
            Action::Ship => "ship",
            Action::Deliver => "deliver",
            Action::RejectDelivery => "reject delivery",
            Action::ConfirmReceipt => "confirm receipt",
        }
    }
}

/// The authenticated caller attempting a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: String,
    pub role: Role,
}

impl Actor {
    pub fn admin(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: Role::Admin,
        }
    }

    pub fn customer(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: Role::User,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn owns(&self, order: &Order) -> bool {
        order.is_owned_by(&self.user_id)
    }
}

/// Rejection reasons for a requested transition
///
/// Never silently ignored - every rejection names the current state and the
/// requested action so the caller can tell the user why.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// No edge exists from the current status for this action
    #[error("cannot {} an order that is {}", action.label(), status.label())]
    InvalidTransition { status: OrderStatus, action: Action },

    /// The edge exists, but this actor is not allowed to take it
    #[error("{role:?} is not allowed to {} this order", action.label())]
    Forbidden { role: Role, action: Action },
}

/// Who may take a given edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Permission {
    Admin,
    AdminOrOwner,
    Owner,
}

impl Permission {
    fn allows(&self, actor: &Actor, order: &Order) -> bool {
        match self {
            Permission::Admin => actor.is_admin(),
            Permission::AdminOrOwner => actor.is_admin() || actor.owns(order),
            Permission::Owner => actor.owns(order),
        }
    }
}

/// The complete transition table
///
/// (from, action, to, allowed actor). `ConfirmReceipt` keeps the status at
/// `Delivered` and is additionally guarded by the one-shot confirmation flag
/// in [`transition`]. Any (status, action) pair absent here is rejected.
pub(crate) const EDGES: &[(OrderStatus, Action, OrderStatus, Permission)] = &[
    (
        OrderStatus::PendingConfirmation,
        Action::Confirm,
        OrderStatus::AwaitingPickup,
        Permission::Admin,
    ),
    (
        OrderStatus::PendingConfirmation,
        Action::Cancel,
        OrderStatus::Cancelled,
        Permission::AdminOrOwner,
    ),
    (
        OrderStatus::AwaitingPickup,
        Action::Ship,
        OrderStatus::AwaitingDelivery,
        Permission::Admin,
    ),
    (
        OrderStatus::AwaitingPickup,
        Action::Cancel,
        OrderStatus::Cancelled,
        Permission::Admin,
    ),
    (
        OrderStatus::AwaitingDelivery,
        Action::Deliver,
        OrderStatus::Delivered,
        Permission::Admin,
    ),
    (
        OrderStatus::AwaitingDelivery,
        Action::RejectDelivery,
        OrderStatus::Cancelled,
        Permission::Admin,
    ),
    (
        OrderStatus::Delivered,
        Action::ConfirmReceipt,
        OrderStatus::Delivered,
        Permission::Owner,
    ),
];

/// Compute the order resulting from `action`, or the reason it is rejected
///
/// Pure function: no side effect beyond building the next order value.
/// Persistence is the repository's job, and the backend re-checks the same
/// table authoritatively. Repeating an already-applied transition is an
/// `InvalidTransition`, never a silent second success.
pub fn transition(order: &Order, action: Action, actor: &Actor) -> Result<Order, WorkflowError> {
    let edge = EDGES
        .iter()
        .find(|(from, a, _, _)| *from == order.status && *a == action);

    let Some((_, _, to, permission)) = edge else {
        return Err(WorkflowError::InvalidTransition {
            status: order.status,
            action,
        });
    };

    // Receipt confirmation is one-shot; afterwards the order is fully terminal.
    if action == Action::ConfirmReceipt && order.is_confirmed_by_user {
        return Err(WorkflowError::InvalidTransition {
            status: order.status,
            action,
        });
    }

    if !permission.allows(actor, order) {
        return Err(WorkflowError::Forbidden {
            role: actor.role,
            action,
        });
    }

    let mut next = order.clone();
    next.status = *to;
    if action == Action::ConfirmReceipt {
        next.is_confirmed_by_user = true;
    }
    Ok(next)
}

/// Actions this actor may currently take on this order
///
/// Drives rendering: controls for actions not in this list must not appear
/// at all.
pub fn available_actions(order: &Order, actor: &Actor) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| transition(order, *action, actor).is_ok())
        .collect()
}
