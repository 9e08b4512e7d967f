//! Customer order view
//!
//! The session user's own orders. The customer action surface is narrow:
//! cancel while the order is still pending, confirm receipt once delivered.
//! Both are destructive enough to sit behind an explicit confirmation dialog,
//! modelled here as a [`PendingAction`] that must be confirmed before any
//! request is sent.

use crate::dispatch::Dispatcher;
use crate::error::{ConsoleError, ConsoleResult};
use crate::list::OrderListState;
use shared::models::Order;
use shared::workflow::{self, Action, Actor, available_actions};
use shop_client::{OrderRepository, with_cancellation};
use std::sync::Arc;

/// An action awaiting the user's confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub order_id: String,
    pub action: Action,
}

/// Headless state for the customer's order history screen
pub struct CustomerOrderView {
    pub list: OrderListState,
    dispatcher: Dispatcher,
    pending: Option<PendingAction>,
}

impl CustomerOrderView {
    pub fn new(repo: Arc<dyn OrderRepository>, customer: Actor) -> Self {
        Self {
            list: OrderListState::new(),
            dispatcher: Dispatcher::new(repo, customer),
            pending: None,
        }
    }

    /// Reload the session user's orders
    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        let user_id = self.dispatcher.actor().user_id.clone();
        let orders = with_cancellation(
            self.dispatcher.cancel_token(),
            self.dispatcher.repo().fetch_by_user(&user_id),
        )
        .await?;
        self.list.set_orders(orders);
        Ok(())
    }

    /// Actions to offer on an order row
    pub fn row_actions(&self, order: &Order) -> Vec<Action> {
        available_actions(order, self.dispatcher.actor())
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Open the confirmation dialog for an action
    ///
    /// Validated up front so the dialog never opens for an action the
    /// workflow would reject anyway.
    pub fn request_action(&mut self, order_id: &str, action: Action) -> ConsoleResult<()> {
        if self.dispatcher.is_in_flight(order_id) {
            return Err(ConsoleError::ActionInFlight(order_id.to_string()));
        }
        let order = self
            .list
            .get(order_id)
            .ok_or_else(|| ConsoleError::UnknownOrder(order_id.to_string()))?;
        workflow::transition(order, action, self.dispatcher.actor())?;

        self.pending = Some(PendingAction {
            order_id: order_id.to_string(),
            action,
        });
        Ok(())
    }

    /// User confirmed the dialog: send the request
    pub async fn confirm_pending(&mut self) -> ConsoleResult<Order> {
        let pending = self.pending.take().ok_or(ConsoleError::NothingPending)?;
        self.dispatcher
            .dispatch(&mut self.list, &pending.order_id, pending.action)
            .await
    }

    /// User dismissed the dialog: nothing is sent
    pub fn dismiss_pending(&mut self) {
        self.pending = None;
    }

    pub fn is_in_flight(&self, order_id: &str) -> bool {
        self.dispatcher.is_in_flight(order_id)
    }

    /// Abort in-flight requests when the screen is dismissed
    pub fn shutdown(&self) {
        self.dispatcher.shutdown();
    }
}
