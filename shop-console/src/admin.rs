//! Admin order console
//!
//! The full-surface view over every order: filterable table, per-row action
//! buttons, and the kanban board (see [`crate::board`]) layered over the same
//! list and dispatcher.

use crate::dispatch::Dispatcher;
use crate::error::ConsoleResult;
use crate::list::OrderListState;
use shared::workflow::{Action, Actor, available_actions};
use shared::models::Order;
use shop_client::{OrderRepository, with_cancellation};
use std::sync::Arc;

/// Headless state for the admin order screen
pub struct AdminOrderConsole {
    pub list: OrderListState,
    dispatcher: Dispatcher,
}

impl AdminOrderConsole {
    pub fn new(repo: Arc<dyn OrderRepository>, admin: Actor) -> Self {
        Self {
            list: OrderListState::new(),
            dispatcher: Dispatcher::new(repo, admin),
        }
    }

    /// Reload every order from the backend
    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        let orders = with_cancellation(
            self.dispatcher.cancel_token(),
            self.dispatcher.repo().fetch_all(),
        )
        .await?;
        self.list.set_orders(orders);
        Ok(())
    }

    /// Actions to render for a table row
    ///
    /// Actions absent here get no control at all, not a disabled one.
    pub fn row_actions(&self, order: &Order) -> Vec<Action> {
        available_actions(order, self.dispatcher.actor())
    }

    /// Full detail for a loaded order (line items, payment state)
    pub fn detail(&self, order_id: &str) -> Option<&Order> {
        self.list.get(order_id)
    }

    /// Whether this order already has a request in flight
    pub fn is_in_flight(&self, order_id: &str) -> bool {
        self.dispatcher.is_in_flight(order_id)
    }

    /// Apply a workflow action from a table row button
    pub async fn dispatch(&mut self, order_id: &str, action: Action) -> ConsoleResult<Order> {
        self.dispatcher.dispatch(&mut self.list, order_id, action).await
    }

    /// Abort in-flight requests when the screen is dismissed
    pub fn shutdown(&self) {
        self.dispatcher.shutdown();
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut OrderListState, &mut Dispatcher) {
        (&mut self.list, &mut self.dispatcher)
    }
}
