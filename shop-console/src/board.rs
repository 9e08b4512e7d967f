//! Kanban board over the admin order list
//!
//! One column per status; dragging a card between columns is just another way
//! of requesting the transition whose edge connects the two stages. The board
//! renders from the same [`OrderListState`] the table uses and moves go
//! through the same dispatcher, so nothing moves on the board that the table
//! buttons could not do.

use crate::admin::AdminOrderConsole;
use crate::error::{ConsoleError, ConsoleResult};
use crate::list::OrderListState;
use shared::models::{Order, OrderStatus};
use shared::workflow::{Action, graph};

/// A single board column: one workflow stage and its cards
#[derive(Debug)]
pub struct BoardColumn<'a> {
    pub status: OrderStatus,
    pub title: &'static str,
    pub cards: Vec<&'a Order>,
}

/// A validated card move: the action the drop translates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMove {
    pub order_id: String,
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub action: Action,
}

impl CardMove {
    /// Translate a drop onto a column into a workflow action
    ///
    /// `None` action between the stages means the drop is rejected before any
    /// request is made; the card snaps back because nothing was mutated.
    pub fn plan(list: &OrderListState, order_id: &str, to: OrderStatus) -> ConsoleResult<CardMove> {
        let order = list
            .get(order_id)
            .ok_or_else(|| ConsoleError::UnknownOrder(order_id.to_string()))?;
        let from = order.status;
        let action = graph::action_between(from, to)
            .ok_or(ConsoleError::InvalidMove { from, to })?;
        Ok(CardMove {
            order_id: order_id.to_string(),
            from,
            to,
            action,
        })
    }
}

/// Group orders into one column per status, in workflow order
pub fn columns(list: &OrderListState) -> Vec<BoardColumn<'_>> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| BoardColumn {
            status,
            title: status.label(),
            cards: list.orders().iter().filter(|o| o.status == status).collect(),
        })
        .collect()
}

impl AdminOrderConsole {
    /// The board presentation of the current order list
    ///
    /// Columns ignore the table's tab filter and pagination; the search term
    /// still applies in the rendering layer if desired.
    pub fn board_columns(&self) -> Vec<BoardColumn<'_>> {
        columns(&self.list)
    }

    /// Apply a card drop onto another column
    ///
    /// Maps the destination column to its transition and dispatches it; an
    /// edge-less move fails before any request, and a backend rejection
    /// surfaces after the list has been reconciled, so the card lands back in
    /// the column the backend says it belongs in.
    pub async fn move_card(&mut self, order_id: &str, to: OrderStatus) -> ConsoleResult<Order> {
        let plan = CardMove::plan(&self.list, order_id, to)?;
        let (list, dispatcher) = self.parts_mut();
        dispatcher.dispatch(list, order_id, plan.action).await
    }
}
