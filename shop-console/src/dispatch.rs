//! Canonical action dispatch
//!
//! Every mutating console action funnels through [`Dispatcher::dispatch`]:
//! the admin table buttons, the kanban card moves, and the customer view all
//! hit the same path, so the in-flight guard, the pre-flight workflow check,
//! and the reconcile-on-response behaviour cannot diverge between surfaces.

use crate::error::{ConsoleError, ConsoleResult};
use crate::list::OrderListState;
use shared::models::Order;
use shared::workflow::{self, Action, Actor};
use shop_client::{OrderRepository, with_cancellation};
use std::collections::HashSet;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub(crate) struct Dispatcher {
    repo: Arc<dyn OrderRepository>,
    actor: Actor,
    /// Orders with a request currently in flight
    in_flight: HashSet<String>,
    cancel: CancellationToken,
}

impl Dispatcher {
    pub(crate) fn new(repo: Arc<dyn OrderRepository>, actor: Actor) -> Self {
        Self {
            repo,
            actor,
            in_flight: HashSet::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub(crate) fn actor(&self) -> &Actor {
        &self.actor
    }

    pub(crate) fn repo(&self) -> &Arc<dyn OrderRepository> {
        &self.repo
    }

    pub(crate) fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub(crate) fn is_in_flight(&self, order_id: &str) -> bool {
        self.in_flight.contains(order_id)
    }

    /// Abort every in-flight request (view dismissed)
    pub(crate) fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Apply `action` to the order, reconciling the list with the backend
    ///
    /// The pre-flight check rejects locally what the backend would reject
    /// anyway; the backend stays authoritative, so on a stale rejection
    /// (`InvalidTransition`/`Conflict`) the order is refetched and the list
    /// updated before the error is returned.
    pub(crate) async fn dispatch(
        &mut self,
        list: &mut OrderListState,
        order_id: &str,
        action: Action,
    ) -> ConsoleResult<Order> {
        if self.in_flight.contains(order_id) {
            return Err(ConsoleError::ActionInFlight(order_id.to_string()));
        }

        let order = list
            .get(order_id)
            .ok_or_else(|| ConsoleError::UnknownOrder(order_id.to_string()))?;
        workflow::transition(order, action, &self.actor)?;

        tracing::debug!(order_id, action = action.label(), "dispatching order action");

        self.in_flight.insert(order_id.to_string());
        let result = with_cancellation(
            &self.cancel,
            self.repo.apply_transition(order_id, action, self.actor.role),
        )
        .await;
        self.in_flight.remove(order_id);

        match result {
            Ok(updated) => {
                list.replace(updated.clone());
                Ok(updated)
            }
            Err(err) => {
                tracing::warn!(
                    order_id,
                    action = action.label(),
                    error = %err,
                    "order action rejected"
                );
                if err.requires_refetch() {
                    self.reconcile(list, order_id).await;
                }
                Err(err.into())
            }
        }
    }

    /// Pull the backend's copy of a stale order into the list
    async fn reconcile(&self, list: &mut OrderListState, order_id: &str) {
        match with_cancellation(&self.cancel, self.repo.fetch_by_id(order_id)).await {
            Ok(current) => list.replace(current),
            Err(shop_client::ClientError::NotFound(_)) => list.remove(order_id),
            Err(err) => {
                tracing::warn!(order_id, error = %err, "failed to refresh stale order");
            }
        }
    }
}
