//! Admin dashboard statistics

use crate::error::ConsoleResult;
use shared::client::OrderStatistics;
use shop_client::OrderRepository;
use std::sync::Arc;

/// Aggregate order statistics panel
///
/// Holds the last fetched snapshot; `None` until the first refresh succeeds,
/// so the rendering layer can show a loading state instead of zeros.
#[derive(Default)]
pub struct Dashboard {
    stats: Option<OrderStatistics>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Option<&OrderStatistics> {
        self.stats.as_ref()
    }

    /// Refetch the aggregates; keeps the previous snapshot on failure
    pub async fn refresh(&mut self, repo: &Arc<dyn OrderRepository>) -> ConsoleResult<()> {
        match repo.statistics().await {
            Ok(stats) => {
                self.stats = Some(stats);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to refresh order statistics");
                Err(err.into())
            }
        }
    }
}
