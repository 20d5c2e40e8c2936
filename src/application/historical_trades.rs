use crate::domain::entities::deal::Deal;
use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::connection_provider::ConnectionProvider;
use crate::domain::values::history_range::HistoryRange;
use crate::domain::values::time_window::TimeWindow;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::HashSet;
use std::sync::Arc;

/// Orders fetched per invocation. Further pages are the caller's job,
/// repeated with a new offset.
pub const HISTORY_PAGE_LIMIT: usize = 20;

/// Upper bound on in-flight per-position deal lookups.
const DEAL_FETCH_CONCURRENCY: usize = 8;

/// Turns one page of broker history orders into a deduplicated,
/// newest-first list of closed trades.
pub struct HistoricalTradesUseCase {
    connections: Arc<dyn ConnectionProvider>,
}

impl HistoricalTradesUseCase {
    pub fn new(connections: Arc<dyn ConnectionProvider>) -> Self {
        Self { connections }
    }

    pub async fn execute(
        &self,
        account_id: &str,
        range: HistoryRange,
        offset: Option<usize>,
    ) -> Result<Vec<Trade>, DomainError> {
        self.execute_at(account_id, range, offset, Utc::now()).await
    }

    /// Same as `execute` with an explicit clock, so window math and
    /// relative labels stay deterministic under test.
    pub async fn execute_at(
        &self,
        account_id: &str,
        range: HistoryRange,
        offset: Option<usize>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Trade>, DomainError> {
        // Window resolution happens before any upstream call.
        let window = TimeWindow::resolve(range, now);

        let connection = self.connections.connection(account_id).await?;
        let orders = connection
            .list_history_orders(
                window.start,
                window.end,
                offset.unwrap_or(0),
                HISTORY_PAGE_LIMIT,
            )
            .await?;
        tracing::debug!(
            account = account_id,
            range = %range,
            orders = orders.len(),
            "fetched history order page"
        );

        // Positions are independent, so their deal lists are fetched with
        // bounded fan-out. `buffered` merges in submission order, which
        // keeps dedup winners and sort ties deterministic.
        let deal_lists: Vec<Vec<Deal>> = stream::iter(orders.iter().map(|order| {
            let connection = Arc::clone(&connection);
            let position_id = order.position_id.clone();
            async move { connection.list_deals_for_position(&position_id).await }
        }))
        .buffered(DEAL_FETCH_CONCURRENCY)
        .try_collect()
        .await?;

        // Orders that closed the same position in parts resolve to the
        // same deal list; the id set keeps each closing deal once.
        let mut seen: HashSet<String> = HashSet::new();
        let mut trades = Vec::new();
        for deal in deal_lists.into_iter().flatten() {
            if !deal.entry_type.is_close() {
                continue;
            }
            if !seen.insert(deal.id.clone()) {
                continue;
            }
            trades.push(Trade::from_deal(deal, now));
        }

        sort_newest_first(&mut trades);
        Ok(trades)
    }
}

/// Stable descending sort on the absolute deal timestamp; equal
/// timestamps keep their arrival order.
pub fn sort_newest_first(trades: &mut [Trade]) {
    trades.sort_by(|a, b| b.time.cmp(&a.time));
}
