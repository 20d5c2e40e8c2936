//! Shared test helpers.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tradelens::domain::entities::deal::Deal;
use tradelens::domain::entities::history_order::HistoryOrder;
use tradelens::domain::ports::connection_provider::ConnectionProvider;
use tradelens::domain::ports::trading_connection::{ConnectionError, TradingConnection};
use tradelens::domain::values::deal_type::DealType;
use tradelens::domain::values::entry_type::DealEntryType;
use tradelens::domain::values::order_state::OrderState;
use tradelens::TradeLens;

/// Scripted stand-in for a terminal connection. Serves a fixed order
/// page and per-position deal lists, with optional failure injection
/// and call counters for asserting upstream traffic.
#[derive(Default)]
pub struct MockConnection {
    pub orders: Vec<HistoryOrder>,
    pub deals: HashMap<String, Vec<Deal>>,
    pub orders_error: Option<ConnectionError>,
    pub deals_error: Option<ConnectionError>,
    pub order_calls: AtomicUsize,
    pub deal_calls: AtomicUsize,
    pub seen_windows: Mutex<Vec<(DateTime<Utc>, DateTime<Utc>)>>,
}

#[async_trait]
impl TradingConnection for MockConnection {
    async fn list_history_orders(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<HistoryOrder>, ConnectionError> {
        self.order_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_windows.lock().unwrap().push((start, end));
        if let Some(err) = &self.orders_error {
            return Err(err.clone());
        }
        let page_end = (offset + limit).min(self.orders.len());
        if offset >= page_end {
            return Ok(Vec::new());
        }
        Ok(self.orders[offset..page_end].to_vec())
    }

    async fn list_deals_for_position(
        &self,
        position_id: &str,
    ) -> Result<Vec<Deal>, ConnectionError> {
        self.deal_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.deals_error {
            return Err(err.clone());
        }
        Ok(self.deals.get(position_id).cloned().unwrap_or_default())
    }
}

pub struct MockProvider(pub Arc<MockConnection>);

#[async_trait]
impl ConnectionProvider for MockProvider {
    async fn connection(
        &self,
        _account_id: &str,
    ) -> Result<Arc<dyn TradingConnection>, ConnectionError> {
        Ok(self.0.clone())
    }
}

pub fn setup(connection: Arc<MockConnection>) -> TradeLens {
    TradeLens::with_connection_provider(Arc::new(MockProvider(connection)))
}

pub fn order(id: &str, position: &str, hours_ago: i64, now: DateTime<Utc>) -> HistoryOrder {
    let time = now - Duration::hours(hours_ago);
    HistoryOrder {
        id: id.to_string(),
        position_id: position.to_string(),
        state: OrderState::Filled,
        time,
        done_time: Some(time),
    }
}

pub fn out_deal(id: &str, position: &str, hours_ago: i64, profit: f64, now: DateTime<Utc>) -> Deal {
    deal(id, position, DealEntryType::Out, hours_ago, profit, now)
}

pub fn in_deal(id: &str, position: &str, hours_ago: i64, now: DateTime<Utc>) -> Deal {
    deal(id, position, DealEntryType::In, hours_ago, 0.0, now)
}

fn deal(
    id: &str,
    position: &str,
    entry_type: DealEntryType,
    hours_ago: i64,
    profit: f64,
    now: DateTime<Utc>,
) -> Deal {
    Deal {
        id: id.to_string(),
        position_id: position.to_string(),
        deal_type: DealType::Sell,
        entry_type,
        profit,
        symbol: "EURUSD".to_string(),
        volume: 0.1,
        time: now - Duration::hours(hours_ago),
    }
}
