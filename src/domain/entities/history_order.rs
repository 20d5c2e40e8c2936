use crate::domain::values::order_state::OrderState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed or canceled order retained in broker history. Every order
/// belongs to exactly one position; a position usually accumulates
/// several orders over its life (partial fills, partial closes).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOrder {
    pub id: String,
    pub position_id: String,
    pub state: OrderState,
    pub time: DateTime<Utc>,
    /// When the order reached its terminal state, if the broker reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_time: Option<DateTime<Utc>>,
}
