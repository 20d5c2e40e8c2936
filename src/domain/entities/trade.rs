use crate::domain::entities::deal::Deal;
use crate::domain::values::deal_type::DealType;
use crate::domain::values::relative_time::relative_label;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-facing view of one realized close. `id` is the originating
/// deal id and doubles as the dedup key; `time` keeps the absolute
/// timestamp for sorting while `created_at` carries the human label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    pub profit: f64,
    pub symbol: String,
    pub created_at: String,
    pub volume: f64,
    pub time: DateTime<Utc>,
}

impl Trade {
    /// Project a closing deal into the output shape, labeling its age
    /// against the single `now` captured for the whole invocation.
    pub fn from_deal(deal: Deal, now: DateTime<Utc>) -> Self {
        Self {
            id: deal.id,
            deal_type: deal.deal_type,
            profit: deal.profit,
            symbol: deal.symbol,
            created_at: relative_label(deal.time, now),
            volume: deal.volume,
            time: deal.time,
        }
    }
}
