use crate::domain::values::deal_type::DealType;
use crate::domain::values::entry_type::DealEntryType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One executed leg against a position. The entry type tells opening
/// legs apart from the closing legs this pipeline reports on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub position_id: String,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    pub entry_type: DealEntryType,
    pub profit: f64,
    pub symbol: String,
    pub volume: f64,
    pub time: DateTime<Utc>,
}
