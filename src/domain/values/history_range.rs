use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse time window the caller can ask closed-trade history for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRange {
    Today,
    Week,
    Month,
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryRange::Today => write!(f, "today"),
            HistoryRange::Week => write!(f, "week"),
            HistoryRange::Month => write!(f, "month"),
        }
    }
}

impl FromStr for HistoryRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(HistoryRange::Today),
            "week" => Ok(HistoryRange::Week),
            "month" => Ok(HistoryRange::Month),
            _ => Err(DomainError::InvalidRange),
        }
    }
}
