use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal state of an order retained in broker history. Live states
/// never appear here; history listings only hold finished orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderState {
    Filled,
    Canceled,
    Expired,
    Rejected,
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderState::Filled => write!(f, "FILLED"),
            OrderState::Canceled => write!(f, "CANCELED"),
            OrderState::Expired => write!(f, "EXPIRED"),
            OrderState::Rejected => write!(f, "REJECTED"),
        }
    }
}
