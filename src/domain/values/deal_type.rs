use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the executed leg, as reported by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DealType {
    Buy,
    Sell,
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealType::Buy => write!(f, "BUY"),
            DealType::Sell => write!(f, "SELL"),
        }
    }
}
