use serde::{Deserialize, Serialize};
use std::fmt;

/// How a deal relates to the life of its position. Only `Out` legs are
/// realized closes; the rest open, flip, or offset against another
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealEntryType {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
    #[serde(rename = "INOUT")]
    InOut,
    #[serde(rename = "OUT_BY")]
    OutBy,
}

impl DealEntryType {
    /// Whether this leg realized profit or loss by closing the position,
    /// fully or partially.
    pub fn is_close(&self) -> bool {
        matches!(self, DealEntryType::Out)
    }
}

impl fmt::Display for DealEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealEntryType::In => write!(f, "IN"),
            DealEntryType::Out => write!(f, "OUT"),
            DealEntryType::InOut => write!(f, "INOUT"),
            DealEntryType::OutBy => write!(f, "OUT_BY"),
        }
    }
}
