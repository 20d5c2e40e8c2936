use crate::domain::entities::deal::Deal;
use crate::domain::entities::history_order::HistoryOrder;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Read-only window onto one account's trading history, supplied by the
/// terminal connection. Implementations can hit the terminal REST API,
/// replay fixtures, or script failures for tests.
#[async_trait]
pub trait TradingConnection: Send + Sync {
    /// One page of orders finished inside `[start, end)`; paging
    /// semantics are owned by the terminal. Inclusive of `start`,
    /// exclusive of `end`.
    async fn list_history_orders(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<HistoryOrder>, ConnectionError>;

    /// Every deal recorded against a position over its life, opening and
    /// closing legs alike.
    async fn list_deals_for_position(&self, position_id: &str)
        -> Result<Vec<Deal>, ConnectionError>;
}

/// Raw failure surfaced by a terminal connection, before classification.
/// The upstream SDK is not consistent about shape: broker diagnostics
/// arrive as a code under `details`, request rejections as a validation
/// array, transport problems as a bare message.
#[derive(Debug, Clone, Default)]
pub struct ConnectionError {
    pub message: Option<String>,
    pub status: Option<u16>,
    pub details: Option<ErrorDetails>,
}

#[derive(Debug, Clone)]
pub enum ErrorDetails {
    /// Broker diagnostic code, e.g. `E_AUTH`.
    Code(String),
    /// Field-level issues for a request the upstream rejected.
    Validation(Vec<ValidationIssue>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationIssue {
    pub message: String,
    #[serde(default)]
    pub parameter: Option<String>,
}

impl ConnectionError {
    /// Transport-level failure with no structured upstream body.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status: None,
            details: None,
        }
    }

    /// Broker diagnostic failure carrying only a code.
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            message: None,
            status: None,
            details: Some(ErrorDetails::Code(code.into())),
        }
    }
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ErrorDetails::Code(code)) = &self.details {
            return write!(f, "broker error {code}");
        }
        match &self.message {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "upstream connection failure"),
        }
    }
}

impl std::error::Error for ConnectionError {}
