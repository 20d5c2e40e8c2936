use crate::domain::ports::trading_connection::{ConnectionError, TradingConnection};
use async_trait::async_trait;
use std::sync::Arc;

/// Hands out a fresh read-only connection for an account. Each pipeline
/// invocation asks for its own handle; nothing is cached across requests.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn connection(
        &self,
        account_id: &str,
    ) -> Result<Arc<dyn TradingConnection>, ConnectionError>;
}
