pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::historical_trades::HistoricalTradesUseCase;
use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::connection_provider::ConnectionProvider;
use crate::domain::values::history_range::HistoryRange;
use crate::infrastructure::terminal::provider::TerminalConnectionProvider;
use std::sync::Arc;

/// Endpoint used when `TRADELENS_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://mt-client-api-v1.agiliumtrade.agiliumtrade.ai";

pub struct TradeLens {
    historical_trades_uc: HistoricalTradesUseCase,
}

impl TradeLens {
    /// Build against the terminal API endpoint and token configured in
    /// the environment.
    pub fn new() -> Self {
        let base_url =
            std::env::var("TRADELENS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let auth_token = std::env::var("TRADELENS_API_TOKEN").unwrap_or_default();

        let connections: Arc<dyn ConnectionProvider> =
            Arc::new(TerminalConnectionProvider::new(base_url, auth_token));
        Self::with_connection_provider(connections)
    }

    pub fn with_connection_provider(connections: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            historical_trades_uc: HistoricalTradesUseCase::new(connections),
        }
    }

    // Delegating methods
    pub async fn historical_trades(
        &self,
        account_id: &str,
        range: HistoryRange,
        offset: Option<usize>,
    ) -> Result<Vec<Trade>, DomainError> {
        self.historical_trades_uc
            .execute(account_id, range, offset)
            .await
    }
}

impl Default for TradeLens {
    fn default() -> Self {
        Self::new()
    }
}
