use crate::domain::ports::connection_provider::ConnectionProvider;
use crate::domain::ports::trading_connection::{ConnectionError, TradingConnection};
use crate::infrastructure::terminal::client::TerminalApiClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Builds one REST client per account against a shared endpoint and
/// API token.
pub struct TerminalConnectionProvider {
    base_url: String,
    auth_token: String,
}

impl TerminalConnectionProvider {
    pub fn new(base_url: String, auth_token: String) -> Self {
        Self {
            base_url,
            auth_token,
        }
    }
}

#[async_trait]
impl ConnectionProvider for TerminalConnectionProvider {
    async fn connection(
        &self,
        account_id: &str,
    ) -> Result<Arc<dyn TradingConnection>, ConnectionError> {
        Ok(Arc::new(TerminalApiClient::new(
            self.base_url.clone(),
            account_id.to_string(),
            self.auth_token.clone(),
        )))
    }
}
