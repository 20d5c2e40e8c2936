use crate::domain::entities::deal::Deal;
use crate::domain::entities::history_order::HistoryOrder;
use crate::domain::ports::trading_connection::{
    ConnectionError, ErrorDetails, TradingConnection, ValidationIssue,
};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

const AUTH_HEADER: &str = "auth-token";

/// REST client for one account on the trading-terminal API.
pub struct TerminalApiClient {
    base_url: String,
    account_id: String,
    auth_token: String,
    client: reqwest::Client,
}

impl TerminalApiClient {
    pub fn new(base_url: String, account_id: String, auth_token: String) -> Self {
        Self {
            base_url,
            account_id,
            auth_token,
            client: reqwest::Client::builder()
                .user_agent("tradelens/0.1")
                .build()
                .unwrap_or_default(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, ConnectionError> {
        let resp = self
            .client
            .get(&url)
            .query(query)
            .header(AUTH_HEADER, &self.auth_token)
            .send()
            .await
            .map_err(|e| ConnectionError::message(format!("terminal request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), url = %url, "terminal API call failed");
            return Err(decode_error_body(status.as_u16(), &body));
        }

        resp.json::<T>()
            .await
            .map_err(|e| ConnectionError::message(format!("invalid terminal response: {e}")))
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Error bodies come back as `{ message?, status?, details? }` where
/// `details` is either a broker diagnostic code or an array of
/// validation issues. Anything unparseable keeps the HTTP status.
fn decode_error_body(http_status: u16, body: &str) -> ConnectionError {
    #[derive(Deserialize)]
    struct WireError {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        status: Option<u16>,
        #[serde(default)]
        details: Option<serde_json::Value>,
    }

    let wire: WireError = match serde_json::from_str(body) {
        Ok(wire) => wire,
        Err(_) => {
            return ConnectionError {
                message: Some(format!("terminal API returned {http_status}")),
                status: Some(http_status),
                details: None,
            }
        }
    };

    let details = wire.details.and_then(|value| match value {
        serde_json::Value::String(code) => Some(ErrorDetails::Code(code)),
        serde_json::Value::Array(items) => {
            let issues: Vec<ValidationIssue> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();
            (!issues.is_empty()).then_some(ErrorDetails::Validation(issues))
        }
        _ => None,
    });

    ConnectionError {
        message: wire.message,
        status: wire.status.or(Some(http_status)),
        details,
    }
}

#[async_trait]
impl TradingConnection for TerminalApiClient {
    async fn list_history_orders(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<HistoryOrder>, ConnectionError> {
        let url = format!(
            "{}/users/current/accounts/{}/history-orders/time/{}/{}",
            self.base_url,
            self.account_id,
            format_time(start),
            format_time(end),
        );
        self.get_json(
            url,
            &[
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn list_deals_for_position(
        &self,
        position_id: &str,
    ) -> Result<Vec<Deal>, ConnectionError> {
        let url = format!(
            "{}/users/current/accounts/{}/history-deals/position/{}",
            self.base_url, self.account_id, position_id,
        );
        self.get_json(url, &[]).await
    }
}
