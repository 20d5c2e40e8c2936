use crate::domain::ports::trading_connection::{ConnectionError, ErrorDetails};
use thiserror::Error;

/// Stable error taxonomy surfaced to callers. Upstream error shapes vary
/// between SDK versions; callers depend on these categories instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Caller supplied a range selector outside today/week/month.
    #[error("Invalid history range")]
    InvalidRange,

    /// The broker trade server the account points at does not exist.
    #[error("Broker trade server not found")]
    BrokerServerNotFound,

    /// The broker rejected the account credentials.
    #[error("Broker authentication failed")]
    BrokerAuthenticationFailed,

    /// The terminal could not detect the broker server's settings.
    #[error("Broker settings detection failed")]
    BrokerSettingsDetectionFailed,

    /// Upstream rejected the request itself; validation messages retained.
    #[error("{message}")]
    UpstreamValidation { message: String, status: u16 },

    /// Upstream failed with a plain message and, sometimes, a status.
    #[error("{message}")]
    GenericUpstream { message: String, status: u16 },

    /// Upstream failed in a shape nothing here recognizes.
    #[error("Unknown upstream error")]
    Unknown,
}

impl DomainError {
    /// Recommended HTTP status for callers that speak HTTP. Validation
    /// and generic failures pass the upstream's own status through.
    pub fn http_status(&self) -> u16 {
        match self {
            DomainError::InvalidRange => 400,
            DomainError::BrokerServerNotFound => 404,
            DomainError::BrokerAuthenticationFailed => 401,
            DomainError::BrokerSettingsDetectionFailed => 400,
            DomainError::UpstreamValidation { status, .. } => *status,
            DomainError::GenericUpstream { status, .. } => *status,
            DomainError::Unknown => 500,
        }
    }

    /// Category name as callers and test suites key on it.
    pub fn category(&self) -> &'static str {
        match self {
            DomainError::InvalidRange => "InvalidRangeError",
            DomainError::BrokerServerNotFound => "BrokerServerNotFound",
            DomainError::BrokerAuthenticationFailed => "BrokerAuthenticationFailed",
            DomainError::BrokerSettingsDetectionFailed => "BrokerSettingsDetectionFailed",
            DomainError::UpstreamValidation { .. } => "UpstreamValidationError",
            DomainError::GenericUpstream { .. } => "GenericUpstreamError",
            DomainError::Unknown => "UnknownError",
        }
    }
}

/// Classification of raw connection failures, evaluated in order: broker
/// diagnostic codes first, then validation arrays, then bare messages.
/// An unrecognized diagnostic code falls through to the later rows, and
/// nothing classifiable resolves to `Unknown` rather than failing again.
impl From<ConnectionError> for DomainError {
    fn from(raw: ConnectionError) -> Self {
        match &raw.details {
            Some(ErrorDetails::Code(code)) => match code.as_str() {
                "E_SRV_NOT_FOUND" => return DomainError::BrokerServerNotFound,
                "E_AUTH" => return DomainError::BrokerAuthenticationFailed,
                "E_SERVER_TIMEZONE" => return DomainError::BrokerSettingsDetectionFailed,
                _ => {}
            },
            Some(ErrorDetails::Validation(issues)) => {
                let messages: Vec<&str> = issues
                    .iter()
                    .filter(|issue| !issue.message.is_empty())
                    .map(|issue| issue.message.as_str())
                    .collect();
                if !messages.is_empty() {
                    return DomainError::UpstreamValidation {
                        message: messages.join("; "),
                        status: raw.status.unwrap_or(400),
                    };
                }
            }
            None => {}
        }

        if let Some(message) = raw.message {
            return DomainError::GenericUpstream {
                status: raw.status.unwrap_or(500),
                message,
            };
        }
        DomainError::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::trading_connection::ValidationIssue;

    #[test]
    fn test_broker_codes_map_to_fixed_categories() {
        let err: DomainError = ConnectionError::code("E_SRV_NOT_FOUND").into();
        assert_eq!(err, DomainError::BrokerServerNotFound);
        assert_eq!(err.http_status(), 404);

        let err: DomainError = ConnectionError::code("E_AUTH").into();
        assert_eq!(err, DomainError::BrokerAuthenticationFailed);
        assert_eq!(err.http_status(), 401);

        let err: DomainError = ConnectionError::code("E_SERVER_TIMEZONE").into();
        assert_eq!(err, DomainError::BrokerSettingsDetectionFailed);
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn test_validation_array_passes_status_through() {
        let raw = ConnectionError {
            message: Some("Validation failed".into()),
            status: Some(400),
            details: Some(ErrorDetails::Validation(vec![
                ValidationIssue {
                    message: "offset must be a non-negative integer".into(),
                    parameter: Some("offset".into()),
                },
                ValidationIssue {
                    message: "limit must be positive".into(),
                    parameter: Some("limit".into()),
                },
            ])),
        };

        let err: DomainError = raw.into();
        assert_eq!(err.category(), "UpstreamValidationError");
        assert_eq!(err.http_status(), 400);
        assert_eq!(
            err.to_string(),
            "offset must be a non-negative integer; limit must be positive"
        );
    }

    #[test]
    fn test_message_with_status_is_generic_upstream() {
        let raw = ConnectionError {
            message: Some("boom".into()),
            status: Some(503),
            details: None,
        };

        let err: DomainError = raw.into();
        assert_eq!(err.category(), "GenericUpstreamError");
        assert_eq!(err.http_status(), 503);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_message_without_status_defaults_to_500() {
        let err: DomainError = ConnectionError::message("socket hang up").into();
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn test_empty_error_is_unknown() {
        let err: DomainError = ConnectionError::default().into();
        assert_eq!(err, DomainError::Unknown);
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn test_unrecognized_code_falls_through_to_message() {
        let raw = ConnectionError {
            message: Some("position not found".into()),
            status: Some(404),
            details: Some(ErrorDetails::Code("E_POSITION".into())),
        };

        let err: DomainError = raw.into();
        assert_eq!(err.category(), "GenericUpstreamError");
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn test_unrecognized_code_without_message_is_unknown() {
        let err: DomainError = ConnectionError::code("E_MYSTERY").into();
        assert_eq!(err, DomainError::Unknown);
    }

    #[test]
    fn test_empty_validation_array_is_not_validation() {
        let raw = ConnectionError {
            message: None,
            status: Some(400),
            details: Some(ErrorDetails::Validation(vec![])),
        };
        let err: DomainError = raw.into();
        assert_eq!(err, DomainError::Unknown);
    }
}
