//! Ledger API errors
//!
//! Failures at the ledger service boundary, classified so the seeder can
//! tell an already-existing resource apart from a real failure.

use serde::Deserialize;
use thiserror::Error;

/// Error codes the ledger service uses for "already exists".
const CONFLICT_CODES: &[&str] = &["LEDGER_ALREADY_EXISTS", "CONFLICT"];

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Error, Debug)]
pub enum LedgerApiError {
    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Rejected by ledger (status {status}): {message}")]
    Validation { status: u16, message: String },

    #[error("Ledger server error (status {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Rate limited - retries exhausted")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Error body returned by the ledger service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error_code: Option<String>,
    #[serde(alias = "errorDescription")]
    error_message: Option<String>,
}

impl LedgerApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
        let code = parsed.as_ref().and_then(|b| b.error_code.clone());
        let message = parsed
            .and_then(|b| b.error_message)
            .unwrap_or_else(|| Self::truncate_body(body));
        let message = match code.as_deref() {
            Some(code) => format!("{code}: {message}"),
            None => message,
        };

        let is_conflict_code = code
            .as_deref()
            .map(|c| CONFLICT_CODES.contains(&c))
            .unwrap_or(false);

        match status.as_u16() {
            409 => LedgerApiError::Conflict(message),
            _ if is_conflict_code => LedgerApiError::Conflict(message),
            429 => LedgerApiError::RateLimited,
            400..=499 => LedgerApiError::Validation {
                status: status.as_u16(),
                message,
            },
            500..=599 => LedgerApiError::Server {
                status: status.as_u16(),
                message,
            },
            _ => LedgerApiError::InvalidResponse(format!("Status {}: {}", status, message)),
        }
    }

    /// The resource already exists; creation can be treated as done
    pub fn is_conflict(&self) -> bool {
        matches!(self, LedgerApiError::Conflict(_))
    }

    /// Short label for logs and reports
    pub fn category(&self) -> &'static str {
        match self {
            LedgerApiError::Conflict(_) => "conflict",
            LedgerApiError::Validation { .. } => "validation",
            LedgerApiError::Server { .. } => "server",
            LedgerApiError::RateLimited => "rate_limited",
            LedgerApiError::Network(_) => "network",
            LedgerApiError::InvalidResponse(_) => "invalid_response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_conflict_by_status() {
        let err = LedgerApiError::from_status(StatusCode::CONFLICT, "");
        assert!(err.is_conflict());
    }

    #[test]
    fn test_conflict_by_error_code() {
        let body = r#"{"errorCode":"LEDGER_ALREADY_EXISTS","errorMessage":"ledger exists"}"#;
        let err = LedgerApiError::from_status(StatusCode::BAD_REQUEST, body);
        assert!(err.is_conflict());
        assert!(err.to_string().contains("ledger exists"));
    }

    #[test]
    fn test_validation_error_message() {
        let body = r#"{"errorCode":"VALIDATION","errorMessage":"invalid posting"}"#;
        let err = LedgerApiError::from_status(StatusCode::BAD_REQUEST, body);
        match err {
            LedgerApiError::Validation { status, ref message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "VALIDATION: invalid posting");
            }
            other => panic!("Expected Validation, got: {:?}", other),
        }
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn test_error_description_alias() {
        let body = r#"{"errorCode":"INTERNAL","errorDescription":"boom"}"#;
        let err = LedgerApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(matches!(err, LedgerApiError::Server { status: 500, .. }));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_plain_body_is_truncated() {
        let body = "x".repeat(2_000);
        let err = LedgerApiError::from_status(StatusCode::BAD_GATEWAY, &body);
        let text = err.to_string();
        assert!(text.contains("truncated, 2000 total bytes"));
        assert!(text.len() < 700);
    }

    #[test]
    fn test_rate_limited() {
        let err = LedgerApiError::from_status(StatusCode::TOO_MANY_REQUESTS, "");
        assert!(matches!(err, LedgerApiError::RateLimited));
        assert!(!err.is_conflict());
    }
}
