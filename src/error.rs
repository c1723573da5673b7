//! Error handling module
//!
//! Crate-level error type aggregating the module errors.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Ledger service unavailable at {0}")]
    LedgerUnavailable(String),

    #[error(transparent)]
    LedgerApi(#[from] crate::client::LedgerApiError),

    #[error(transparent)]
    Catalog(#[from] crate::catalog::CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
