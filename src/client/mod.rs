//! Ledger API client module
//!
//! The ledger service is an external collaborator. This module defines the
//! calls the seeder needs as the [`LedgerApi`] trait and provides an HTTP
//! implementation against the ledger's v2 REST API.

pub mod error;
pub mod http;

pub use error::LedgerApiError;
pub use http::HttpLedgerClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Metadata, PostTransaction};

/// Body of the create-ledger call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLedgerRequest {
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

/// Operations the seeder performs against a ledger service.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Whether the service answers its info endpoint
    async fn health_check(&self) -> bool;

    /// Create a ledger. An existing ledger yields [`LedgerApiError::Conflict`].
    async fn create_ledger(&self, ledger: &str, request: &CreateLedgerRequest) -> Result<(), LedgerApiError>;

    /// Post a transaction to `ledger`
    async fn create_transaction(&self, ledger: &str, transaction: &PostTransaction) -> Result<(), LedgerApiError>;
}
