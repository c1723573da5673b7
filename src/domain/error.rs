//! Domain Error Types
//!
//! Structural errors for postings and transactions, raised before anything
//! is sent to the ledger service.

use thiserror::Error;

/// Violations of the well-formedness rules for postings and transactions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Posting amount must be strictly positive
    #[error("Invalid amount: posting to {destination} has zero amount")]
    ZeroAmount { destination: String },

    /// A posting field was left empty
    #[error("Missing posting field: {0}")]
    MissingField(&'static str),

    /// A transaction needs at least one posting
    #[error("Transaction {reference} has no postings")]
    EmptyTransaction { reference: String },
}

impl DomainError {
    /// Create a zero amount error
    pub fn zero_amount(destination: impl Into<String>) -> Self {
        Self::ZeroAmount {
            destination: destination.into(),
        }
    }
}
