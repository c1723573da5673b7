//! Generated accounts
//!
//! Accounts are identified by a colon-delimited address; they come into
//! existence on the ledger the first time a posting touches them.

use serde::{Deserialize, Serialize};

use super::Metadata;

/// Metadata value marking an account as a suspense sink.
pub const SUSPENSE_TYPE: &str = "suspense";

/// An account address together with the metadata it is created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAccount {
    pub address: String,
    pub metadata: Metadata,
}

impl GeneratedAccount {
    pub fn new(address: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            address: address.into(),
            metadata,
        }
    }

    /// Whether this is a suspense account receiving failed payments
    pub fn is_suspense(&self) -> bool {
        self.metadata.get("type").map(String::as_str) == Some(SUSPENSE_TYPE)
    }
}
