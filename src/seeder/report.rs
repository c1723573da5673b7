//! Seeding report

use std::fmt;

use serde::Serialize;

/// Which kind of item failed to seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Ledger,
    Account,
    Transaction,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Ledger => write!(f, "ledger"),
            FailureKind::Account => write!(f, "account"),
            FailureKind::Transaction => write!(f, "transaction"),
        }
    }
}

/// One item the ledger service did not accept
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedFailure {
    pub kind: FailureKind,
    /// Ledger name, account address or transaction reference
    pub target: String,
    pub message: String,
}

impl SeedFailure {
    pub fn new(kind: FailureKind, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SeedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to create {} {}: {}", self.kind, self.target, self.message)
    }
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Ledgers created or found already existing
    pub ledgers: Vec<String>,
    /// Addresses of funded accounts
    pub accounts: Vec<String>,
    /// References of posted transactions
    pub transactions: Vec<String>,
    pub failures: Vec<SeedFailure>,
}

impl SeedReport {
    pub fn succeeded(&self) -> usize {
        self.ledgers.len() + self.accounts.len() + self.transactions.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures_of(&self, kind: FailureKind) -> impl Iterator<Item = &SeedFailure> {
        self.failures.iter().filter(move |f| f.kind == kind)
    }
}
