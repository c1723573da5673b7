//! Generation settings
//!
//! `SampleDataConfig` sizes a generation run. The generator takes it as is;
//! interactive callers use [`SampleDataConfig::clamped`] first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Caller-side input limits
pub const MAX_BANKING_PARTNERS: usize = 5;
pub const MAX_LEDGERS_PER_PARTNER: usize = 4;
pub const MAX_ACCOUNTS_PER_LEDGER: usize = 50;
pub const MAX_TRANSACTIONS_PER_LEDGER: usize = 100;

/// Size of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDataConfig {
    pub banking_partners: usize,
    pub ledgers_per_partner: usize,
    pub accounts_per_ledger: usize,
    pub transactions_per_ledger: usize,
}

/// Nominal item counts for a config, as shown before generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationEstimate {
    pub ledgers: usize,
    pub accounts: usize,
    pub transactions: usize,
    pub total: usize,
}

impl SampleDataConfig {
    pub const fn new(
        banking_partners: usize,
        ledgers_per_partner: usize,
        accounts_per_ledger: usize,
        transactions_per_ledger: usize,
    ) -> Self {
        Self {
            banking_partners,
            ledgers_per_partner,
            accounts_per_ledger,
            transactions_per_ledger,
        }
    }

    pub const fn preset(preset: SampleDataPreset) -> Self {
        match preset {
            SampleDataPreset::Small => Self::new(2, 1, 5, 10),
            SampleDataPreset::Medium => Self::new(3, 2, 10, 25),
            SampleDataPreset::Large => Self::new(5, 4, 20, 50),
        }
    }

    /// Copy with every field forced into its accepted input range.
    pub fn clamped(&self) -> Self {
        Self {
            banking_partners: self.banking_partners.clamp(1, MAX_BANKING_PARTNERS),
            ledgers_per_partner: self.ledgers_per_partner.clamp(1, MAX_LEDGERS_PER_PARTNER),
            accounts_per_ledger: self.accounts_per_ledger.clamp(1, MAX_ACCOUNTS_PER_LEDGER),
            transactions_per_ledger: self
                .transactions_per_ledger
                .clamp(1, MAX_TRANSACTIONS_PER_LEDGER),
        }
    }

    /// Nominal counts. Partners and ledgers are capped by what the catalog
    /// holds; generated results may carry more accounts and transactions
    /// (rounding, suspense accounts, the debug fixture).
    pub fn estimate(&self) -> GenerationEstimate {
        let partners = self.banking_partners.min(catalog::partners().len());
        let ledgers = partners * self.ledgers_per_partner.min(MAX_LEDGERS_PER_PARTNER);
        let accounts = ledgers * self.accounts_per_ledger;
        let transactions = ledgers * self.transactions_per_ledger;
        GenerationEstimate {
            ledgers,
            accounts,
            transactions,
            total: ledgers + accounts + transactions,
        }
    }
}

impl Default for SampleDataConfig {
    fn default() -> Self {
        Self::preset(SampleDataPreset::Medium)
    }
}

/// Named generation sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleDataPreset {
    Small,
    #[default]
    Medium,
    Large,
}

impl SampleDataPreset {
    pub const ALL: [SampleDataPreset; 3] = [
        SampleDataPreset::Small,
        SampleDataPreset::Medium,
        SampleDataPreset::Large,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SampleDataPreset::Small => "small",
            SampleDataPreset::Medium => "medium",
            SampleDataPreset::Large => "large",
        }
    }

    pub fn config(&self) -> SampleDataConfig {
        SampleDataConfig::preset(*self)
    }
}

impl fmt::Display for SampleDataPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preset name was not one of small, medium, large
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sample data preset: {0} (expected small, medium or large)")]
pub struct UnknownPreset(pub String);

impl FromStr for SampleDataPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleDataPreset::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
