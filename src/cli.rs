//! Command line arguments
//!
//! Explicit sizes override the chosen preset and are clamped to the accepted
//! input ranges before generation.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::{self, BankingPartner};
use crate::error::AppResult;
use crate::generator::{SampleDataConfig, SampleDataPreset};

/// Generate sample ledgers, accounts and transactions for a ledger service
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "ledger_seeder")]
#[command(about = "Sample data generator for a double-entry ledger service", long_about = None)]
#[command(version)]
pub struct CliArgs {
    /// Size preset (small, medium, large); defaults to SAMPLE_PRESET
    #[arg(long)]
    pub preset: Option<SampleDataPreset>,

    /// Number of banking partners, in catalog order
    #[arg(long)]
    pub partners: Option<usize>,

    /// Generate for this partner code only (e.g. SUMMIT)
    #[arg(long, value_name = "CODE", conflicts_with = "partners")]
    pub partner: Option<String>,

    /// Ledgers per partner
    #[arg(long)]
    pub ledgers: Option<usize>,

    /// Accounts per ledger
    #[arg(long)]
    pub accounts: Option<usize>,

    /// Transactions per ledger
    #[arg(long)]
    pub transactions: Option<usize>,

    /// Seed for reproducible output; defaults to SAMPLE_SEED
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the generated data as JSON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Upload the generated data to the ledger service
    #[arg(long)]
    pub upload: bool,
}

impl CliArgs {
    /// Start from the chosen preset, apply explicit sizes, then clamp to
    /// the accepted input ranges.
    pub fn sample_config(&self, default_preset: SampleDataPreset) -> SampleDataConfig {
        let mut config = self.preset.unwrap_or(default_preset).config();
        if let Some(n) = self.partners {
            config.banking_partners = n;
        }
        if self.partner.is_some() {
            config.banking_partners = 1;
        }
        if let Some(n) = self.ledgers {
            config.ledgers_per_partner = n;
        }
        if let Some(n) = self.accounts {
            config.accounts_per_ledger = n;
        }
        if let Some(n) = self.transactions {
            config.transactions_per_ledger = n;
        }
        config.clamped()
    }

    /// The partner selected with `--partner`, if any
    pub fn partner(&self) -> AppResult<Option<&'static BankingPartner>> {
        match &self.partner {
            Some(code) => Ok(Some(catalog::partner_by_code(code)?)),
            None => Ok(None),
        }
    }
}
