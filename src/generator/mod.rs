//! Sample data generator
//!
//! Synthesizes internally consistent ledgers for demos: for every
//! (partner, ledger template) pair requested by a [`SampleDataConfig`] it
//! allocates a ledger name, synthesizes accounts, then synthesizes
//! transactions that only reference those accounts.
//!
//! Generation is synchronous, performs no I/O and cannot fail. All
//! randomness comes from the generator's own `Rng`, so a seeded generator
//! with a fixed reference time reproduces its output exactly.
//!
//! # Example
//! ```
//! use ledger_seeder::generator::{SampleDataConfig, SampleDataGenerator};
//!
//! let config = SampleDataConfig::new(1, 1, 4, 5);
//! let result = SampleDataGenerator::seeded(7).generate(&config);
//! assert_eq!(result.bundles.len(), 1);
//! assert_eq!(result.bundles[0].transactions.len(), 6);
//! ```

pub mod accounts;
pub mod ledger_name;
pub mod random;
pub mod sample_config;
pub mod transactions;

pub use accounts::{accounts_per_combination, synthesize_accounts};
pub use ledger_name::allocate_ledger_name;
pub use sample_config::{GenerationEstimate, SampleDataConfig, SampleDataPreset, UnknownPreset};
pub use transactions::{debug_transaction, synthesize_transactions, DEBUG_REFERENCE};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, BankingPartner};
use crate::domain::{GeneratedAccount, PostTransaction};

/// One ledger's name, accounts and transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerBundle {
    /// Allocated name, unique within the run
    pub ledger_name: String,

    /// Regular accounts followed by one suspense account per payment method
    pub accounts: Vec<GeneratedAccount>,

    /// Generated transactions, ending with the debug fixture
    pub transactions: Vec<PostTransaction>,
}

impl LedgerBundle {
    /// Whether `address` is one of this bundle's accounts
    pub fn has_account(&self, address: &str) -> bool {
        self.accounts.iter().any(|a| a.address == address)
    }
}

/// Output of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDataResult {
    /// Ledger names in generation order
    pub ledger_names: Vec<String>,

    /// Accounts across all bundles, suspense accounts included
    pub total_accounts: usize,

    /// Transactions across all bundles, debug fixtures included
    pub total_transactions: usize,

    /// One bundle per (partner, ledger template) pair
    pub bundles: Vec<LedgerBundle>,
}

/// Generator owning its random source and reference time.
pub struct SampleDataGenerator<R> {
    rng: R,
    reference_time: DateTime<Utc>,
}

impl SampleDataGenerator<StdRng> {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SampleDataGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            reference_time: Utc::now(),
        }
    }

    /// Pin the clock used for ledger name suffixes and generated timestamps.
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = reference_time;
        self
    }

    /// Generate the bundle for a single partner ledger template.
    pub fn generate_ledger(
        &mut self,
        partner: &BankingPartner,
        template: &str,
        config: &SampleDataConfig,
    ) -> LedgerBundle {
        let now = self.reference_time;
        let ledger_name = allocate_ledger_name(template, now, &mut self.rng);
        let accounts = synthesize_accounts(&mut self.rng, partner, config.accounts_per_ledger, now);
        let mut transactions = synthesize_transactions(
            &mut self.rng,
            partner,
            &accounts,
            config.transactions_per_ledger,
            now,
        );
        transactions.push(debug_transaction(now));

        tracing::debug!(
            ledger = %ledger_name,
            partner = partner.code,
            accounts = accounts.len(),
            transactions = transactions.len(),
            "Generated ledger bundle"
        );

        LedgerBundle {
            ledger_name,
            accounts,
            transactions,
        }
    }

    /// Generate bundles in catalog order, then ledger template order.
    pub fn generate(&mut self, config: &SampleDataConfig) -> SampleDataResult {
        let partners = catalog::partners();
        let count = config.banking_partners.min(partners.len());
        self.generate_for(&partners[..count], config)
    }

    /// Generate bundles for `partners` as given, ignoring
    /// `config.banking_partners`.
    pub fn generate_for(&mut self, partners: &[BankingPartner], config: &SampleDataConfig) -> SampleDataResult {
        let mut bundles = Vec::new();

        for partner in partners {
            for template in partner.ledger_templates.iter().take(config.ledgers_per_partner) {
                bundles.push(self.generate_ledger(partner, template, config));
            }
        }

        let result = SampleDataResult {
            ledger_names: bundles.iter().map(|b| b.ledger_name.clone()).collect(),
            total_accounts: bundles.iter().map(|b| b.accounts.len()).sum(),
            total_transactions: bundles.iter().map(|b| b.transactions.len()).sum(),
            bundles,
        };

        tracing::info!(
            ledgers = result.ledger_names.len(),
            accounts = result.total_accounts,
            transactions = result.total_transactions,
            "Sample data generated"
        );

        result
    }
}

/// Generate sample data with an entropy-seeded generator and the current time.
pub fn generate(config: &SampleDataConfig) -> SampleDataResult {
    SampleDataGenerator::from_entropy().generate(config)
}
