//! Sample data seeder
//!
//! Pushes a generated [`SampleDataResult`] into a ledger service: every
//! ledger first, then per ledger a funding transaction for each account,
//! then the bundle's transactions verbatim.
//!
//! Calls are issued one at a time. A failing item is recorded in the
//! [`SeedReport`] and the run moves on; nothing aborts the batch. An
//! already-existing ledger counts as created.

mod report;

pub use report::{FailureKind, SeedFailure, SeedReport};

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::client::{CreateLedgerRequest, LedgerApi, LedgerApiError};
use crate::domain::{GeneratedAccount, Metadata, PostTransaction, Posting};
use crate::generator::{LedgerBundle, SampleDataResult};

/// Opening balance posted to every generated account
pub const FUNDING_AMOUNT: u64 = 1_000;

/// Asset of the opening balance
pub const FUNDING_ASSET: &str = "USD";

/// `world -> account` transaction that brings an account into existence.
pub fn funding_transaction(account: &GeneratedAccount, timestamp: DateTime<Utc>) -> PostTransaction {
    PostTransaction::new(
        vec![Posting::from_world(&account.address, FUNDING_AMOUNT, FUNDING_ASSET)],
        account.metadata.clone(),
        format!("CREATE-{}", account.address),
        timestamp,
    )
}

/// Metadata attached to every ledger the seeder creates
pub fn ledger_metadata(created_at: DateTime<Utc>) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("type".to_string(), "payment_processing".to_string());
    metadata.insert("created_by".to_string(), "sample_data_generator".to_string());
    metadata.insert("created_at".to_string(), crate::domain::transaction::to_iso8601(&created_at));
    metadata
}

/// Uploads generated sample data through a [`LedgerApi`].
pub struct SampleDataSeeder<C> {
    client: C,
}

impl<C: LedgerApi> SampleDataSeeder<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Seed everything in `data`, collecting per-item failures.
    pub async fn seed(&self, data: &SampleDataResult) -> SeedReport {
        let mut report = SeedReport::default();

        for ledger in &data.ledger_names {
            self.seed_ledger(ledger, &mut report).await;
        }

        for bundle in &data.bundles {
            self.seed_bundle(bundle, &mut report).await;
        }

        info!(
            ledgers = report.ledgers.len(),
            accounts = report.accounts.len(),
            transactions = report.transactions.len(),
            failures = report.failures.len(),
            "Sample data seeding finished"
        );

        report
    }

    async fn seed_ledger(&self, ledger: &str, report: &mut SeedReport) {
        let request = CreateLedgerRequest {
            metadata: ledger_metadata(Utc::now()),
        };

        match self.client.create_ledger(ledger, &request).await {
            Ok(()) => {
                info!(ledger = ledger, "Created ledger");
                report.ledgers.push(ledger.to_string());
            }
            Err(e) if e.is_conflict() => {
                warn!(ledger = ledger, "Ledger already exists, continuing");
                report.ledgers.push(ledger.to_string());
            }
            Err(e) => Self::record(report, FailureKind::Ledger, ledger, &e),
        }
    }

    async fn seed_bundle(&self, bundle: &LedgerBundle, report: &mut SeedReport) {
        let ledger = bundle.ledger_name.as_str();

        for account in &bundle.accounts {
            let transaction = funding_transaction(account, Utc::now());
            match self.client.create_transaction(ledger, &transaction).await {
                Ok(()) => report.accounts.push(account.address.clone()),
                Err(e) => Self::record(report, FailureKind::Account, &account.address, &e),
            }
        }

        for transaction in &bundle.transactions {
            if let Err(e) = transaction.validate() {
                error!(ledger = ledger, reference = %transaction.reference, error = %e, "Skipping malformed transaction");
                report.failures.push(SeedFailure::new(
                    FailureKind::Transaction,
                    &transaction.reference,
                    e.to_string(),
                ));
                continue;
            }

            match self.client.create_transaction(ledger, transaction).await {
                Ok(()) => report.transactions.push(transaction.reference.clone()),
                Err(e) => Self::record(report, FailureKind::Transaction, &transaction.reference, &e),
            }
        }
    }

    fn record(report: &mut SeedReport, kind: FailureKind, target: &str, e: &LedgerApiError) {
        error!(kind = %kind, item = target, category = e.category(), error = %e, "Seeding item failed");
        report.failures.push(SeedFailure::new(kind, target, e.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{SampleDataConfig, SampleDataGenerator};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// In-memory ledger double. `failing_references` holds `ledger/reference` keys.
    #[derive(Default)]
    struct FakeLedger {
        existing_ledgers: HashSet<String>,
        failing_references: HashSet<String>,
        offline: bool,
        posted: Mutex<Vec<(String, PostTransaction)>>,
        created: Mutex<Vec<(String, CreateLedgerRequest)>>,
    }

    #[async_trait]
    impl LedgerApi for FakeLedger {
        async fn health_check(&self) -> bool {
            !self.offline
        }

        async fn create_ledger(&self, ledger: &str, request: &CreateLedgerRequest) -> Result<(), LedgerApiError> {
            if self.offline {
                return Err(LedgerApiError::InvalidResponse("offline".to_string()));
            }
            if self.existing_ledgers.contains(ledger) {
                return Err(LedgerApiError::Conflict(format!("LEDGER_ALREADY_EXISTS: {ledger}")));
            }
            self.created.lock().unwrap().push((ledger.to_string(), request.clone()));
            Ok(())
        }

        async fn create_transaction(&self, ledger: &str, transaction: &PostTransaction) -> Result<(), LedgerApiError> {
            if self.failing_references.contains(&format!("{ledger}/{}", transaction.reference)) {
                return Err(LedgerApiError::Validation {
                    status: 400,
                    message: "rejected".to_string(),
                });
            }
            self.posted
                .lock()
                .unwrap()
                .push((ledger.to_string(), transaction.clone()));
            Ok(())
        }
    }

    fn sample() -> SampleDataResult {
        SampleDataGenerator::seeded(10).generate(&SampleDataConfig::new(1, 2, 4, 5))
    }

    #[test]
    fn test_funding_transaction() {
        let mut metadata = Metadata::new();
        metadata.insert("customer_type".to_string(), "retail".to_string());
        let account = GeneratedAccount::new("summit:dailybasket:rtp:0002", metadata.clone());
        let now = Utc::now();
        let tx = funding_transaction(&account, now);

        assert_eq!(tx.reference, "CREATE-summit:dailybasket:rtp:0002");
        assert_eq!(tx.postings, vec![Posting::from_world("summit:dailybasket:rtp:0002", 1_000, "USD")]);
        assert_eq!(tx.metadata, metadata);
    }

    #[test]
    fn test_ledger_metadata() {
        let metadata = ledger_metadata(Utc::now());
        assert_eq!(metadata["type"], "payment_processing");
        assert_eq!(metadata["created_by"], "sample_data_generator");
        assert!(metadata.contains_key("created_at"));
    }

    #[tokio::test]
    async fn test_seed_everything_succeeds() {
        let data = sample();
        let seeder = SampleDataSeeder::new(FakeLedger::default());
        let report = seeder.seed(&data).await;

        assert_eq!(report.ledgers, data.ledger_names);
        assert_eq!(report.accounts.len(), data.total_accounts);
        assert_eq!(report.transactions.len(), data.total_transactions);
        assert!(report.is_complete());

        let posted = seeder.client().posted.lock().unwrap();
        assert_eq!(posted.len(), data.total_accounts + data.total_transactions);
        // Funding transactions for the first bundle come before its generated ones
        let first = &data.bundles[0];
        assert!(posted[0].1.reference.starts_with("CREATE-"));
        assert_eq!(posted[0].0, first.ledger_name);
        assert_eq!(posted[first.accounts.len()].1, first.transactions[0]);
    }

    #[tokio::test]
    async fn test_existing_ledger_is_success() {
        let data = sample();
        let ledger = FakeLedger {
            existing_ledgers: HashSet::from([data.ledger_names[0].clone()]),
            ..Default::default()
        };
        let seeder = SampleDataSeeder::new(ledger);
        let report = seeder.seed(&data).await;

        assert_eq!(report.ledgers.len(), 2);
        assert!(report.failures.is_empty());
        assert_eq!(seeder.client().created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_recorded_and_processing_continues() {
        let data = sample();
        let bad_account = data.bundles[0].accounts[0].address.clone();
        let bad_transaction = data.bundles[1].transactions[0].reference.clone();
        let ledger = FakeLedger {
            failing_references: HashSet::from([
                format!("{}/CREATE-{bad_account}", data.ledger_names[0]),
                format!("{}/{bad_transaction}", data.ledger_names[1]),
            ]),
            ..Default::default()
        };
        let report = SampleDataSeeder::new(ledger).seed(&data).await;

        assert_eq!(report.failed(), 2);
        assert_eq!(report.accounts.len(), data.total_accounts - 1);
        assert_eq!(report.transactions.len(), data.total_transactions - 1);
        assert_eq!(report.failures[0].kind, FailureKind::Account);
        assert_eq!(report.failures[0].target, bad_account);
        assert_eq!(report.failures[1].kind, FailureKind::Transaction);
        assert_eq!(report.failures[1].target, bad_transaction);
        assert!(!report.is_complete());
    }

    #[tokio::test]
    async fn test_ledger_failure_recorded() {
        let data = sample();
        let ledger = FakeLedger {
            offline: true,
            ..Default::default()
        };
        let report = SampleDataSeeder::new(ledger).seed(&data).await;

        assert!(report.ledgers.is_empty());
        assert_eq!(report.failures_of(FailureKind::Ledger).count(), 2);
    }

    #[tokio::test]
    async fn test_malformed_transaction_skipped() {
        let mut data = sample();
        data.bundles[0].transactions[0].postings[0].amount = 0;
        let seeder = SampleDataSeeder::new(FakeLedger::default());
        let report = seeder.seed(&data).await;

        assert_eq!(report.failures_of(FailureKind::Transaction).count(), 1);
        assert_eq!(report.transactions.len(), data.total_transactions - 1);
    }
}
