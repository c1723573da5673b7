//! Postings and transactions
//!
//! Mirrors the ledger v2 `PostTransaction` body: a list of postings plus
//! string metadata, a reference and a timestamp.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::DomainError;

/// The unbounded source account every generated posting draws from.
pub const WORLD: &str = "world";

/// String-to-string metadata attached to accounts, transactions and ledgers.
pub type Metadata = BTreeMap<String, String>;

/// Format a timestamp as ISO-8601 with millisecond precision (`2026-01-01T00:00:00.000Z`).
pub fn to_iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A single source -> destination movement of `amount` minor units of `asset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub source: String,
    pub destination: String,
    pub amount: u64,
    pub asset: String,
}

impl Posting {
    /// Posting funded by the `world` account
    pub fn from_world(destination: impl Into<String>, amount: u64, asset: impl Into<String>) -> Self {
        Self {
            source: WORLD.to_string(),
            destination: destination.into(),
            amount,
            asset: asset.into(),
        }
    }

    /// Check that every field is populated and the amount is positive.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.source.is_empty() {
            return Err(DomainError::MissingField("source"));
        }
        if self.destination.is_empty() {
            return Err(DomainError::MissingField("destination"));
        }
        if self.asset.is_empty() {
            return Err(DomainError::MissingField("asset"));
        }
        if self.amount == 0 {
            return Err(DomainError::zero_amount(&self.destination));
        }
        Ok(())
    }
}

/// Transaction body accepted by the ledger's create-transaction endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTransaction {
    pub postings: Vec<Posting>,
    pub metadata: Metadata,
    pub reference: String,
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl PostTransaction {
    pub fn new(
        postings: Vec<Posting>,
        metadata: Metadata,
        reference: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            postings,
            metadata,
            reference: reference.into(),
            timestamp,
        }
    }

    /// Value of the `status` metadata key, if any
    pub fn status(&self) -> Option<&str> {
        self.metadata.get("status").map(String::as_str)
    }

    /// Whether this transaction was generated as a failed payment
    pub fn is_failed(&self) -> bool {
        self.status() == Some("failed")
    }

    /// Destination addresses of every posting, in posting order
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.postings.iter().map(|p| p.destination.as_str())
    }

    /// Validate the transaction and each of its postings.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.postings.is_empty() {
            return Err(DomainError::EmptyTransaction {
                reference: self.reference.clone(),
            });
        }
        self.postings.iter().try_for_each(Posting::validate)
    }
}

mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_iso8601(timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> PostTransaction {
        let mut metadata = Metadata::new();
        metadata.insert("status".to_string(), "completed".to_string());
        PostTransaction::new(
            vec![Posting::from_world("summit:innovationlabs:ach:0001", 2500, "USD")],
            metadata,
            "TXN-ABCD1234",
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_transaction_wire_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["postings"][0]["source"], "world");
        assert_eq!(json["postings"][0]["amount"], 2500);
        assert_eq!(json["reference"], "TXN-ABCD1234");
        assert_eq!(json["timestamp"], "2026-03-01T12:30:00.000Z");
        assert_eq!(json["metadata"]["status"], "completed");
    }

    #[test]
    fn test_transaction_deserializes_rfc3339() {
        let json = r#"{
            "postings": [{"source": "world", "destination": "a:b", "amount": 5, "asset": "EUR"}],
            "metadata": {},
            "reference": "TXN-1",
            "timestamp": "2026-03-01T12:30:00+02:00"
        }"#;
        let tx: PostTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.timestamp, Utc.with_ymd_and_hms(2026, 3, 1, 10, 30, 0).unwrap());
        assert_eq!(tx.postings[0].asset, "EUR");
    }

    #[test]
    fn test_status_helpers() {
        let mut tx = sample();
        assert_eq!(tx.status(), Some("completed"));
        assert!(!tx.is_failed());

        tx.metadata.insert("status".to_string(), "failed".to_string());
        assert!(tx.is_failed());
    }

    #[test]
    fn test_validate_rejects_zero_amount() {
        let mut tx = sample();
        tx.postings[0].amount = 0;
        assert!(matches!(tx.validate(), Err(DomainError::ZeroAmount { .. })));
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut tx = sample();
        tx.postings[0].asset.clear();
        assert_eq!(tx.validate(), Err(DomainError::MissingField("asset")));

        tx.postings.clear();
        assert!(matches!(tx.validate(), Err(DomainError::EmptyTransaction { .. })));
    }
}
