//! Payment methods
//!
//! Each rail has its own amount envelope (minor units), allowed assets and
//! suspense account name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Amounts a payment snaps to when it follows the "round number" pattern.
pub const ROUND_AMOUNTS: [u64; 10] = [10, 25, 50, 100, 250, 500, 1000, 2500, 5000, 10000];

/// Inclusive `[min, max]` range of amounts in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountEnvelope {
    pub min: u64,
    pub max: u64,
}

impl AmountEnvelope {
    pub fn contains(&self, amount: u64) -> bool {
        (self.min..=self.max).contains(&amount)
    }
}

/// Supported payment rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "ACH")]
    Ach,
    #[serde(rename = "RTP")]
    Rtp,
    Wire,
    FedNow,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Ach,
        PaymentMethod::Rtp,
        PaymentMethod::Wire,
        PaymentMethod::FedNow,
    ];

    /// Display name used in metadata (`ACH`, `RTP`, `Wire`, `FedNow`)
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Ach => "ACH",
            PaymentMethod::Rtp => "RTP",
            PaymentMethod::Wire => "Wire",
            PaymentMethod::FedNow => "FedNow",
        }
    }

    /// Lowercase form used inside account addresses
    pub fn slug(&self) -> &'static str {
        match self {
            PaymentMethod::Ach => "ach",
            PaymentMethod::Rtp => "rtp",
            PaymentMethod::Wire => "wire",
            PaymentMethod::FedNow => "fednow",
        }
    }

    /// Human-readable rail name
    pub fn description(&self) -> &'static str {
        match self {
            PaymentMethod::Ach => "Automated Clearing House",
            PaymentMethod::Rtp => "Real-Time Payments",
            PaymentMethod::Wire => "Wire Transfer",
            PaymentMethod::FedNow => "FedNow Instant Payments",
        }
    }

    pub fn envelope(&self) -> AmountEnvelope {
        match self {
            PaymentMethod::Ach => AmountEnvelope { min: 1_000, max: 50_000 },
            PaymentMethod::Rtp => AmountEnvelope { min: 100, max: 250_000 },
            PaymentMethod::Wire => AmountEnvelope { min: 10_000, max: 1_000_000 },
            PaymentMethod::FedNow => AmountEnvelope { min: 100, max: 100_000 },
        }
    }

    /// Assets a payment on this rail may be denominated in
    pub fn assets(&self) -> &'static [&'static str] {
        match self {
            PaymentMethod::Wire => &["USD", "EUR", "GBP"],
            _ => &["USD"],
        }
    }

    /// Last address segment of this rail's suspense account
    pub fn suspense_name(&self) -> String {
        format!("failed-{}-payments", self.slug())
    }

    /// Whether `amount` is a legal generated amount for this rail
    pub fn accepts_amount(&self, amount: u64) -> bool {
        self.envelope().contains(amount) || ROUND_AMOUNTS.contains(&amount)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownPaymentMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelopes() {
        assert_eq!(PaymentMethod::Ach.envelope(), AmountEnvelope { min: 1_000, max: 50_000 });
        assert_eq!(PaymentMethod::Wire.envelope().max, 1_000_000);
        assert!(PaymentMethod::FedNow.envelope().contains(100));
        assert!(!PaymentMethod::FedNow.envelope().contains(100_001));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(PaymentMethod::Ach.description(), "Automated Clearing House");
        assert_eq!(PaymentMethod::FedNow.description(), "FedNow Instant Payments");
    }

    #[test]
    fn test_round_amounts_always_accepted() {
        // 10 sits below the ACH floor but is still a valid round amount
        assert!(PaymentMethod::Ach.accepts_amount(10));
        assert!(!PaymentMethod::Ach.accepts_amount(999));
    }

    #[test]
    fn test_assets() {
        assert_eq!(PaymentMethod::Wire.assets(), &["USD", "EUR", "GBP"]);
        assert_eq!(PaymentMethod::Rtp.assets(), &["USD"]);
    }

    #[test]
    fn test_suspense_name() {
        assert_eq!(PaymentMethod::FedNow.suspense_name(), "failed-fednow-payments");
        assert_eq!(PaymentMethod::Ach.suspense_name(), "failed-ach-payments");
    }

    #[test]
    fn test_parse_display_roundtrip_and_unknown() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.to_string().parse::<PaymentMethod>().unwrap(), method);
        }
        assert!(matches!(
            "SEPA".parse::<PaymentMethod>(),
            Err(CatalogError::UnknownPaymentMethod(_))
        ));
    }

    #[test]
    fn test_serde_uses_display_names() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Ach).unwrap(), r#""ACH""#);
        assert_eq!(serde_json::to_string(&PaymentMethod::FedNow).unwrap(), r#""FedNow""#);
    }
}
