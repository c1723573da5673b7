//! Partner catalog
//!
//! Static, read-only description of the banking partners sample data is
//! generated for. Loaded once at process start and never mutated.

pub mod payment_method;
pub mod vocabulary;

pub use payment_method::{AmountEnvelope, PaymentMethod, ROUND_AMOUNTS};

use PaymentMethod::{Ach, FedNow, Rtp, Wire};

/// Catalog lookup and parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    #[error("Unknown banking partner: {0}")]
    UnknownPartner(String),
}

/// A banking partner profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankingPartner {
    pub name: &'static str,
    pub code: &'static str,
    pub ledger_templates: &'static [&'static str],
    pub customer_types: &'static [&'static str],
    pub payment_methods: &'static [PaymentMethod],
}

impl BankingPartner {
    /// Partner code as it appears in account addresses
    pub fn address_prefix(&self) -> String {
        self.code.to_lowercase()
    }

    /// Address of the suspense account collecting failed payments on `method`
    pub fn suspense_address(&self, method: PaymentMethod) -> String {
        format!("{}:suspense:{}", self.address_prefix(), method.suspense_name())
    }
}

const ALL_METHODS: &[PaymentMethod] = &[Ach, Rtp, Wire, FedNow];

static BANKING_PARTNERS: [BankingPartner; 5] = [
    BankingPartner {
        name: "Meridian Financial Group",
        code: "MERIDIAN",
        ledger_templates: &[
            "Meridian-Payments",
            "Meridian-Transfers",
            "Meridian-Services",
            "Meridian-Operations",
        ],
        customer_types: &["retail", "business", "enterprise"],
        payment_methods: ALL_METHODS,
    },
    BankingPartner {
        name: "Summit National Bank",
        code: "SUMMIT",
        ledger_templates: &[
            "Summit-Payments",
            "Summit-Transfers",
            "Summit-Services",
            "Summit-Operations",
        ],
        customer_types: &["retail", "business", "corporate"],
        payment_methods: ALL_METHODS,
    },
    BankingPartner {
        name: "Horizon Trust & Savings",
        code: "HORIZON",
        ledger_templates: &[
            "Horizon-Payments",
            "Horizon-Transfers",
            "Horizon-Services",
            "Horizon-Operations",
        ],
        customer_types: &["retail", "business", "commercial"],
        payment_methods: ALL_METHODS,
    },
    BankingPartner {
        name: "Pinnacle Community Bank",
        code: "PINNACLE",
        ledger_templates: &[
            "Pinnacle-Payments",
            "Pinnacle-Transfers",
            "Pinnacle-Services",
            "Pinnacle-Operations",
        ],
        customer_types: &["retail", "business", "institutional"],
        payment_methods: ALL_METHODS,
    },
    BankingPartner {
        name: "Aurora Regional Bank",
        code: "AURORA",
        ledger_templates: &[
            "Aurora-Payments",
            "Aurora-Transfers",
            "Aurora-Services",
            "Aurora-Operations",
        ],
        customer_types: &["retail", "business", "corporate"],
        payment_methods: ALL_METHODS,
    },
];

/// All partners, in catalog order
pub fn partners() -> &'static [BankingPartner] {
    &BANKING_PARTNERS
}

/// Look up a partner by its code (case-insensitive)
pub fn partner_by_code(code: &str) -> Result<&'static BankingPartner, CatalogError> {
    BANKING_PARTNERS
        .iter()
        .find(|p| p.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| CatalogError::UnknownPartner(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let codes: Vec<&str> = partners().iter().map(|p| p.code).collect();
        assert_eq!(codes, vec!["MERIDIAN", "SUMMIT", "HORIZON", "PINNACLE", "AURORA"]);
    }

    #[test]
    fn test_every_partner_is_complete() {
        for partner in partners() {
            assert_eq!(partner.ledger_templates.len(), 4);
            assert_eq!(partner.customer_types.len(), 3);
            assert_eq!(partner.payment_methods, PaymentMethod::ALL.as_slice());
            let prefix = format!("{}-", partner.name.split(' ').next().unwrap());
            assert!(partner.ledger_templates.iter().all(|t| t.starts_with(&prefix)));
        }
    }

    #[test]
    fn test_suspense_address() {
        let partner = partner_by_code("pinnacle").unwrap();
        assert_eq!(
            partner.suspense_address(PaymentMethod::Wire),
            "pinnacle:suspense:failed-wire-payments"
        );
    }

    #[test]
    fn test_unknown_partner() {
        assert_eq!(
            partner_by_code("ACME"),
            Err(CatalogError::UnknownPartner("ACME".to_string()))
        );
    }
}
