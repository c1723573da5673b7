//! Account synthesis
//!
//! One partner ledger gets `ceil(n / (customer types x payment methods))`
//! regular accounts for every customer type / payment method pair, then
//! exactly one suspense account per payment method.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::catalog::vocabulary::{self, business_slug};
use crate::catalog::{BankingPartner, PaymentMethod};
use crate::domain::transaction::to_iso8601;
use crate::domain::{GeneratedAccount, Metadata};

use super::random;

/// Regular accounts to create per (customer type, payment method) pair so
/// that at least `target` accounts exist in total.
///
/// Returns 0 when `target` is 0 or either dimension is empty.
pub fn accounts_per_combination(target: usize, customer_types: usize, payment_methods: usize) -> usize {
    let combinations = customer_types * payment_methods;
    if combinations == 0 {
        return 0;
    }
    target.div_ceil(combinations)
}

/// `partner:business:method:0001`, with a 1-based, zero-padded sequence.
pub fn regular_address(
    partner: &BankingPartner,
    customer_type: &str,
    method: PaymentMethod,
    index: usize,
) -> String {
    format!(
        "{}:{}:{}:{:04}",
        partner.address_prefix(),
        business_slug(customer_type, index),
        method.slug(),
        index + 1
    )
}

/// Synthesize every account of one ledger: regular accounts first, in
/// customer type then payment method order, followed by the suspense accounts.
pub fn synthesize_accounts<R: Rng + ?Sized>(
    rng: &mut R,
    partner: &BankingPartner,
    target: usize,
    now: DateTime<Utc>,
) -> Vec<GeneratedAccount> {
    let per_combination = accounts_per_combination(
        target,
        partner.customer_types.len(),
        partner.payment_methods.len(),
    );
    let regular_count =
        per_combination * partner.customer_types.len() * partner.payment_methods.len();
    let mut accounts = Vec::with_capacity(regular_count + partner.payment_methods.len());

    for customer_type in partner.customer_types {
        for &method in partner.payment_methods {
            for index in 0..per_combination {
                let address = regular_address(partner, customer_type, method, index);
                let metadata = account_metadata(rng, partner, customer_type, method, now);
                accounts.push(GeneratedAccount::new(address, metadata));
            }
        }
    }

    accounts.extend(
        partner
            .payment_methods
            .iter()
            .map(|&method| suspense_account(partner, method)),
    );

    accounts
}

/// The sink account for failed payments on `method`.
pub fn suspense_account(partner: &BankingPartner, method: PaymentMethod) -> GeneratedAccount {
    let mut metadata = Metadata::new();
    metadata.insert("type".to_string(), "suspense".to_string());
    metadata.insert("purpose".to_string(), "failed_payments".to_string());
    metadata.insert("payment_method".to_string(), method.to_string());
    metadata.insert("partner_code".to_string(), partner.address_prefix());
    GeneratedAccount::new(partner.suspense_address(method), metadata)
}

fn account_metadata<R: Rng + ?Sized>(
    rng: &mut R,
    partner: &BankingPartner,
    customer_type: &str,
    method: PaymentMethod,
    now: DateTime<Utc>,
) -> Metadata {
    let created = random::instant_within(rng, now, Duration::days(365));
    let last_activity = random::instant_within(rng, now, Duration::days(1));

    let fields = [
        ("customer_type", customer_type.to_string()),
        ("bank_partner", partner.name.to_string()),
        ("payment_method", method.to_string()),
        ("account_status", random::pick(rng, vocabulary::ACCOUNT_STATUSES).to_string()),
        ("created_date", to_iso8601(&created)),
        ("last_activity", to_iso8601(&last_activity)),
        ("balance_limit", rng.gen_range(10_000..=1_000_000u64).to_string()),
        ("kyc_status", random::pick(rng, vocabulary::KYC_STATUSES).to_string()),
        ("risk_level", random::pick(rng, vocabulary::RISK_LEVELS).to_string()),
        ("business_industry", random::pick(rng, vocabulary::INDUSTRIES).to_string()),
        ("account_type", random::pick(rng, vocabulary::ACCOUNT_TYPES).to_string()),
        ("monthly_volume", rng.gen_range(10_000..=1_000_000u64).to_string()),
        ("transaction_frequency", random::pick(rng, vocabulary::TRANSACTION_FREQUENCIES).to_string()),
        ("compliance_status", random::pick(rng, vocabulary::COMPLIANCE_STATUSES).to_string()),
    ];

    fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
