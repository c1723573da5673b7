//! Transaction synthesis
//!
//! Every generated transaction has a single `world -> account` posting.
//! Roughly one in ten is a failed payment routed to the suspense account of
//! its rail; the rest credit a regular account of the same ledger.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::catalog::vocabulary;
use crate::catalog::{BankingPartner, PaymentMethod, ROUND_AMOUNTS};
use crate::domain::transaction::to_iso8601;
use crate::domain::{GeneratedAccount, Metadata, PostTransaction, Posting};

use super::random;

/// Probability that a generated payment fails and lands in suspense.
pub const FAILURE_RATE: f64 = 0.10;

/// Probability that an amount snaps to one of [`ROUND_AMOUNTS`].
pub const ROUND_AMOUNT_RATE: f64 = 0.30;

/// Reference of the fixed smoke-test transaction appended to every ledger.
pub const DEBUG_REFERENCE: &str = "DEBUG-TEST";

/// Destination of the smoke-test transaction. Not part of the account list.
pub const DEBUG_DESTINATION: &str = "test-account";

const DEBUG_AMOUNT: u64 = 10_000;
const REFERENCE_SUFFIX_LEN: usize = 8;

/// Draw an amount in minor units for `method`.
pub fn draw_amount<R: Rng + ?Sized>(rng: &mut R, method: PaymentMethod) -> u64 {
    if rng.gen_bool(ROUND_AMOUNT_RATE) {
        return *random::pick(rng, &ROUND_AMOUNTS[..]);
    }
    let envelope = method.envelope();
    rng.gen_range(envelope.min..=envelope.max)
}

/// Draw an asset allowed on `method`.
pub fn draw_asset<R: Rng + ?Sized>(rng: &mut R, method: PaymentMethod) -> &'static str {
    *random::pick(rng, method.assets())
}

/// Synthesize `count` transactions against `accounts`, which must be the
/// output of account synthesis for the same partner.
pub fn synthesize_transactions<R: Rng + ?Sized>(
    rng: &mut R,
    partner: &BankingPartner,
    accounts: &[GeneratedAccount],
    count: usize,
    now: DateTime<Utc>,
) -> Vec<PostTransaction> {
    let regular: Vec<&GeneratedAccount> = accounts.iter().filter(|a| !a.is_suspense()).collect();

    (0..count)
        .map(|_| {
            let method = *random::pick(rng, partner.payment_methods);
            let amount = draw_amount(rng, method);
            let asset = draw_asset(rng, method);
            let timestamp = random::instant_within(rng, now, Duration::days(1));
            let mut metadata = transaction_metadata(rng, partner, method, now);

            let failed = rng.gen_bool(FAILURE_RATE);
            let destination = if failed || regular.is_empty() {
                None
            } else {
                Some(random::pick(rng, &regular).address.clone())
            };

            match destination {
                Some(address) => {
                    metadata.insert("status".to_string(), "completed".to_string());
                    let reference = format!("TXN-{}", random::upper_alphanumeric(rng, REFERENCE_SUFFIX_LEN));
                    PostTransaction::new(
                        vec![Posting::from_world(address, amount, asset)],
                        metadata,
                        reference,
                        timestamp,
                    )
                }
                None => {
                    // A success draw with no regular account to credit is recorded as unroutable
                    let reason = if failed {
                        *random::pick(rng, vocabulary::FAILURE_REASONS)
                    } else {
                        "account_not_found"
                    };
                    metadata.insert("status".to_string(), "failed".to_string());
                    metadata.insert("failure_reason".to_string(), reason.to_string());
                    let reference = format!("FAILED-{}", random::upper_alphanumeric(rng, REFERENCE_SUFFIX_LEN));
                    PostTransaction::new(
                        vec![Posting::from_world(partner.suspense_address(method), amount, asset)],
                        metadata,
                        reference,
                        timestamp,
                    )
                }
            }
        })
        .collect()
}

/// The deterministic smoke-test transaction: `world -> test-account`, 100.00 USD.
pub fn debug_transaction(now: DateTime<Utc>) -> PostTransaction {
    let mut metadata = Metadata::new();
    metadata.insert("test".to_string(), "value".to_string());
    metadata.insert("debug".to_string(), "true".to_string());
    PostTransaction::new(
        vec![Posting::from_world(DEBUG_DESTINATION, DEBUG_AMOUNT, "USD")],
        metadata,
        DEBUG_REFERENCE,
        now,
    )
}

fn transaction_metadata<R: Rng + ?Sized>(
    rng: &mut R,
    partner: &BankingPartner,
    method: PaymentMethod,
    generated_at: DateTime<Utc>,
) -> Metadata {
    let mut metadata = Metadata::new();
    let mut put = |key: &str, value: String| {
        metadata.insert(key.to_string(), value);
    };

    put("payment_method", method.to_string());
    put("bank_partner", partner.name.to_string());
    put("transaction_type", random::pick(rng, vocabulary::TRANSACTION_TYPES).to_string());
    put("reference_id", random::upper_alphanumeric(rng, 12));
    put("timestamp", to_iso8601(&generated_at));
    put("business_category", random::pick(rng, vocabulary::INDUSTRIES).to_string());
    put("transaction_purpose", random::pick(rng, vocabulary::TRANSACTION_PURPOSES).to_string());

    match method {
        PaymentMethod::Ach => {
            put("ach_type", random::pick(rng, vocabulary::ACH_TYPES).to_string());
            put("routing_number", random::digits(rng, 9));
            put("account_type", random::pick(rng, vocabulary::ACH_ACCOUNT_TYPES).to_string());
        }
        PaymentMethod::Rtp => {
            put("rtp_id", random::upper_alphanumeric(rng, 16));
            put("request_id", random::uuid_v4(rng).to_string());
            put("settlement_type", random::pick(rng, vocabulary::RTP_SETTLEMENT_TYPES).to_string());
        }
        PaymentMethod::Wire => {
            let swift_code = format!(
                "{}{}{}",
                random::upper_letters(rng, 4),
                random::upper_letters(rng, 2),
                random::upper_alphanumeric(rng, 2)
            );
            put("swift_code", swift_code);
            put("wire_type", random::pick(rng, vocabulary::WIRE_TYPES).to_string());
            put("currency", random::pick(rng, vocabulary::WIRE_CURRENCIES).to_string());
        }
        PaymentMethod::FedNow => {
            put("fednow_id", random::upper_alphanumeric(rng, 20));
            put("request_id", random::uuid_v4(rng).to_string());
            put("service_type", random::pick(rng, vocabulary::FEDNOW_SERVICE_TYPES).to_string());
        }
    }

    metadata
}
