//! Ledger name allocation
//!
//! Names are `<template>-<clock digits>-<token>`: the last six digits of the
//! clock in epoch milliseconds and three random `[0-9a-z]` characters.
//!
//! This is a collision-resistance heuristic, not a uniqueness guarantee.
//! Two calls for the same template in the same millisecond collide with
//! probability 1/36^3; the seeder treats an already-existing ledger as
//! success for exactly that reason.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::random;

const CLOCK_DIGITS_MODULUS: i64 = 1_000_000;
const TOKEN_LEN: usize = 3;

/// Allocate a run-unique ledger name from `template`.
pub fn allocate_ledger_name<R: Rng + ?Sized>(template: &str, clock: DateTime<Utc>, rng: &mut R) -> String {
    let clock_digits = clock.timestamp_millis().rem_euclid(CLOCK_DIGITS_MODULUS);
    let token = random::lower_base36(rng, TOKEN_LEN);
    format!("{template}-{clock_digits:06}-{token}")
}
