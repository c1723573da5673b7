//! Random draw helpers
//!
//! Thin wrappers over an injected `Rng` so every draw in a run comes from
//! the same (optionally seeded) source.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use uuid::Uuid;

const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const LOWER_BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPER_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Uniformly pick one element. `items` must not be empty.
pub fn pick<'a, R, T>(rng: &mut R, items: &'a [T]) -> &'a T
where
    R: Rng + ?Sized,
{
    &items[rng.gen_range(0..items.len())]
}

fn string_from<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len).map(|_| *pick(rng, alphabet) as char).collect()
}

/// `len` characters from `[A-Z0-9]`
pub fn upper_alphanumeric<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    string_from(rng, UPPER_ALPHANUMERIC, len)
}

/// `len` characters from `[0-9a-z]`
pub fn lower_base36<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    string_from(rng, LOWER_BASE36, len)
}

/// `len` characters from `[A-Z]`
pub fn upper_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    string_from(rng, UPPER_LETTERS, len)
}

/// `len` decimal digits (leading zeros allowed)
pub fn digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    string_from(rng, DIGITS, len)
}

/// Version 4 UUID built from the injected generator
pub fn uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// An instant in `(now - window, now]`.
pub fn instant_within<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, window: Duration) -> DateTime<Utc> {
    let span = window.num_milliseconds().max(1);
    now - Duration::milliseconds(rng.gen_range(0..span))
}
