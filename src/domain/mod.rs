//! Domain module
//!
//! Wire-level value types shared by the generator, the ledger API client
//! and the seeder.

pub mod account;
pub mod error;
pub mod transaction;

pub use account::GeneratedAccount;
pub use error::DomainError;
pub use transaction::{Metadata, PostTransaction, Posting, WORLD};
