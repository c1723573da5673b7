//! ledger_seeder Library
//!
//! Synthetic sample data for a double-entry ledger service: a generator
//! producing internally consistent ledgers, accounts and transactions, and
//! a seeder that uploads them through the ledger's HTTP API.

pub mod catalog;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod generator;
pub mod seeder;
mod error;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use generator::{generate, LedgerBundle, SampleDataConfig, SampleDataGenerator, SampleDataPreset, SampleDataResult};
pub use seeder::{SampleDataSeeder, SeedReport};
