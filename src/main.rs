//! ledger_seeder - Sample data generator for a double-entry ledger service
//!
//! Generates partner ledgers, accounts and payment transactions, prints a
//! summary, and optionally writes the data as JSON and uploads it.

use std::fs::File;
use std::io::BufWriter;

use clap::Parser;
use ledger_seeder::catalog::PaymentMethod;
use ledger_seeder::cli::CliArgs;
use ledger_seeder::client::{HttpLedgerClient, LedgerApi};
use ledger_seeder::{AppError, AppResult, Config, SampleDataGenerator, SampleDataResult, SampleDataSeeder};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "ledger_seeder=info".into());
    let json = std::env::var("LOG_FORMAT").map(|f| f == "json").unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn print_summary(data: &SampleDataResult) {
    println!("\n=== Sample Data ===");
    for bundle in &data.bundles {
        let failed = bundle.transactions.iter().filter(|t| t.is_failed()).count();
        println!(
            "{:<40} accounts: {:>4}  transactions: {:>4}  failed: {:>3}",
            bundle.ledger_name,
            bundle.accounts.len(),
            bundle.transactions.len(),
            failed
        );
    }
    println!("Ledgers: {}", data.ledger_names.len());
    println!("Accounts: {}", data.total_accounts);
    println!("Transactions: {}", data.total_transactions);

    println!("\n=== Payment Methods ===");
    for method in PaymentMethod::ALL {
        let envelope = method.envelope();
        println!(
            "{:<8} {:<26} {:>8}..={:<8} {}",
            method.as_str(),
            method.description(),
            envelope.min,
            envelope.max,
            method.assets().join("/")
        );
    }
}

async fn run(args: CliArgs) -> AppResult<()> {
    let config = Config::from_env()?;
    let selected = args.partner()?;
    let sample_config = args.sample_config(config.preset);
    let estimate = sample_config.estimate();

    tracing::info!(
        partners = sample_config.banking_partners,
        partner = args.partner.as_deref().unwrap_or("catalog"),
        ledgers_per_partner = sample_config.ledgers_per_partner,
        accounts_per_ledger = sample_config.accounts_per_ledger,
        transactions_per_ledger = sample_config.transactions_per_ledger,
        estimated_items = estimate.total,
        "Generating sample data"
    );

    let mut generator = match args.seed.or(config.seed) {
        Some(seed) => SampleDataGenerator::seeded(seed),
        None => SampleDataGenerator::from_entropy(),
    };
    let data = match selected {
        Some(partner) => generator.generate_for(std::slice::from_ref(partner), &sample_config),
        None => generator.generate(&sample_config),
    };
    print_summary(&data);

    if let Some(path) = &args.output {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &data)?;
        tracing::info!(path = %path.display(), "Wrote sample data");
    }

    if !args.upload {
        return Ok(());
    }

    let client = HttpLedgerClient::from_config(&config)?;
    if !client.health_check().await {
        return Err(AppError::LedgerUnavailable(client.base_url().to_string()));
    }

    let report = SampleDataSeeder::new(client).seed(&data).await;

    println!("\n=== Upload Results ===");
    println!("Created ledgers: {}", report.ledgers.len());
    println!("Created accounts: {}", report.accounts.len());
    println!("Created transactions: {}", report.transactions.len());
    println!("Errors: {}", report.failed());
    for failure in &report.failures {
        println!("  - {failure}");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let args = CliArgs::parse();
    run(args).await?;

    Ok(())
}
