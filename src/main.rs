//! One-shot inventory of the e-formulare bucket.
//!
//! Pages through the bucket listing once, splits objects into CSV forms and
//! attachments, and prints the totals together with an extension breakdown.
//! Configuration comes from the process environment, an optional `.env` file,
//! or the fallbacks in `config.rs`.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod client;
mod config;
mod error;
mod listing;
mod report;
mod stats;

use config::Settings;
use error::AuditError;
use listing::ObjectIter;
use stats::BucketStats;

/// Counts forms, attachments, and data volume in the e-formulare bucket.
///
/// Takes no arguments; see `config.rs` for the environment variables read.
#[derive(Parser)]
#[command(version, about)]
struct Args {}

#[tokio::main]
async fn main() {
    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _args = Args::parse();

    if let Err(err) = run().await {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    println!("Auswertung für Bucket: {}", settings.bucket);

    let client = client::build(&settings).await;
    tracing::info!(bucket = %settings.bucket, region = %settings.region, "starting bucket pass");

    let mut objects = ObjectIter::new(&client, &settings.bucket);
    let mut stats = BucketStats::default();
    while let Some(record) = objects.next().await.map_err(AuditError::from)? {
        stats.record(&record);
    }

    print!("{}", report::render(&stats));

    Ok(())
}
