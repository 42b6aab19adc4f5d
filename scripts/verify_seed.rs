//! Run with: cargo run --bin verify_seed
//!
//! Checks a seeded database: document counts, job/event/payment references and
//! password hashing. Exits non-zero when any check fails.

use alumni_seed::config::database::{self, DatabaseConfig};
use alumni_seed::config::logging;
use alumni_seed::verify;
use anyhow::{bail, Context};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = DatabaseConfig::from_env().context("loading database configuration")?;
    let client = database::connect(&config)
        .await
        .context("creating MongoDB client")?;
    let db = database::select(&client, &config);

    database::ping(&db)
        .await
        .with_context(|| format!("connecting to database {}", db.name()))?;
    println!("Verifying seed data in {}...\n", db.name());

    let report = verify::verify_database(&db).await?;
    drop(db);
    client.shutdown().await;

    for (label, count) in report.counts.rows() {
        println!("  {:<18}: {}", label, count);
    }

    if !report.is_ok() {
        println!("\n✗ {} problem(s):", report.problems.len());
        for problem in &report.problems {
            println!("  - {}", problem);
        }
        bail!("seed verification failed");
    }

    println!("\n✓ Seed data looks good!");
    Ok(())
}
