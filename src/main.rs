//! Run with: cargo run
//!
//! Wipes and reseeds the alumni-network collections in `MONGODB_URI`.

use alumni_seed::config::database::{self, DatabaseConfig};
use alumni_seed::config::logging;
use alumni_seed::summary::{login_hints, SeedSummary};
use alumni_seed::{seeder, SeedError};
use mongodb::Client;

async fn run(client: &Client, config: &DatabaseConfig) -> Result<SeedSummary, SeedError> {
    let db = database::select(client, config);
    database::ping(&db).await?;
    println!("✅ Connected to MongoDB\n");

    let summary = seeder::seed_database(&db).await?;

    println!("\n🎉 Database seeding completed successfully!\n");
    println!("{}", summary);
    println!("\n{}\n", login_hints());

    Ok(summary)
}

fn report(error: &SeedError) {
    tracing::debug!(error = ?error, "seeding failed");
    eprintln!("❌ Seeding failed: {}", error);
}

// Exits 0 whether or not seeding succeeded.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            report(&e);
            return;
        }
    };

    let client = match database::connect(&config).await {
        Ok(client) => client,
        Err(e) => {
            report(&e);
            return;
        }
    };

    if let Err(e) = run(&client, &config).await {
        report(&e);
    }

    client.shutdown().await;
    println!("🔌 MongoDB connection closed");
}
