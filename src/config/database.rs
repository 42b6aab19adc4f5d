use mongodb::{bson::doc, Client, Database};
use std::env;

use crate::error::SeedError;

const DEFAULT_DATABASE: &str = "alumni";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: Option<String>,
}

impl DatabaseConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: None,
        }
    }

    pub fn with_database(mut self, name: impl Into<String>) -> Self {
        self.database = Some(name.into());
        self
    }

    pub fn from_env() -> Result<Self, SeedError> {
        let uri = env::var("MONGODB_URI").map_err(|_| SeedError::MissingUri)?;
        let database = env::var("MONGODB_DATABASE").ok().filter(|name| !name.is_empty());

        Ok(Self { uri, database })
    }
}

/// Builds a client from the configured URI. The driver connects lazily, so an
/// unreachable server only surfaces on the first command (see [`ping`]).
pub async fn connect(config: &DatabaseConfig) -> Result<Client, SeedError> {
    let client = Client::with_uri_str(&config.uri).await?;
    Ok(client)
}

/// Explicit `MONGODB_DATABASE`, then the database named in the URI, then `alumni`.
pub fn select(client: &Client, config: &DatabaseConfig) -> Database {
    match &config.database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    }
}

pub async fn ping(db: &Database) -> Result<(), SeedError> {
    db.run_command(doc! { "ping": 1 }).await?;
    tracing::debug!(database = db.name(), "ping ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_select_prefers_explicit_name() {
        let config = DatabaseConfig::new("mongodb://localhost:27017/campus").with_database("override");
        let client = connect(&config).await.unwrap();

        assert_eq!(select(&client, &config).name(), "override");
    }

    #[tokio::test]
    async fn test_select_uses_uri_database() {
        let config = DatabaseConfig::new("mongodb://localhost:27017/campus");
        let client = connect(&config).await.unwrap();

        assert_eq!(select(&client, &config).name(), "campus");
    }

    #[tokio::test]
    async fn test_select_falls_back_to_default() {
        let config = DatabaseConfig::new("mongodb://localhost:27017");
        let client = connect(&config).await.unwrap();

        assert_eq!(select(&client, &config).name(), DEFAULT_DATABASE);
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_uri() {
        let config = DatabaseConfig::new("not-a-mongodb-uri");

        assert!(matches!(connect(&config).await, Err(SeedError::Database(_))));
    }
}
