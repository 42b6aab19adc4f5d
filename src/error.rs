use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("MONGODB_URI must be set")]
    MissingUri,
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("Invalid date literal: {0}")]
    Date(#[from] chrono::ParseError),
    #[error("Invalid {collection} document: {source}")]
    Validation {
        collection: &'static str,
        #[source]
        source: validator::ValidationErrors,
    },
    #[error("No {collection} document with an identifier at index {index}")]
    MissingReference {
        collection: &'static str,
        index: usize,
    },
}
