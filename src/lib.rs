pub mod config;
pub mod error;
pub mod modules;
pub mod seeder;
pub mod services;
pub mod summary;
pub mod verify;

pub use error::SeedError;
