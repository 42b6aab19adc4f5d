//! Destructive reseed of every collection the web application reads.
//!
//! All nine collections are emptied before anything is inserted, so running this
//! against a populated database throws that data away.

use mongodb::Database;
use std::time::Instant;

use crate::error::SeedError;
use crate::modules::admin::{model::Admin, seed::sample_admins};
use crate::modules::alumni::{model::Alumni, seed::sample_alumni};
use crate::modules::conversation::{model::Conversation, seed::sample_conversations};
use crate::modules::crud::{Crud, SeedDocument};
use crate::modules::donation::{model::Donation, seed::sample_donations};
use crate::modules::donation_payment::{model::DonationPayment, seed::sample_payments};
use crate::modules::event::{model::Event, seed::sample_events};
use crate::modules::job::{model::Job, seed::sample_jobs};
use crate::modules::message::{model::Message, seed::sample_messages};
use crate::modules::student::{model::Student, seed::sample_students};
use crate::summary::SeedSummary;

async fn clear<T: SeedDocument>(db: &Database) -> Result<(), SeedError> {
    let deleted = Crud::<T>::new(db).delete_all().await?;
    tracing::debug!(collection = T::COLLECTION_NAME, deleted, "cleared collection");
    Ok(())
}

async fn insert<T: SeedDocument>(db: &Database, docs: Vec<T>) -> Result<Vec<T>, SeedError> {
    let start = Instant::now();
    let docs = Crud::<T>::new(db).insert_many(docs).await?;

    tracing::debug!(
        collection = T::COLLECTION_NAME,
        count = docs.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "inserted documents"
    );
    println!("✅ Seeded {} {}", docs.len(), T::LABEL);

    Ok(docs)
}

pub async fn clear_database(db: &Database) -> Result<(), SeedError> {
    clear::<Admin>(db).await?;
    clear::<Alumni>(db).await?;
    clear::<Student>(db).await?;
    clear::<Job>(db).await?;
    clear::<Event>(db).await?;
    clear::<Donation>(db).await?;
    clear::<DonationPayment>(db).await?;
    clear::<Message>(db).await?;
    clear::<Conversation>(db).await?;

    println!("🗑️  Cleared all collections");
    Ok(())
}

pub async fn seed_admins(db: &Database) -> Result<Vec<Admin>, SeedError> {
    insert(db, sample_admins()?).await
}

pub async fn seed_alumni(db: &Database) -> Result<Vec<Alumni>, SeedError> {
    insert(db, sample_alumni()?).await
}

pub async fn seed_students(db: &Database) -> Result<Vec<Student>, SeedError> {
    insert(db, sample_students()?).await
}

/// `alumni` must already be inserted; jobs point at their `_id`s.
pub async fn seed_jobs(db: &Database, alumni: &[Alumni]) -> Result<Vec<Job>, SeedError> {
    insert(db, sample_jobs(alumni)?).await
}

/// `admins` must already be inserted; events point at their `_id`s.
pub async fn seed_events(db: &Database, admins: &[Admin]) -> Result<Vec<Event>, SeedError> {
    insert(db, sample_events(admins)?).await
}

pub async fn seed_donations(db: &Database) -> Result<Vec<Donation>, SeedError> {
    insert(db, sample_donations()).await
}

pub async fn seed_donation_payments(
    db: &Database,
    donations: &[Donation],
) -> Result<Vec<DonationPayment>, SeedError> {
    insert(db, sample_payments(donations)?).await
}

pub async fn seed_messages(db: &Database) -> Result<Vec<Message>, SeedError> {
    insert(db, sample_messages()).await
}

pub async fn seed_conversations(db: &Database) -> Result<Vec<Conversation>, SeedError> {
    insert(db, sample_conversations()).await
}

/// Clears every collection, then seeds them in dependency order. Stops at the
/// first failure; collections seeded before it stay populated.
pub async fn seed_database(db: &Database) -> Result<SeedSummary, SeedError> {
    clear_database(db).await?;
    println!();

    let admins = seed_admins(db).await?;
    let alumni = seed_alumni(db).await?;
    let students = seed_students(db).await?;
    let jobs = seed_jobs(db, &alumni).await?;
    let events = seed_events(db, &admins).await?;
    let donations = seed_donations(db).await?;
    let payments = seed_donation_payments(db, &donations).await?;
    let messages = seed_messages(db).await?;
    let conversations = seed_conversations(db).await?;

    Ok(SeedSummary {
        admins: admins.len(),
        alumni: alumni.len(),
        students: students.len(),
        jobs: jobs.len(),
        events: events.len(),
        donations: donations.len(),
        donation_payments: payments.len(),
        messages: messages.len(),
        conversations: conversations.len(),
    })
}
