use bson::oid::ObjectId;
use mongodb::Database;
use std::collections::HashSet;

use crate::error::SeedError;
use crate::modules::admin::model::Admin;
use crate::modules::alumni::model::Alumni;
use crate::modules::conversation::model::Conversation;
use crate::modules::crud::{Crud, SeedDocument};
use crate::modules::donation::model::Donation;
use crate::modules::donation_payment::model::DonationPayment;
use crate::modules::event::model::Event;
use crate::modules::job::model::Job;
use crate::modules::message::model::Message;
use crate::modules::student::model::Student;
use crate::services::password::is_bcrypt_hash;
use crate::summary::SeedSummary;

#[derive(Debug, Default)]
pub struct VerifyReport {
    pub counts: SeedSummary,
    pub problems: Vec<String>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

fn ids<T: SeedDocument>(docs: &[T]) -> HashSet<ObjectId> {
    docs.iter().filter_map(|d| d.id()).collect()
}

fn check_counts(counts: &SeedSummary, problems: &mut Vec<String>) {
    let expected = SeedSummary::EXPECTED.rows();

    for ((label, actual), (_, wanted)) in counts.rows().into_iter().zip(expected) {
        if actual != wanted {
            problems.push(format!("{}: expected {} documents, found {}", label, wanted, actual));
        }
    }
}

fn check_passwords<'a>(
    collection: &str,
    passwords: impl Iterator<Item = &'a str>,
    problems: &mut Vec<String>,
) {
    let plain = passwords.filter(|p| !is_bcrypt_hash(p)).count();
    if plain > 0 {
        problems.push(format!("{}: {} password(s) are not bcrypt hashes", collection, plain));
    }
}

/// Reads back the seeded collections and checks counts, cross-collection
/// references and password hashing.
pub async fn verify_database(db: &Database) -> Result<VerifyReport, SeedError> {
    let admins = Crud::<Admin>::new(db).find_all().await?;
    let alumni = Crud::<Alumni>::new(db).find_all().await?;
    let students = Crud::<Student>::new(db).find_all().await?;
    let jobs = Crud::<Job>::new(db).find_all().await?;
    let events = Crud::<Event>::new(db).find_all().await?;
    let donations = Crud::<Donation>::new(db).find_all().await?;
    let payments = Crud::<DonationPayment>::new(db).find_all().await?;
    let messages = Crud::<Message>::new(db).count().await?;
    let conversations = Crud::<Conversation>::new(db).count().await?;

    let mut report = VerifyReport {
        counts: SeedSummary {
            admins: admins.len(),
            alumni: alumni.len(),
            students: students.len(),
            jobs: jobs.len(),
            events: events.len(),
            donations: donations.len(),
            donation_payments: payments.len(),
            messages: messages as usize,
            conversations: conversations as usize,
        },
        problems: Vec::new(),
    };
    check_counts(&report.counts, &mut report.problems);

    let alumni_ids = ids(&alumni);
    for job in jobs.iter().filter(|j| !alumni_ids.contains(&j.posted_by)) {
        report.problems.push(format!(
            "job \"{}\" is posted by unknown alumni {}",
            job.title, job.posted_by
        ));
    }

    let admin_ids = ids(&admins);
    for event in events.iter().filter(|e| !admin_ids.contains(&e.posted_by)) {
        report.problems.push(format!(
            "event \"{}\" is posted by unknown admin {}",
            event.title, event.posted_by
        ));
    }

    let donation_ids = ids(&donations);
    for payment in payments.iter().filter(|p| !donation_ids.contains(&p.donation_post_id)) {
        report.problems.push(format!(
            "payment {} references unknown donation {}",
            payment.payment_id, payment.donation_post_id
        ));
    }

    check_passwords(Admin::COLLECTION_NAME, admins.iter().map(|a| a.password.as_str()), &mut report.problems);
    check_passwords(Alumni::COLLECTION_NAME, alumni.iter().map(|a| a.password.as_str()), &mut report.problems);
    check_passwords(Student::COLLECTION_NAME, students.iter().map(|s| s.password.as_str()), &mut report.problems);

    tracing::debug!(problems = report.problems.len(), "verification finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_counts_reports_mismatches() {
        let mut counts = SeedSummary::EXPECTED;
        counts.jobs = 4;
        counts.messages = 0;

        let mut problems = Vec::new();
        check_counts(&counts, &mut problems);

        assert_eq!(
            problems,
            vec![
                "Jobs: expected 5 documents, found 4".to_string(),
                "Messages: expected 6 documents, found 0".to_string(),
            ]
        );
    }

    #[test]
    fn test_check_counts_accepts_expected() {
        let mut problems = Vec::new();
        check_counts(&SeedSummary::EXPECTED, &mut problems);

        assert!(problems.is_empty());
    }

    #[test]
    fn test_check_passwords_flags_plaintext() {
        let hash = bcrypt::hash("admin123", 4).unwrap();
        let mut problems = Vec::new();

        check_passwords("adminprofiles", [hash.as_str(), "admin123"].into_iter(), &mut problems);

        assert_eq!(problems, vec!["adminprofiles: 1 password(s) are not bcrypt hashes".to_string()]);
    }
}
