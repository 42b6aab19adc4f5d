use super::model::{DonationPayment, PaymentStatus};
use crate::error::SeedError;
use crate::modules::crud::id_at;
use crate::modules::donation::model::Donation;

/// (sample number, amount, donation index, payer email)
const PAYMENTS: [(u32, i32, usize, &str); 5] = [
    (1, 5000, 0, "arjun.kapoor@gmail.com"),
    (2, 2000, 1, "priya.sharma@gmail.com"),
    (3, 10000, 0, "sneha.reddy@gmail.com"),
    (4, 1500, 2, "akshay.patel@student.com"),
    (5, 3000, 3, "vikram.mehta@gmail.com"),
];

pub fn sample_payments(donations: &[Donation]) -> Result<Vec<DonationPayment>, SeedError> {
    let now = bson::DateTime::now();

    PAYMENTS
        .iter()
        .map(|&(n, amount, donation, user_email)| -> Result<DonationPayment, SeedError> {
            Ok(DonationPayment {
                id: None,
                payment_id: format!("pay_SAMPLE{:03}", n),
                order_id: format!("order_SAMPLE{:03}", n),
                amount,
                donation_post_id: id_at(donations, donation)?,
                user_email: user_email.to_string(),
                status: PaymentStatus::Success,
                created_at: now,
                updated_at: now,
            })
        })
        .collect()
}
