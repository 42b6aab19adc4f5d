use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::crud::SeedDocument;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Success,
    Failed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DonationPayment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, message = "Payment id cannot be empty"))]
    pub payment_id: String,
    #[validate(length(min = 1, message = "Order id cannot be empty"))]
    pub order_id: String,
    /// Whole rupees.
    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: i32,
    pub donation_post_id: ObjectId,
    #[validate(email(message = "Invalid email"))]
    pub user_email: String,
    pub status: PaymentStatus,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for DonationPayment {
    const COLLECTION_NAME: &'static str = "donationpayments";
    const LABEL: &'static str = "donation payments";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
