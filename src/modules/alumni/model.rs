use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::crud::SeedDocument;
use crate::modules::optional_url;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Alumni {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub user_name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
    #[validate(length(min = 1, message = "Batch cannot be empty"))]
    pub batch: String,
    pub company: String,
    pub department: String,
    pub industry: String,
    pub position: String,
    #[validate(length(min = 10, max = 15, message = "Invalid phone number"))]
    pub phone: String,
    #[validate(custom(function = "optional_url"))]
    pub linkedin: String,
    #[validate(custom(function = "optional_url"))]
    pub github: String,
    #[validate(custom(function = "optional_url"))]
    pub avatar: String,
    #[validate(url(message = "Invalid marksheet URL"))]
    pub marksheet: String,
    pub status: ApprovalStatus,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for Alumni {
    const COLLECTION_NAME: &'static str = "aluminiprofiles";
    const LABEL: &'static str = "alumni";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
