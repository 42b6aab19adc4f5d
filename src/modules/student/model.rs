use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::crud::SeedDocument;
use crate::modules::optional_url;

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub user_name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
    #[validate(length(min = 1, message = "Roll number cannot be empty"))]
    pub roll_no: String,
    pub batch: String,
    pub degree: String,
    pub department: String,
    #[validate(range(min = 1, max = 5, message = "Year must be between 1 and 5"))]
    pub year: i32,
    pub role: String,
    #[validate(custom(function = "optional_url"))]
    pub avatar: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for Student {
    const COLLECTION_NAME: &'static str = "students";
    const LABEL: &'static str = "students";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
