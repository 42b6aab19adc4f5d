use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::crud::SeedDocument;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    #[serde(rename = "superAdmin")]
    SuperAdmin,
    #[serde(rename = "event manager")]
    EventManager,
    #[serde(rename = "content manager")]
    ContentManager,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
    pub role: AdminRole,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl Admin {
    pub fn new(name: &str, email: &str, password_hash: String, role: AdminRole) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            password: password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

impl SeedDocument for Admin {
    const COLLECTION_NAME: &'static str = "adminprofiles";
    const LABEL: &'static str = "admins";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
