use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::crud::SeedDocument;

/// Direct message; participants are addressed by username.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, message = "Sender cannot be empty"))]
    pub sender: String,
    #[validate(length(min = 1, message = "Receiver cannot be empty"))]
    pub receiver: String,
    #[validate(length(min = 1, message = "Text cannot be empty"))]
    pub text: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl Message {
    pub fn new(sender: &str, receiver: &str, text: &str) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: None,
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            text: text.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl SeedDocument for Message {
    const COLLECTION_NAME: &'static str = "messages";
    const LABEL: &'static str = "messages";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
