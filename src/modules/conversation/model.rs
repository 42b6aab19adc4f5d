use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::crud::SeedDocument;

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, message = "Sender cannot be empty"))]
    pub sender: String,
    #[validate(length(min = 1, message = "Receiver cannot be empty"))]
    pub receiver: String,
    pub last_message: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl Conversation {
    pub fn new(sender: &str, receiver: &str, last_message: &str) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: None,
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            last_message: last_message.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn involves(&self, a: &str, b: &str) -> bool {
        (self.sender == a && self.receiver == b) || (self.sender == b && self.receiver == a)
    }
}

impl SeedDocument for Conversation {
    const COLLECTION_NAME: &'static str = "conversations";
    const LABEL: &'static str = "conversations";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
