use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::crud::SeedDocument;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// A fundraising post that payments are made against.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, message = "Caption cannot be empty"))]
    pub caption: String,
    #[validate(url(message = "Invalid media URL"))]
    pub media_url: String,
    pub media_type: MediaType,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl Donation {
    pub fn new(caption: &str, media_url: &str, media_type: MediaType) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: None,
            caption: caption.to_string(),
            media_url: media_url.to_string(),
            media_type,
            created_at: now,
            updated_at: now,
        }
    }
}

impl SeedDocument for Donation {
    const COLLECTION_NAME: &'static str = "donations";
    const LABEL: &'static str = "donations";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
