use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::crud::SeedDocument;
use crate::modules::optional_url;

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub description: String,
    pub date: bson::DateTime,
    /// Free-form range such as `10:00 AM - 4:00 PM`.
    pub time: String,
    #[validate(length(min = 1, message = "Venue cannot be empty"))]
    pub venue: String,
    #[validate(custom(function = "optional_url"))]
    pub media: String,
    // The application reads this one in lowercase.
    #[serde(rename = "postedby")]
    pub posted_by: ObjectId,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for Event {
    const COLLECTION_NAME: &'static str = "events";
    const LABEL: &'static str = "events";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
