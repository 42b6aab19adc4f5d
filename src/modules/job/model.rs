use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::crud::SeedDocument;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Internship,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company cannot be empty"))]
    pub company_name: String,
    pub location: String,
    pub job_type: JobType,
    #[validate(length(min = 1, message = "At least one skill is required"))]
    pub skills_required: Vec<String>,
    pub salary: String,
    pub description: String,
    pub deadline: bson::DateTime,
    /// `_id` of the posting alumni profile.
    pub posted_by: ObjectId,
    pub posted_by_name: String,
    #[validate(url(message = "Invalid company website"))]
    pub company_website: String,
    pub applied_users: Vec<ObjectId>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl SeedDocument for Job {
    const COLLECTION_NAME: &'static str = "jobs";
    const LABEL: &'static str = "jobs";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
