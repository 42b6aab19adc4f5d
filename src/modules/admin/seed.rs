use super::model::{Admin, AdminRole};
use crate::error::SeedError;
use crate::services::password::hash_password;

/// (name, email, plaintext password, role)
const ADMINS: [(&str, &str, &str, AdminRole); 3] = [
    ("admin", "admin@alumini.com", "admin123", AdminRole::SuperAdmin),
    ("eventmanager", "events@alumini.com", "events123", AdminRole::EventManager),
    ("contentmanager", "content@alumini.com", "content123", AdminRole::ContentManager),
];

pub fn sample_admins() -> Result<Vec<Admin>, SeedError> {
    ADMINS
        .iter()
        .map(|&(name, email, password, role)| -> Result<Admin, SeedError> {
            Ok(Admin::new(name, email, hash_password(password)?, role))
        })
        .collect()
}
