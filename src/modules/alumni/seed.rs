use super::model::{Alumni, ApprovalStatus};
use crate::error::SeedError;
use crate::services::password::hash_password;

pub const SAMPLE_PASSWORD: &str = "alumni123";

const MARKSHEET_URL: &str = "https://res.cloudinary.com/demo/image/upload/sample.pdf";

struct AlumniRow {
    user_name: &'static str,
    email: &'static str,
    batch: &'static str,
    company: &'static str,
    department: &'static str,
    industry: &'static str,
    position: &'static str,
    phone: &'static str,
    linkedin: &'static str,
    github: &'static str,
    status: ApprovalStatus,
}

const ALUMNI: [AlumniRow; 5] = [
    AlumniRow {
        user_name: "arjun_kapoor",
        email: "arjun.kapoor@gmail.com",
        batch: "2018-2022",
        company: "Google",
        department: "Computer Science",
        industry: "Technology",
        position: "Software Engineer",
        phone: "9876543210",
        linkedin: "https://linkedin.com/in/arjunkapoor",
        github: "https://github.com/arjunkapoor",
        status: ApprovalStatus::Approved,
    },
    AlumniRow {
        user_name: "priya_sharma",
        email: "priya.sharma@gmail.com",
        batch: "2017-2021",
        company: "Microsoft",
        department: "Information Technology",
        industry: "Technology",
        position: "Product Manager",
        phone: "9876543211",
        linkedin: "https://linkedin.com/in/priyasharma",
        github: "https://github.com/priyasharma",
        status: ApprovalStatus::Approved,
    },
    AlumniRow {
        user_name: "vikram_mehta",
        email: "vikram.mehta@gmail.com",
        batch: "2019-2023",
        company: "Amazon",
        department: "Electronics",
        industry: "E-Commerce",
        position: "DevOps Engineer",
        phone: "9876543212",
        linkedin: "https://linkedin.com/in/vikrammehta",
        github: "https://github.com/vikrammehta",
        status: ApprovalStatus::Approved,
    },
    AlumniRow {
        user_name: "rahul_singh",
        email: "rahul.singh@gmail.com",
        batch: "2020-2024",
        company: "TCS",
        department: "Mechanical",
        industry: "Consulting",
        position: "Analyst",
        phone: "9876543213",
        linkedin: "https://linkedin.com/in/rahulsingh",
        github: "",
        status: ApprovalStatus::Pending,
    },
    AlumniRow {
        user_name: "sneha_reddy",
        email: "sneha.reddy@gmail.com",
        batch: "2016-2020",
        company: "Infosys",
        department: "Computer Science",
        industry: "Technology",
        position: "Data Scientist",
        phone: "9876543214",
        linkedin: "https://linkedin.com/in/snehareddy",
        github: "https://github.com/snehareddy",
        status: ApprovalStatus::Approved,
    },
];

pub fn sample_alumni() -> Result<Vec<Alumni>, SeedError> {
    let now = bson::DateTime::now();

    ALUMNI
        .iter()
        .map(|row| -> Result<Alumni, SeedError> {
            Ok(Alumni {
                id: None,
                user_name: row.user_name.to_string(),
                email: row.email.to_string(),
                password: hash_password(SAMPLE_PASSWORD)?,
                batch: row.batch.to_string(),
                company: row.company.to_string(),
                department: row.department.to_string(),
                industry: row.industry.to_string(),
                position: row.position.to_string(),
                phone: row.phone.to_string(),
                linkedin: row.linkedin.to_string(),
                github: row.github.to_string(),
                avatar: String::new(),
                marksheet: MARKSHEET_URL.to_string(),
                status: row.status,
                created_at: now,
                updated_at: now,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_sample_alumni() {
        let alumni = sample_alumni().unwrap();

        assert_eq!(alumni.len(), 5);
        assert!(alumni.iter().all(|a| a.validate().is_ok()));
        assert!(alumni.iter().all(|a| bcrypt::verify(SAMPLE_PASSWORD, &a.password).unwrap()));
    }

    #[test]
    fn test_only_rahul_is_pending() {
        let alumni = sample_alumni().unwrap();
        let pending: Vec<_> = alumni
            .iter()
            .filter(|a| a.status == ApprovalStatus::Pending)
            .map(|a| a.user_name.as_str())
            .collect();

        assert_eq!(pending, vec!["rahul_singh"]);
    }

    #[test]
    fn test_alumni_wire_format() {
        let alumni = sample_alumni().unwrap();
        let doc = bson::to_document(&alumni[3]).unwrap();

        assert_eq!(doc.get_str("userName").unwrap(), "rahul_singh");
        assert_eq!(doc.get_str("github").unwrap(), "");
        assert_eq!(doc.get_str("status").unwrap(), "pending");
    }
}
