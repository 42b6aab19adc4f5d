use super::model::{Job, JobType};
use crate::error::SeedError;
use crate::modules::alumni::model::Alumni;
use crate::modules::crud::id_at;
use crate::modules::utc_date;

struct JobRow {
    title: &'static str,
    company_name: &'static str,
    location: &'static str,
    job_type: JobType,
    skills: &'static [&'static str],
    salary: &'static str,
    description: &'static str,
    deadline: &'static str,
    /// Index into the seeded alumni.
    poster: usize,
    company_website: &'static str,
}

const JOBS: [JobRow; 5] = [
    JobRow {
        title: "Frontend Developer",
        company_name: "Google",
        location: "Bangalore, India",
        job_type: JobType::FullTime,
        skills: &["React", "JavaScript", "CSS", "HTML"],
        salary: "₹18,00,000 per annum",
        description: "We are looking for a passionate Frontend Developer to join our team and build beautiful user interfaces for Google products.",
        deadline: "2026-06-30",
        poster: 0,
        company_website: "https://careers.google.com",
    },
    JobRow {
        title: "Product Management Intern",
        company_name: "Microsoft",
        location: "Hyderabad, India",
        job_type: JobType::Internship,
        skills: &["Communication", "Analytical Thinking", "SQL", "Excel"],
        salary: "₹50,000 per month",
        description: "Join Microsoft as a Product Management Intern and work with cross-functional teams to deliver impactful products.",
        deadline: "2026-05-15",
        poster: 1,
        company_website: "https://careers.microsoft.com",
    },
    JobRow {
        title: "DevOps Engineer",
        company_name: "Amazon",
        location: "Chennai, India",
        job_type: JobType::FullTime,
        skills: &["AWS", "Docker", "Kubernetes", "CI/CD", "Linux"],
        salary: "₹22,00,000 per annum",
        description: "Seeking a DevOps Engineer to manage cloud infrastructure and automate deployment pipelines at Amazon.",
        deadline: "2026-07-20",
        poster: 2,
        company_website: "https://amazon.jobs",
    },
    JobRow {
        title: "Data Science Intern",
        company_name: "Infosys",
        location: "Pune, India",
        job_type: JobType::Internship,
        skills: &["Python", "Machine Learning", "Pandas", "NumPy"],
        salary: "₹35,000 per month",
        description: "An exciting opportunity to work on real-world data science projects at Infosys with mentorship from senior data scientists.",
        deadline: "2026-04-30",
        poster: 4,
        company_website: "https://infosys.com",
    },
    JobRow {
        title: "Part-time Web Developer",
        company_name: "Freelance Corp",
        location: "Remote",
        job_type: JobType::PartTime,
        skills: &["Node.js", "Express", "MongoDB", "React"],
        salary: "₹25,000 per month",
        description: "Looking for a part-time web developer to help build and maintain web applications for multiple clients.",
        deadline: "2026-08-15",
        poster: 0,
        company_website: "https://freelancecorp.com",
    },
];

/// Job postings owned by already-inserted alumni; every `posted_by` is one of their `_id`s.
pub fn sample_jobs(alumni: &[Alumni]) -> Result<Vec<Job>, SeedError> {
    let now = bson::DateTime::now();

    JOBS.iter()
        .map(|row| -> Result<Job, SeedError> {
            let posted_by = id_at(alumni, row.poster)?;

            Ok(Job {
                id: None,
                title: row.title.to_string(),
                company_name: row.company_name.to_string(),
                location: row.location.to_string(),
                job_type: row.job_type,
                skills_required: row.skills.iter().map(|s| s.to_string()).collect(),
                salary: row.salary.to_string(),
                description: row.description.to_string(),
                deadline: utc_date(row.deadline)?,
                posted_by,
                posted_by_name: alumni[row.poster].user_name.clone(),
                company_website: row.company_website.to_string(),
                applied_users: Vec::new(),
                created_at: now,
                updated_at: now,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::alumni::seed::sample_alumni;
    use bson::oid::ObjectId;
    use validator::Validate;

    fn inserted_alumni() -> Vec<Alumni> {
        let mut alumni = sample_alumni().unwrap();
        for a in alumni.iter_mut() {
            a.id = Some(ObjectId::new());
        }
        alumni
    }

    #[test]
    fn test_jobs_reference_alumni() {
        let alumni = inserted_alumni();
        let jobs = sample_jobs(&alumni).unwrap();

        assert_eq!(jobs.len(), 5);
        let posters: Vec<_> = jobs.iter().map(|j| j.posted_by).collect();
        let expected: Vec<_> = [0, 1, 2, 4, 0].iter().map(|&i| alumni[i].id.unwrap()).collect();
        assert_eq!(posters, expected);

        for job in &jobs {
            let owner = alumni.iter().find(|a| a.id == Some(job.posted_by)).unwrap();
            assert_eq!(job.posted_by_name, owner.user_name);
            assert!(job.applied_users.is_empty());
            assert!(job.validate().is_ok());
        }
    }

    #[test]
    fn test_jobs_require_inserted_alumni() {
        let alumni = sample_alumni().unwrap();

        assert!(matches!(
            sample_jobs(&alumni),
            Err(SeedError::MissingReference { collection: "aluminiprofiles", index: 0 })
        ));
    }

    #[test]
    fn test_jobs_require_enough_alumni() {
        let alumni = inserted_alumni();

        assert!(matches!(
            sample_jobs(&alumni[..3]),
            Err(SeedError::MissingReference { index: 4, .. })
        ));
    }

    #[test]
    fn test_job_wire_format() {
        let jobs = sample_jobs(&inserted_alumni()).unwrap();
        let doc = bson::to_document(&jobs[1]).unwrap();

        assert_eq!(doc.get_str("jobType").unwrap(), "Internship");
        assert_eq!(doc.get_str("companyName").unwrap(), "Microsoft");
        assert!(doc.get_object_id("postedBy").is_ok());
        assert!(doc.get_datetime("deadline").is_ok());
        assert_eq!(doc.get_array("skillsRequired").unwrap().len(), 4);
    }
}
