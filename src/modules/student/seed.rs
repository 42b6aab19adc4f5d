use super::model::Student;
use crate::error::SeedError;
use crate::services::password::hash_password;

pub const SAMPLE_PASSWORD: &str = "student123";

/// (username, email, roll number, batch, department, year)
const STUDENTS: [(&str, &str, &str, &str, &str, i32); 5] = [
    ("akshay_patel", "akshay.patel@student.com", "21CS001", "2021-2025", "Computer Science", 3),
    ("meera_nair", "meera.nair@student.com", "21IT002", "2021-2025", "Information Technology", 3),
    ("rajesh_kumar", "rajesh.kumar@student.com", "22EC003", "2022-2026", "Electronics", 2),
    ("ananya_gupta", "ananya.gupta@student.com", "20ME004", "2020-2024", "Mechanical", 4),
    ("karthik_rajan", "karthik.rajan@student.com", "23CS005", "2023-2027", "Computer Science", 1),
];

pub fn sample_students() -> Result<Vec<Student>, SeedError> {
    let now = bson::DateTime::now();

    STUDENTS
        .iter()
        .map(|&(user_name, email, roll_no, batch, department, year)| -> Result<Student, SeedError> {
            Ok(Student {
                id: None,
                user_name: user_name.to_string(),
                email: email.to_string(),
                password: hash_password(SAMPLE_PASSWORD)?,
                roll_no: roll_no.to_string(),
                batch: batch.to_string(),
                degree: "B.Tech".to_string(),
                department: department.to_string(),
                year,
                role: "student".to_string(),
                avatar: String::new(),
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
    fn test_sample_students() {
        let students = sample_students().unwrap();

        assert_eq!(students.len(), 5);
        assert!(students.iter().all(|s| s.validate().is_ok()));
        assert!(students.iter().all(|s| s.role == "student"));
        assert_eq!(students[4].roll_no, "23CS005");
        assert_eq!(students[4].year, 1);
    }

    #[test]
    fn test_student_year_is_bounded() {
        let mut student = sample_students().unwrap().remove(0);
        student.year = 9;

        assert!(student.validate().is_err());
    }

    #[test]
    fn test_student_wire_format() {
        let students = sample_students().unwrap();
        let doc = bson::to_document(&students[0]).unwrap();

        assert_eq!(doc.get_str("rollNo").unwrap(), "21CS001");
        assert_eq!(doc.get_i32("year").unwrap(), 3);
    }
}
