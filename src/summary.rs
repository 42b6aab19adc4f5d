use std::fmt;

const INNER_WIDTH: usize = 46;

/// Number of documents inserted per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub admins: usize,
    pub alumni: usize,
    pub students: usize,
    pub jobs: usize,
    pub events: usize,
    pub donations: usize,
    pub donation_payments: usize,
    pub messages: usize,
    pub conversations: usize,
}

impl SeedSummary {
    /// What a complete run of the seeder leaves behind.
    pub const EXPECTED: SeedSummary = SeedSummary {
        admins: 3,
        alumni: 5,
        students: 5,
        jobs: 5,
        events: 4,
        donations: 4,
        donation_payments: 5,
        messages: 6,
        conversations: 3,
    };

    pub fn rows(&self) -> [(&'static str, usize); 9] {
        [
            ("Admins", self.admins),
            ("Alumni", self.alumni),
            ("Students", self.students),
            ("Jobs", self.jobs),
            ("Events", self.events),
            ("Donations", self.donations),
            ("Donation Payments", self.donation_payments),
            ("Messages", self.messages),
            ("Conversations", self.conversations),
        ]
    }

    pub fn total(&self) -> usize {
        self.rows().iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "═".repeat(INNER_WIDTH);

        writeln!(f, "╔{}╗", rule)?;
        writeln!(f, "║{:^width$}║", "SEEDING SUMMARY", width = INNER_WIDTH)?;
        writeln!(f, "╠{}╣", rule)?;
        for (label, count) in self.rows() {
            writeln!(f, "║  {:<18}: {:<24}║", label, count)?;
        }
        write!(f, "╚{}╝", rule)
    }
}

/// (role, login field, login value, password) for the accounts worth trying first.
pub const SAMPLE_LOGINS: [(&str, &str, &str, &str); 3] = [
    ("Admin", "username", "admin", "admin123"),
    ("Alumni", "email", "arjun.kapoor@gmail.com", "alumni123"),
    ("Student", "email", "akshay.patel@student.com", "student123"),
];

pub fn login_hints() -> String {
    let rule = "─".repeat(INNER_WIDTH - 1);
    let mut out = format!("🔑 Login Credentials:\n{}\n", rule);

    for (role, field, value, password) in SAMPLE_LOGINS {
        out.push_str(&format!("{:<8} →  {}: {} | password: {}\n", role, field, value, password));
    }
    out.push_str(&rule);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_total() {
        assert_eq!(SeedSummary::EXPECTED.total(), 40);
        assert_eq!(SeedSummary::default().total(), 0);
    }

    #[test]
    fn test_table_is_aligned() {
        let table = SeedSummary::EXPECTED.to_string();
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();

        assert_eq!(widths.len(), 13);
        assert!(widths.iter().all(|&w| w == INNER_WIDTH + 2), "{:?}", widths);
    }

    #[test]
    fn test_table_lists_counts() {
        let table = SeedSummary::EXPECTED.to_string();

        assert!(table.contains("║  Donation Payments : 5 "));
        assert!(table.contains("║  Conversations     : 3 "));
    }

    #[test]
    fn test_login_hints() {
        let hints = login_hints();

        assert!(hints.contains("username: admin | password: admin123"));
        assert!(hints.contains("email: arjun.kapoor@gmail.com | password: alumni123"));
        assert!(hints.contains("email: akshay.patel@student.com | password: student123"));
    }
}
