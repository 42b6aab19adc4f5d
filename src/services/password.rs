use bcrypt::BcryptError;

/// bcrypt work factor shared with the web application's login check.
pub const HASH_COST: u32 = 10;

pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plain, HASH_COST)
}

/// True when `value` has the shape of a bcrypt hash (`$2a$`, `$2b$`, `$2x$` or `$2y$`).
pub fn is_bcrypt_hash(value: &str) -> bool {
    let prefixed = ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| value.starts_with(prefix));

    prefixed && value.len() == 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_and_hides_plaintext() {
        let hash = hash_password("alumni123").unwrap();

        assert_ne!(hash, "alumni123");
        assert!(is_bcrypt_hash(&hash));
        assert!(hash.starts_with("$2b$10$"));
        assert!(bcrypt::verify("alumni123", &hash).unwrap());
        assert!(!bcrypt::verify("alumni124", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("student123").unwrap();
        let second = hash_password("student123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_is_bcrypt_hash_rejects_plaintext() {
        assert!(!is_bcrypt_hash("admin123"));
        assert!(!is_bcrypt_hash(""));
        assert!(!is_bcrypt_hash("$2b$10$short"));
    }
}
