use super::model::{Donation, MediaType};

const DONATIONS: [(&str, &str); 4] = [
    (
        "Help Build the New Computer Lab 💻",
        "https://res.cloudinary.com/demo/image/upload/computer_lab.jpg",
    ),
    (
        "Scholarship Fund for Underprivileged Students 🎓",
        "https://res.cloudinary.com/demo/image/upload/scholarship.jpg",
    ),
    (
        "Sports Equipment Fundraiser ⚽",
        "https://res.cloudinary.com/demo/image/upload/sports.jpg",
    ),
    (
        "Library Renovation Drive 📚",
        "https://res.cloudinary.com/demo/image/upload/library.jpg",
    ),
];

pub fn sample_donations() -> Vec<Donation> {
    DONATIONS
        .iter()
        .map(|&(caption, media_url)| Donation::new(caption, media_url, MediaType::Image))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_sample_donations() {
        let donations = sample_donations();

        assert_eq!(donations.len(), 4);
        assert!(donations.iter().all(|d| d.media_type == MediaType::Image));
        assert!(donations.iter().all(|d| d.validate().is_ok()));
    }

    #[test]
    fn test_donation_wire_format() {
        let doc = bson::to_document(&sample_donations()[3]).unwrap();

        assert_eq!(doc.get_str("caption").unwrap(), "Library Renovation Drive 📚");
        assert_eq!(doc.get_str("mediaType").unwrap(), "image");
        assert!(doc.contains_key("mediaUrl"));
    }
}
