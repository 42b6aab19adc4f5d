use super::model::Event;
use crate::error::SeedError;
use crate::modules::admin::model::Admin;
use crate::modules::crud::id_at;
use crate::modules::utc_date;

/// (title, description, date, time, venue, posting admin index)
const EVENTS: [(&str, &str, &str, &str, &str, usize); 4] = [
    (
        "Annual Career Fair 2026",
        "Connect with top recruiters from leading tech companies. Bring your resume and dress professionally! Over 50 companies will be participating.",
        "2026-03-15",
        "10:00 AM - 4:00 PM",
        "Main Auditorium, Block A",
        0,
    ),
    (
        "Tech Talk: AI & Machine Learning",
        "Join us for an insightful session on the latest trends in Artificial Intelligence and Machine Learning presented by industry experts from Google and Microsoft.",
        "2026-04-10",
        "2:00 PM - 5:00 PM",
        "Seminar Hall, Block B",
        1,
    ),
    (
        "Alumni Homecoming 2026",
        "A grand reunion for alumni from all batches! Enjoy networking, panel discussions, cultural events, and a gala dinner with your old classmates.",
        "2026-05-20",
        "9:00 AM - 9:00 PM",
        "College Campus Ground",
        0,
    ),
    (
        "Workshop: Full-Stack Web Development",
        "Hands-on workshop covering the MERN stack (MongoDB, Express, React, Node.js). Laptops are mandatory. Prior knowledge of JavaScript is recommended.",
        "2026-06-05",
        "10:00 AM - 1:00 PM",
        "Computer Lab 3, Block C",
        2,
    ),
];

pub fn sample_events(admins: &[Admin]) -> Result<Vec<Event>, SeedError> {
    let now = bson::DateTime::now();

    EVENTS
        .iter()
        .map(|&(title, description, date, time, venue, poster)| -> Result<Event, SeedError> {
            Ok(Event {
                id: None,
                title: title.to_string(),
                description: description.to_string(),
                date: utc_date(date)?,
                time: time.to_string(),
                venue: venue.to_string(),
                media: String::new(),
                posted_by: id_at(admins, poster)?,
                created_at: now,
                updated_at: now,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::model::AdminRole;
    use bson::oid::ObjectId;

    fn inserted_admins() -> Vec<Admin> {
        [AdminRole::SuperAdmin, AdminRole::EventManager, AdminRole::ContentManager]
            .into_iter()
            .map(|role| {
                let mut admin = Admin::new("a", "a@alumini.com", "hash".into(), role);
                admin.id = Some(ObjectId::new());
                admin
            })
            .collect()
    }

    #[test]
    fn test_events_reference_admins() {
        let admins = inserted_admins();
        let events = sample_events(&admins).unwrap();

        assert_eq!(events.len(), 4);
        let posters: Vec<_> = events.iter().map(|e| e.posted_by).collect();
        let expected: Vec<_> = [0, 1, 0, 2].iter().map(|&i| admins[i].id.unwrap()).collect();
        assert_eq!(posters, expected);
    }

    #[test]
    fn test_events_without_admins() {
        assert!(matches!(
            sample_events(&[]),
            Err(SeedError::MissingReference { collection: "adminprofiles", index: 0 })
        ));
    }

    #[test]
    fn test_event_wire_format() {
        let events = sample_events(&inserted_admins()).unwrap();
        let doc = bson::to_document(&events[0]).unwrap();

        assert!(doc.get_object_id("postedby").is_ok());
        assert!(!doc.contains_key("postedBy"));
        assert_eq!(
            doc.get_datetime("date").unwrap().try_to_rfc3339_string().unwrap(),
            "2026-03-15T00:00:00Z"
        );
    }
}
