use super::model::Message;

/// (sender, receiver, text), oldest first.
pub(crate) const MESSAGES: [(&str, &str, &str); 6] = [
    (
        "arjun_kapoor",
        "akshay_patel",
        "Hi Akshay! I saw your profile. Would you be interested in a frontend developer role at Google?",
    ),
    (
        "akshay_patel",
        "arjun_kapoor",
        "Hi Arjun sir! Yes, I'm very interested. Can you share more details?",
    ),
    (
        "arjun_kapoor",
        "akshay_patel",
        "Sure! The role requires React and TypeScript skills. I'll share the JD soon.",
    ),
    (
        "priya_sharma",
        "meera_nair",
        "Hey Meera, I have a product management internship opening. Are you interested?",
    ),
    (
        "meera_nair",
        "priya_sharma",
        "That sounds amazing! I'd love to learn more about the opportunity.",
    ),
    (
        "sneha_reddy",
        "rajesh_kumar",
        "Hi Rajesh, I noticed you're interested in data science. Happy to mentor you!",
    ),
];

pub fn sample_messages() -> Vec<Message> {
    MESSAGES
        .iter()
        .map(|&(sender, receiver, text)| Message::new(sender, receiver, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::alumni::seed::sample_alumni;
    use crate::modules::student::seed::sample_students;

    #[test]
    fn test_messages_are_between_seeded_users() {
        let mut usernames: Vec<String> = sample_alumni().unwrap().into_iter().map(|a| a.user_name).collect();
        usernames.extend(sample_students().unwrap().into_iter().map(|s| s.user_name));

        let messages = sample_messages();
        assert_eq!(messages.len(), 6);
        for m in &messages {
            assert!(usernames.contains(&m.sender), "unknown sender {}", m.sender);
            assert!(usernames.contains(&m.receiver), "unknown receiver {}", m.receiver);
            assert_ne!(m.sender, m.receiver);
        }
    }
}
