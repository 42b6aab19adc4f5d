use super::model::Conversation;

const CONVERSATIONS: [(&str, &str, &str); 3] = [
    (
        "arjun_kapoor",
        "akshay_patel",
        "Sure! The role requires React and TypeScript skills. I'll share the JD soon.",
    ),
    (
        "priya_sharma",
        "meera_nair",
        "That sounds amazing! I'd love to learn more about the opportunity.",
    ),
    (
        "sneha_reddy",
        "rajesh_kumar",
        "Hi Rajesh, I noticed you're interested in data science. Happy to mentor you!",
    ),
];

pub fn sample_conversations() -> Vec<Conversation> {
    CONVERSATIONS
        .iter()
        .map(|&(sender, receiver, last)| Conversation::new(sender, receiver, last))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::message::seed::MESSAGES;

    #[test]
    fn test_last_message_matches_thread() {
        let conversations = sample_conversations();
        assert_eq!(conversations.len(), 3);

        for c in &conversations {
            let last = MESSAGES
                .iter()
                .filter(|(from, to, _)| c.involves(from, to))
                .last()
                .map(|(_, _, text)| *text);

            assert_eq!(last, Some(c.last_message.as_str()));
        }
    }
}
