//! Append-only chat transcript with a single-request in-flight guard.
//!
//! The user turn is appended before the network call resolves; the
//! matching assistant turn records the outcome, including failures. At
//! most one request may be outstanding, so transcript order is real-time
//! order.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Canned assistant reply when an exchange fails, whatever the cause.
/// The raw error never reaches the transcript.
pub const ASSISTANT_APOLOGY: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatTurn {
    fn new(role: ChatRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
    in_flight: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start an exchange: appends the user turn and raises the in-flight
    /// flag, returning the trimmed text to send. `None` means nothing
    /// happened - the text was blank or a request is already outstanding.
    pub fn try_begin(&mut self, text: &str) -> Option<String> {
        if self.in_flight {
            return None;
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.in_flight = true;
        self.turns
            .push(ChatTurn::new(ChatRole::User, text.to_string()));
        Some(text.to_string())
    }

    /// Record a successful answer and clear the in-flight flag.
    pub fn complete(&mut self, answer: String) {
        self.turns.push(ChatTurn::new(ChatRole::Assistant, answer));
        self.in_flight = false;
    }

    /// Record a failed exchange as the canned apology turn and clear the
    /// in-flight flag.
    pub fn fail(&mut self) {
        self.turns.push(ChatTurn::new(
            ChatRole::Assistant,
            ASSISTANT_APOLOGY.to_string(),
        ));
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_exchange_appends_user_then_assistant() {
        let mut t = Transcript::new();
        let sent = t.try_begin("Summarize my notes").unwrap();
        assert_eq!(sent, "Summarize my notes");
        t.complete("Your notes cover...".to_string());

        let turns = t.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, ChatRole::User);
        assert_eq!(turns[0].content, "Summarize my notes");
        assert_eq!(turns[1].role, ChatRole::Assistant);
        assert_eq!(turns[1].content, "Your notes cover...");
        assert!(!t.is_in_flight());
    }

    #[test]
    fn input_is_trimmed_before_sending() {
        let mut t = Transcript::new();
        let sent = t.try_begin("  hello  ").unwrap();
        assert_eq!(sent, "hello");
        assert_eq!(t.turns()[0].content, "hello");
    }

    #[test]
    fn blank_input_is_a_noop() {
        let mut t = Transcript::new();
        assert!(t.try_begin("   ").is_none());
        assert!(t.is_empty());
        assert!(!t.is_in_flight());
    }

    #[test]
    fn second_send_while_in_flight_is_a_noop() {
        let mut t = Transcript::new();
        t.try_begin("first").unwrap();
        assert!(t.try_begin("second").is_none());

        // only the first user turn made it in
        assert_eq!(t.turns().len(), 1);
        assert_eq!(t.turns()[0].content, "first");

        // and after the exchange resolves, sending works again
        t.complete("answer".to_string());
        assert!(t.try_begin("second").is_some());
    }

    #[test]
    fn failure_appends_the_apology_never_the_raw_error() {
        let mut t = Transcript::new();
        t.try_begin("anything").unwrap();
        t.fail();

        let turns = t.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].role, ChatRole::Assistant);
        assert_eq!(turns[1].content, ASSISTANT_APOLOGY);
        assert!(!t.is_in_flight());
    }

    #[test]
    fn turns_keep_call_order() {
        let mut t = Transcript::new();
        t.try_begin("one").unwrap();
        t.complete("answer one".to_string());
        t.try_begin("two").unwrap();
        t.fail();

        let contents: Vec<&str> = t.turns().iter().map(|turn| turn.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "answer one", "two", ASSISTANT_APOLOGY]);
    }
}
