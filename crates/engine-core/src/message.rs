//! Conversation turns and generation wire messages.

use serde::{Deserialize, Serialize};

/// Role of a stored conversation turn.
///
/// System instructions are a wire-level concern owned by the engine
/// adapters; they are never stored in session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Wire name for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single utterance in a session's history.
///
/// Turns are immutable once appended; ordering is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who spoke.
    pub role: TurnRole,
    /// Utterance text.
    pub content: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// A message in a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

impl From<&Turn> for ChatMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role.as_str().to_string(),
            content: turn.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_constructors() {
        let user = Turn::user("I've been feeling low");
        assert_eq!(user.role, TurnRole::User);
        assert_eq!(user.content, "I've been feeling low");

        let assistant = Turn::assistant("Tell me more about that.");
        assert_eq!(assistant.role, TurnRole::Assistant);
    }

    #[test]
    fn test_chat_message_from_turn() {
        let msg = ChatMessage::from(&Turn::user("hello"));
        assert_eq!(msg.role, "user");
        assert_eq!(msg.content, "hello");

        let msg = ChatMessage::from(&Turn::assistant("hi"));
        assert_eq!(msg.role, "assistant");
    }

    #[test]
    fn test_system_messages_are_wire_only() {
        let msg = ChatMessage::system("You are an interviewer.");
        assert_eq!(msg.role, "system");
    }
}
