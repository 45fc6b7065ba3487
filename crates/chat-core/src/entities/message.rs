//! Message entity - represents a chat message

use chrono::{DateTime, Utc};

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// Values required to post a message; id and `sent_at` come from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub chat_id: i64,
    pub sender_id: i64,
    pub content: String,
}

impl NewMessage {
    pub fn new(chat_id: i64, sender_id: i64, content: impl Into<String>) -> Self {
        Self {
            chat_id,
            sender_id,
            content: content.into(),
        }
    }

    /// Get a truncated preview of the content (for logs)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}
