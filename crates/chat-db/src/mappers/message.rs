//! Message entity <-> model mapper

use chat_core::entities::{Message, NewMessage};

use crate::models::{tables, MessageModel};
use crate::query::{BuildError, Insert, Statement};

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id,
            chat_id: model.chat_id,
            sender_id: model.sender_id,
            content: model.content,
            sent_at: model.sent_at,
        }
    }
}

/// Values of a new message row; `id` and `sent_at` are filled in by the store
pub struct MessageInsert<'a> {
    pub chat_id: i64,
    pub sender_id: i64,
    pub content: &'a str,
}

impl<'a> MessageInsert<'a> {
    pub fn new(message: &'a NewMessage) -> Self {
        Self {
            chat_id: message.chat_id,
            sender_id: message.sender_id,
            content: &message.content,
        }
    }

    /// `INSERT ... ON CONFLICT DO NOTHING`
    pub fn to_statement(&self) -> Result<Statement, BuildError> {
        Insert::into(tables::MESSAGE)
            .value("chat_id", self.chat_id)
            .value("sender_id", self.sender_id)
            .value("content", self.content)
            .on_conflict_do_nothing()
            .to_sql()
    }
}
