//! Message database model

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// Database model for the `message` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageModel {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl MessageModel {
    /// Select list, in decode order
    pub const COLUMNS: &'static [&'static str] = &["id", "chat_id", "sender_id", "content", "sent_at"];
}

impl<'r> FromRow<'r, PgRow> for MessageModel {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(0)?,
            chat_id: row.try_get(1)?,
            sender_id: row.try_get(2)?,
            content: row.try_get(3)?,
            sent_at: row.try_get(4)?,
        })
    }
}
