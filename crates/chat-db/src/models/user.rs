//! User database model

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// Database model for the `user` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserModel {
    /// Select list, in decode order
    pub const COLUMNS: &'static [&'static str] =
        &["id", "name", "email", "role", "created_at", "updated_at"];
}

impl<'r> FromRow<'r, PgRow> for UserModel {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            email: row.try_get(2)?,
            role: row.try_get(3)?,
            created_at: row.try_get(4)?,
            // NULL decodes to None
            updated_at: row.try_get(5)?,
        })
    }
}
