//! Bound values and rendered statements

use chrono::{DateTime, Utc};
use sqlx::postgres::PgArguments;
use sqlx::Arguments;

use super::error::BuildError;

/// A value bound to a `$n` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Int4(i32),
    Int8(i64),
    Text(String),
    /// Nullable `TIMESTAMPTZ`
    Timestamptz(Option<DateTime<Utc>>),
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::Int4(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Int8(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamptz(Some(v))
    }
}

impl From<Option<DateTime<Utc>>> for SqlValue {
    fn from(v: Option<DateTime<Utc>>) -> Self {
        Self::Timestamptz(v)
    }
}

/// SQL text plus its positional arguments
///
/// `args()[n - 1]` is the value of placeholder `$n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    args: Vec<SqlValue>,
}

impl Statement {
    pub(crate) fn new(sql: String, args: Vec<SqlValue>) -> Self {
        Self { sql, args }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    /// Encode the arguments for `sqlx::query_with` and friends
    pub fn arguments(&self) -> Result<PgArguments, BuildError> {
        let mut arguments = PgArguments::default();

        for (index, value) in self.args.iter().enumerate() {
            let added = match value {
                SqlValue::Int4(v) => arguments.add(*v),
                SqlValue::Int8(v) => arguments.add(*v),
                SqlValue::Text(v) => arguments.add(v.as_str()),
                SqlValue::Timestamptz(v) => arguments.add(*v),
            };
            added.map_err(|e| BuildError::Encode {
                position: index + 1,
                message: e.to_string(),
            })?;
        }

        Ok(arguments)
    }
}
