//! `UPDATE` with a set-list and equality filters

use super::error::BuildError;
use super::value::{SqlValue, Statement};
use super::writer::SqlWriter;

/// Builder for `UPDATE table SET col = $n, ... WHERE ...`
///
/// A filter is mandatory; whole-table updates are refused.
#[derive(Debug, Clone)]
pub struct Update {
    table: &'static str,
    sets: Vec<(&'static str, SqlValue)>,
    filters: Vec<(&'static str, SqlValue)>,
}

impl Update {
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            sets: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn set(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.sets.push((column, value.into()));
        self
    }

    /// Set the column only when a value is present
    pub fn set_if<V: Into<SqlValue>>(self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    pub fn where_eq(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    pub fn to_sql(self) -> Result<Statement, BuildError> {
        if self.sets.is_empty() {
            return Err(BuildError::EmptySet(self.table));
        }
        if self.filters.is_empty() {
            return Err(BuildError::MissingFilter {
                statement: "update",
                table: self.table,
            });
        }

        let mut w = SqlWriter::default();
        w.push("UPDATE ");
        w.push_ident(self.table)?;
        w.push(" SET ");
        w.push_assignments(self.sets, ", ")?;
        w.push_where(self.filters)?;

        Ok(w.finish())
    }
}
