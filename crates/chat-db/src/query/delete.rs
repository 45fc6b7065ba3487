//! `DELETE` with equality filters

use super::error::BuildError;
use super::value::{SqlValue, Statement};
use super::writer::SqlWriter;

/// Builder for `DELETE FROM table WHERE ...`
///
/// A filter is mandatory; whole-table deletes are refused.
#[derive(Debug, Clone)]
pub struct Delete {
    table: &'static str,
    filters: Vec<(&'static str, SqlValue)>,
}

impl Delete {
    pub fn from(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
        }
    }

    pub fn where_eq(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    pub fn to_sql(self) -> Result<Statement, BuildError> {
        if self.filters.is_empty() {
            return Err(BuildError::MissingFilter {
                statement: "delete",
                table: self.table,
            });
        }

        let mut w = SqlWriter::default();
        w.push("DELETE FROM ");
        w.push_ident(self.table)?;
        w.push_where(self.filters)?;

        Ok(w.finish())
    }
}
