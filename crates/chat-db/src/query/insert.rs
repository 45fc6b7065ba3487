//! `INSERT` of a single row

use super::error::BuildError;
use super::value::{SqlValue, Statement};
use super::writer::SqlWriter;

/// Builder for `INSERT INTO table (cols) VALUES (...) [ON CONFLICT DO NOTHING] [RETURNING col]`
#[derive(Debug, Clone)]
pub struct Insert {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<SqlValue>,
    on_conflict_do_nothing: bool,
    returning: Option<&'static str>,
}

impl Insert {
    pub fn into(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
            on_conflict_do_nothing: false,
            returning: None,
        }
    }

    pub fn columns(mut self, columns: &[&'static str]) -> Self {
        self.columns.extend_from_slice(columns);
        self
    }

    /// Row values, in the same order as `columns`
    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SqlValue>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Add one `column = value` pair
    pub fn value(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.columns.push(column);
        self.values.push(value.into());
        self
    }

    /// Turn a constraint conflict into a no-op
    pub fn on_conflict_do_nothing(mut self) -> Self {
        self.on_conflict_do_nothing = true;
        self
    }

    pub fn returning(mut self, column: &'static str) -> Self {
        self.returning = Some(column);
        self
    }

    pub fn to_sql(self) -> Result<Statement, BuildError> {
        if self.columns.is_empty() {
            return Err(BuildError::EmptyColumns {
                statement: "insert",
                table: self.table,
            });
        }
        if self.columns.len() != self.values.len() {
            return Err(BuildError::ValueCountMismatch {
                table: self.table,
                columns: self.columns.len(),
                values: self.values.len(),
            });
        }

        let mut w = SqlWriter::default();
        w.push("INSERT INTO ");
        w.push_ident(self.table)?;
        w.push(" (");
        w.push_ident_list(&self.columns)?;
        w.push(") VALUES (");
        for (i, value) in self.values.into_iter().enumerate() {
            if i > 0 {
                w.push(", ");
            }
            w.push_value(value);
        }
        w.push(")");

        if self.on_conflict_do_nothing {
            w.push(" ON CONFLICT DO NOTHING");
        }
        if let Some(column) = self.returning {
            w.push(" RETURNING ");
            w.push_ident(column)?;
        }

        Ok(w.finish())
    }
}
