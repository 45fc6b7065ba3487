//! SQL text accumulator shared by the statement builders

use std::fmt::Write;

use super::error::BuildError;
use super::value::{SqlValue, Statement};

/// Check an identifier against `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn validate_identifier(ident: &str) -> Result<(), BuildError> {
    let mut chars = ident.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(BuildError::InvalidIdentifier(ident.to_string()))
    }
}

/// Accumulates SQL text and the arguments its placeholders refer to
#[derive(Debug, Default)]
pub(crate) struct SqlWriter {
    sql: String,
    args: Vec<SqlValue>,
}

impl SqlWriter {
    pub(crate) fn push(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    /// Append a quoted identifier
    pub(crate) fn push_ident(&mut self, ident: &str) -> Result<(), BuildError> {
        validate_identifier(ident)?;
        self.sql.push('"');
        self.sql.push_str(ident);
        self.sql.push('"');
        Ok(())
    }

    /// Append a comma separated list of quoted identifiers
    pub(crate) fn push_ident_list(&mut self, idents: &[&str]) -> Result<(), BuildError> {
        for (i, ident) in idents.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.push_ident(ident)?;
        }
        Ok(())
    }

    /// Bind a value and append its `$n` placeholder
    pub(crate) fn push_value(&mut self, value: SqlValue) {
        self.args.push(value);
        // Writing into a String cannot fail
        let _ = write!(self.sql, "${}", self.args.len());
    }

    /// Append `"col" = $n` pairs joined by `separator`
    pub(crate) fn push_assignments(
        &mut self,
        pairs: Vec<(&str, SqlValue)>,
        separator: &str,
    ) -> Result<(), BuildError> {
        for (i, (column, value)) in pairs.into_iter().enumerate() {
            if i > 0 {
                self.push(separator);
            }
            self.push_ident(column)?;
            self.push(" = ");
            self.push_value(value);
        }
        Ok(())
    }

    /// Append a ` WHERE` clause for equality filters, if there are any
    pub(crate) fn push_where(&mut self, filters: Vec<(&str, SqlValue)>) -> Result<(), BuildError> {
        if filters.is_empty() {
            return Ok(());
        }
        self.push(" WHERE ");
        self.push_assignments(filters, " AND ")
    }

    pub(crate) fn finish(self) -> Statement {
        Statement::new(self.sql, self.args)
    }
}
