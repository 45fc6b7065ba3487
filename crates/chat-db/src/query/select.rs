//! `SELECT` with equality filters

use super::error::BuildError;
use super::value::{SqlValue, Statement};
use super::writer::SqlWriter;

/// Sort direction of an `ORDER BY` term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Builder for `SELECT cols FROM table [WHERE ...] [ORDER BY ...]`
#[derive(Debug, Clone)]
pub struct Select {
    table: &'static str,
    columns: Vec<&'static str>,
    filters: Vec<(&'static str, SqlValue)>,
    order_by: Vec<(&'static str, Order)>,
}

impl Select {
    pub fn from(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            filters: Vec::new(),
            order_by: Vec::new(),
        }
    }

    pub fn columns(mut self, columns: &[&'static str]) -> Self {
        self.columns.extend_from_slice(columns);
        self
    }

    /// Add a `"column" = $n` filter; filters are joined with `AND`
    pub fn where_eq(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    pub fn order_by(mut self, column: &'static str, order: Order) -> Self {
        self.order_by.push((column, order));
        self
    }

    pub fn to_sql(self) -> Result<Statement, BuildError> {
        if self.columns.is_empty() {
            return Err(BuildError::EmptyColumns {
                statement: "select",
                table: self.table,
            });
        }

        let mut w = SqlWriter::default();
        w.push("SELECT ");
        w.push_ident_list(&self.columns)?;
        w.push(" FROM ");
        w.push_ident(self.table)?;
        w.push_where(self.filters)?;

        for (i, (column, order)) in self.order_by.into_iter().enumerate() {
            w.push(if i == 0 { " ORDER BY " } else { ", " });
            w.push_ident(column)?;
            w.push(" ");
            w.push(order.as_sql());
        }

        Ok(w.finish())
    }
}
