//! Statement build errors

use chat_core::DomainError;
use thiserror::Error;

/// A statement could not be rendered
///
/// These are programming defects (a malformed builder chain), never the
/// result of client input, and surface to clients as internal errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{statement} on \"{table}\" names no columns")]
    EmptyColumns {
        statement: &'static str,
        table: &'static str,
    },

    #[error("insert into \"{table}\" has {columns} columns but {values} values")]
    ValueCountMismatch {
        table: &'static str,
        columns: usize,
        values: usize,
    },

    #[error("update of \"{0}\" sets no columns")]
    EmptySet(&'static str),

    #[error("{statement} on \"{table}\" has no filter")]
    MissingFilter {
        statement: &'static str,
        table: &'static str,
    },

    #[error("invalid SQL identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("failed to encode argument ${position}: {message}")]
    Encode { position: usize, message: String },
}

impl From<BuildError> for DomainError {
    fn from(err: BuildError) -> Self {
        DomainError::QueryBuild(err.to_string())
    }
}
