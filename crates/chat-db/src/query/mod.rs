//! Parameterized SQL statement builders
//!
//! Every builder renders to a [`Statement`]: SQL text with `$n` placeholders
//! plus the ordered argument list that fills them. Caller-supplied values
//! never appear in the SQL text. Table and column names are programmer
//! supplied; they are validated and always double-quoted.
//!
//! ```rust,ignore
//! let statement = Select::from("user")
//!     .columns(&["id", "name"])
//!     .where_eq("id", 7_i64)
//!     .to_sql()?;
//! assert_eq!(statement.sql(), r#"SELECT "id", "name" FROM "user" WHERE "id" = $1"#);
//! ```

mod delete;
mod error;
mod insert;
mod select;
mod update;
mod value;
mod writer;

pub use delete::Delete;
pub use error::BuildError;
pub use insert::Insert;
pub use select::{Order, Select};
pub use update::Update;
pub use value::{SqlValue, Statement};
