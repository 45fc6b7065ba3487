//! Database models - row shapes of the PostgreSQL tables
//!
//! Models decode positionally: column `i` of a row is the `i`-th entry of the
//! model's `COLUMNS`, which is also the list handed to the select builder.

mod message;
mod user;

pub use message::MessageModel;
pub use user::UserModel;

/// Table names
pub mod tables {
    pub const USER: &str = "user";
    pub const CHAT: &str = "chat";
    pub const CHAT_MEMBER: &str = "chat_member";
    pub const MESSAGE: &str = "message";
}
