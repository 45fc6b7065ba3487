//! Domain entities - core business objects

mod chat;
mod message;
mod user;

pub use chat::{Chat, ChatMember};
pub use message::{Message, NewMessage};
pub use user::{NewUser, User, UserPatch, UserRole};
