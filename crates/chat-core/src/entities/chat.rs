//! Chat entity and chat membership

/// Chat room entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub name: String,
}

/// Chat member (junction between User and Chat)
///
/// Identified by the `(user_id, chat_id)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatMember {
    pub user_id: i64,
    pub chat_id: i64,
}

impl ChatMember {
    pub fn new(user_id: i64, chat_id: i64) -> Self {
        Self { user_id, chat_id }
    }
}
