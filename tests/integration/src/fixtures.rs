//! Test fixtures and data generators
//!
//! Provides reusable request messages for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chat_rpc::proto::chat_v1::{
    AddUserToChatRequest, CreateChatRequest, GetMessagesRequest, SendMessageRequest,
};
use chat_rpc::proto::user_v1::{CreateRequest, UserRole};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create-user request with a unique email
pub fn unique_user(role: UserRole) -> CreateRequest {
    let suffix = unique_suffix();
    let stamp = chrono::Utc::now().timestamp_micros();
    CreateRequest {
        name: format!("testuser{suffix}"),
        email: format!("test{suffix}_{stamp}@example.com"),
        role: role.into(),
    }
}

/// Create-chat request with a unique name
pub fn unique_chat() -> CreateChatRequest {
    CreateChatRequest {
        name: format!("chat{}", unique_suffix()),
    }
}

pub fn membership(user_id: i64, chat_id: i64) -> AddUserToChatRequest {
    AddUserToChatRequest { user_id, chat_id }
}

pub fn message(chat_id: i64, sender_id: i64, content: &str) -> SendMessageRequest {
    SendMessageRequest {
        chat_id,
        sender_id,
        content: content.to_string(),
    }
}

pub fn history(chat_id: i64) -> GetMessagesRequest {
    GetMessagesRequest { chat_id }
}
