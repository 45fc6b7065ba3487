//! In-memory implementation of the chat, member and message repositories

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::instrument;

use chat_core::entities::{Chat, ChatMember, Message, NewMessage};
use chat_core::error::DomainError;
use chat_core::traits::{ChatRepository, MemberRepository, MessageRepository, RepoResult};

#[derive(Debug, Default)]
struct ChatTables {
    last_chat_id: i64,
    last_message_id: i64,
    chats: BTreeMap<i64, Chat>,
    /// `(chat_id, user_id)`
    members: BTreeSet<(i64, i64)>,
    messages: Vec<Message>,
}

impl ChatTables {
    fn require_chat(&self, chat_id: i64, table: &str) -> RepoResult<()> {
        if self.chats.contains_key(&chat_id) {
            Ok(())
        } else {
            Err(DomainError::DatabaseError(format!(
                "insert on table \"{table}\" violates foreign key constraint \"{table}_chat_id_fkey\""
            )))
        }
    }
}

/// In-memory implementation of ChatRepository, MemberRepository and MessageRepository
///
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatRepository {
    tables: Arc<Mutex<ChatTables>>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of membership rows across all chats
    pub fn member_count(&self) -> usize {
        self.tables.lock().members.len()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<i64> {
        let mut tables = self.tables.lock();
        tables.last_chat_id += 1;
        let id = tables.last_chat_id;
        tables.chats.insert(
            id,
            Chat {
                id,
                name: name.to_string(),
            },
        );
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables.chats.remove(&id).is_none() {
            return Err(DomainError::ChatNotFound(id));
        }

        // ON DELETE CASCADE
        tables.members.retain(|(chat_id, _)| *chat_id != id);
        tables.messages.retain(|m| m.chat_id != id);
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for InMemoryChatRepository {
    #[instrument(skip(self))]
    async fn add(&self, member: ChatMember) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.require_chat(member.chat_id, "chat_member")?;
        tables.members.insert((member.chat_id, member.user_id));
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_user_ids(&self, chat_id: i64) -> RepoResult<Vec<i64>> {
        let tables = self.tables.lock();
        Ok(tables
            .members
            .range((chat_id, i64::MIN)..=(chat_id, i64::MAX))
            .map(|(_, user_id)| *user_id)
            .collect())
    }
}

#[async_trait]
impl MessageRepository for InMemoryChatRepository {
    #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
    async fn create(&self, message: &NewMessage) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.require_chat(message.chat_id, "message")?;

        tables.last_message_id += 1;
        let id = tables.last_message_id;
        tables.messages.push(Message {
            id,
            chat_id: message.chat_id,
            sender_id: message.sender_id,
            content: message.content.clone(),
            sent_at: Utc::now(),
        });
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_chat(&self, chat_id: i64) -> RepoResult<Vec<Message>> {
        let tables = self.tables.lock();
        let mut messages: Vec<Message> = tables
            .messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.sent_at.cmp(&b.sent_at).then(a.id.cmp(&b.id)));
        Ok(messages)
    }
}
