//! Chat service
//!
//! Handles chats, their memberships and their message history.

use chat_core::entities::{ChatMember, Message, NewMessage};
use chat_core::error::DomainError;
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a chat and return the id assigned by the store
    #[instrument(skip(self))]
    pub async fn create_chat(&self, name: String) -> ServiceResult<i64> {
        let id = self.ctx.chat_repo().create(&name).await?;
        info!(chat_id = id, "Chat created");
        Ok(id)
    }

    /// Delete a chat along with its members and messages
    #[instrument(skip(self))]
    pub async fn delete_chat(&self, id: i64) -> ServiceResult<()> {
        if id <= 0 {
            return Err(DomainError::InvalidId(id).into());
        }

        self.ctx.chat_repo().delete(id).await?;
        info!(chat_id = id, "Chat deleted");
        Ok(())
    }

    /// Add a user to a chat; adding an existing member succeeds without change
    #[instrument(skip(self))]
    pub async fn add_user_to_chat(&self, user_id: i64, chat_id: i64) -> ServiceResult<()> {
        self.ctx
            .member_repo()
            .add(ChatMember::new(user_id, chat_id))
            .await?;
        info!(user_id, chat_id, "User added to chat");
        Ok(())
    }

    /// Append a message to a chat
    #[instrument(skip(self, content))]
    pub async fn send_message(
        &self,
        chat_id: i64,
        sender_id: i64,
        content: String,
    ) -> ServiceResult<()> {
        let message = NewMessage {
            chat_id,
            sender_id,
            content,
        };
        self.ctx.message_repo().create(&message).await?;
        debug!(chat_id, sender_id, preview = message.preview(32), "Message stored");
        Ok(())
    }

    /// List a chat's messages, oldest first
    ///
    /// An unknown chat yields an empty list.
    #[instrument(skip(self))]
    pub async fn get_messages(&self, chat_id: i64) -> ServiceResult<Vec<Message>> {
        let messages = self.ctx.message_repo().find_by_chat(chat_id).await?;
        debug!(chat_id, count = messages.len(), "Messages fetched");
        Ok(messages)
    }
}
