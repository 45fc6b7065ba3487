//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use chat_core::entities::{Message, NewMessage};
use chat_core::traits::{MessageRepository, RepoResult};

use crate::mappers::{decode_row, MessageInsert};
use crate::models::{tables, MessageModel};
use crate::query::{Order, Select};

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, message), fields(chat_id = message.chat_id, sender_id = message.sender_id))]
    async fn create(&self, message: &NewMessage) -> RepoResult<()> {
        let statement = MessageInsert::new(message).to_statement()?;

        let result = sqlx::query_with(statement.sql(), statement.arguments()?)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        debug!(rows = result.rows_affected(), "Inserted message");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_chat(&self, chat_id: i64) -> RepoResult<Vec<Message>> {
        let statement = Select::from(tables::MESSAGE)
            .columns(MessageModel::COLUMNS)
            .where_eq("chat_id", chat_id)
            .order_by("sent_at", Order::Asc)
            .order_by("id", Order::Asc)
            .to_sql()?;

        let rows = sqlx::query_with(statement.sql(), statement.arguments()?)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.iter()
            .map(|row| decode_row::<MessageModel>(row).map(Message::from))
            .collect()
    }
}
