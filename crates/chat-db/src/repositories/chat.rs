//! PostgreSQL implementation of ChatRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use chat_core::traits::{ChatRepository, RepoResult};

use crate::models::tables;
use crate::query::{Delete, Insert};

use super::error::{chat_not_found, map_db_error};

/// PostgreSQL implementation of ChatRepository
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    /// Create a new PgChatRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<i64> {
        let statement = Insert::into(tables::CHAT)
            .value("name", name)
            .returning("id")
            .to_sql()?;

        let id = sqlx::query_scalar_with::<_, i64, _>(statement.sql(), statement.arguments()?)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        debug!(chat_id = id, "Inserted chat row");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let statement = Delete::from(tables::CHAT).where_eq("id", id).to_sql()?;

        let result = sqlx::query_with(statement.sql(), statement.arguments()?)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(chat_not_found(id));
        }

        debug!(chat_id = id, rows = result.rows_affected(), "Deleted chat row");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgChatRepository>();
    }
}
