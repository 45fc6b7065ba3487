//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use chat_core::entities::ChatMember;
use chat_core::traits::{MemberRepository, RepoResult};

use crate::models::tables;
use crate::query::{Insert, Order, Select};

use super::error::map_db_error;

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn add(&self, member: ChatMember) -> RepoResult<()> {
        let statement = Insert::into(tables::CHAT_MEMBER)
            .value("user_id", member.user_id)
            .value("chat_id", member.chat_id)
            .on_conflict_do_nothing()
            .to_sql()?;

        let result = sqlx::query_with(statement.sql(), statement.arguments()?)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        // Zero rows means the membership already existed
        debug!(rows = result.rows_affected(), "Inserted chat member");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_user_ids(&self, chat_id: i64) -> RepoResult<Vec<i64>> {
        let statement = Select::from(tables::CHAT_MEMBER)
            .columns(&["user_id"])
            .where_eq("chat_id", chat_id)
            .order_by("user_id", Order::Asc)
            .to_sql()?;

        let user_ids = sqlx::query_scalar_with::<_, i64, _>(statement.sql(), statement.arguments()?)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(user_ids)
    }
}
