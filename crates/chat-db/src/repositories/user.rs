//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use chat_core::entities::{NewUser, User, UserPatch};
use chat_core::traits::{RepoResult, UserRepository};

use crate::mappers::{decode_row, UserInsert, UserUpdate};
use crate::models::{tables, UserModel};
use crate::query::{Delete, Select};

use super::error::{map_db_error, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let statement = Select::from(tables::USER)
            .columns(UserModel::COLUMNS)
            .where_eq("id", id)
            .to_sql()?;

        let row = sqlx::query_with(statement.sql(), statement.arguments()?)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(|row| User::try_from(decode_row::<UserModel>(&row)?))
            .transpose()
    }

    #[instrument(skip(self, user))]
    async fn create(&self, user: &NewUser) -> RepoResult<i64> {
        let statement = UserInsert::new(user).to_statement()?;

        let id = sqlx::query_scalar_with::<_, i64, _>(statement.sql(), statement.arguments()?)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        debug!(user_id = id, "Inserted user row");
        Ok(id)
    }

    #[instrument(skip(self, patch))]
    async fn update(
        &self,
        id: i64,
        patch: &UserPatch,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let statement = UserUpdate::new(id, patch, updated_at).to_statement()?;

        let result = sqlx::query_with(statement.sql(), statement.arguments()?)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let statement = Delete::from(tables::USER).where_eq("id", id).to_sql()?;

        let result = sqlx::query_with(statement.sql(), statement.arguments()?)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
