//! User entity <-> model mapper

use chat_core::entities::{NewUser, User, UserPatch, UserRole};
use chat_core::DomainError;
use chrono::{DateTime, Utc};

use crate::models::{tables, UserModel};
use crate::query::{BuildError, Insert, Statement, Update};

/// Convert UserModel to User entity
///
/// Fails when the stored role is not a known `UserRole`.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = UserRole::from_i32(model.role).ok_or_else(|| {
            DomainError::Mapping(format!("user {} has unknown role {}", model.id, model.role))
        })?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Values of a new user row; `id` and `created_at` are filled in by the store
pub struct UserInsert<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub role: i32,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a NewUser) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            role: user.role.as_i32(),
        }
    }

    /// `INSERT ... RETURNING id`
    pub fn to_statement(&self) -> Result<Statement, BuildError> {
        Insert::into(tables::USER)
            .value("name", self.name)
            .value("email", self.email)
            .value("role", self.role)
            .returning("id")
            .to_sql()
    }
}

/// Values of a partial user update
pub struct UserUpdate<'a> {
    pub id: i64,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> UserUpdate<'a> {
    pub fn new(id: i64, patch: &'a UserPatch, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: patch.name.as_deref(),
            email: patch.email.as_deref(),
            updated_at,
        }
    }

    /// `UPDATE ... SET` the supplied columns and `updated_at`, filtered by id
    pub fn to_statement(&self) -> Result<Statement, BuildError> {
        Update::table(tables::USER)
            .set_if("name", self.name)
            .set_if("email", self.email)
            .set("updated_at", self.updated_at)
            .where_eq("id", self.id)
            .to_sql()
    }
}
