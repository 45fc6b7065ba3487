//! User entity - represents a directory user

use chrono::{DateTime, Utc};

/// Role assigned to a user account
///
/// The discriminants are the wire and storage representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum UserRole {
    #[default]
    Unspecified = 0,
    User = 1,
    Admin = 2,
}

impl UserRole {
    /// Convert a raw integer into a role, if it names one
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Unspecified),
            1 => Some(Self::User),
            2 => Some(Self::Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get role name as used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity as stored in the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    /// `None` until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if the user has been updated since creation
    #[inline]
    pub fn is_updated(&self) -> bool {
        self.updated_at.is_some()
    }
}

/// Values required to create a user; the id and timestamps come from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

/// Partial update of a user
///
/// `None` leaves a column unchanged, `Some(String::new())` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Check if the patch changes any user-supplied column
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Apply the patch to a user, stamping `updated_at`
    pub fn apply(&self, user: &mut User, updated_at: DateTime<Utc>) {
        if let Some(name) = &self.name {
            user.name.clone_from(name);
        }
        if let Some(email) = &self.email {
            user.email.clone_from(email);
        }
        user.updated_at = Some(updated_at);
    }
}
