//! Conversions between domain entities and protobuf messages

use chat_core::entities::{Message, User, UserRole};
use chrono::{DateTime, Utc};
use prost_types::Timestamp;

use crate::proto::{chat_v1, user_v1};

/// Convert a UTC instant into a protobuf timestamp
pub fn to_timestamp(at: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: at.timestamp(),
        // subsecond nanos stay below 2e9
        nanos: at.timestamp_subsec_nanos() as i32,
    }
}

/// Convert a protobuf timestamp back into a UTC instant
pub fn from_timestamp(ts: &Timestamp) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(ts.nanos).ok()?;
    DateTime::from_timestamp(ts.seconds, nanos)
}

impl From<UserRole> for user_v1::UserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Unspecified => Self::Unspecified,
            UserRole::User => Self::User,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<User> for user_v1::GetResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user_v1::UserRole::from(user.role).into(),
            created_at: Some(to_timestamp(user.created_at)),
            updated_at: user.updated_at.map(to_timestamp),
        }
    }
}

impl From<Message> for chat_v1::Message {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            chat_id: message.chat_id,
            sender_id: message.sender_id,
            content: message.content,
            sent_at: Some(to_timestamp(message.sent_at)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_keeps_nanos() {
        let at = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let ts = to_timestamp(at);
        assert_eq!(ts.seconds, 1_700_000_000);
        assert_eq!(ts.nanos, 123_456_789);
        assert_eq!(from_timestamp(&ts), Some(at));
    }

    #[test]
    fn test_negative_nanos_rejected() {
        let ts = Timestamp {
            seconds: 0,
            nanos: -1,
        };
        assert_eq!(from_timestamp(&ts), None);
    }

    #[test]
    fn test_user_without_update_has_no_updated_at() {
        let user = User {
            id: 3,
            name: "Ada".to_string(),
            email: "ada@x.io".to_string(),
            role: UserRole::Admin,
            created_at: Utc::now(),
            updated_at: None,
        };

        let response = user_v1::GetResponse::from(user);
        assert_eq!(response.id, 3);
        assert_eq!(response.role, user_v1::UserRole::Admin as i32);
        assert!(response.created_at.is_some());
        assert!(response.updated_at.is_none());
    }
}
