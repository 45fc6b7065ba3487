//! gRPC Integration Tests
//!
//! Both servers are started on ephemeral ports over in-memory repositories.
//! Tests marked as PostgreSQL-backed additionally require `DATABASE_URL`.
//!
//! Run with: cargo test -p integration-tests --test rpc_tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chat_core::entities::ChatMember;
use chat_core::traits::{MemberRepository, RepoResult};
use chat_db::{InMemoryChatRepository, InMemoryUserRepository};
use chat_rpc::convert::from_timestamp;
use chat_rpc::proto::chat_v1::DeleteChatRequest;
use chat_rpc::proto::user_v1::{DeleteRequest, GetRequest, UpdateRequest, UserRole};
use chat_service::ServiceContextBuilder;
use integration_tests::{
    assert_code, database_context, fixtures::*, TestServers,
};
use tonic::Code;

// ============================================================================
// User Service Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut users = servers.user_client().await.unwrap();

    let request = unique_user(UserRole::Admin);
    let id = users.create(request.clone()).await.unwrap().into_inner().id;
    assert!(id > 0);

    let user = users.get(GetRequest { id }).await.unwrap().into_inner();
    assert_eq!(user.id, id);
    assert_eq!(user.name, request.name);
    assert_eq!(user.email, request.email);
    assert_eq!(user.role(), UserRole::Admin);
    assert!(user.created_at.is_some());
    assert!(user.updated_at.is_none());
}

#[tokio::test]
async fn test_partial_update() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut users = servers.user_client().await.unwrap();

    let request = unique_user(UserRole::User);
    let id = users.create(request.clone()).await.unwrap().into_inner().id;

    users
        .update(UpdateRequest {
            id,
            name: Some("Renamed".to_string()),
            email: None,
        })
        .await
        .unwrap();

    let user = users.get(GetRequest { id }).await.unwrap().into_inner();
    assert_eq!(user.name, "Renamed");
    assert_eq!(user.email, request.email);

    let created_at = from_timestamp(&user.created_at.unwrap()).unwrap();
    let updated_at = from_timestamp(&user.updated_at.unwrap()).unwrap();
    assert!(updated_at >= created_at);

    // An update without fields still stamps updated_at
    users
        .update(UpdateRequest {
            id,
            name: None,
            email: None,
        })
        .await
        .unwrap();
    let user = users.get(GetRequest { id }).await.unwrap().into_inner();
    assert_eq!(user.name, "Renamed");
    assert!(from_timestamp(&user.updated_at.unwrap()).unwrap() >= updated_at);
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut users = servers.user_client().await.unwrap();

    assert_code(users.get(GetRequest { id: 999 }).await, Code::NotFound);
    assert_code(
        users
            .update(UpdateRequest {
                id: 999,
                name: Some("x".to_string()),
                email: None,
            })
            .await,
        Code::NotFound,
    );
    assert_code(users.delete(DeleteRequest { id: 999 }).await, Code::NotFound);
}

#[tokio::test]
async fn test_unknown_role_is_invalid_argument() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut users = servers.user_client().await.unwrap();

    let mut request = unique_user(UserRole::User);
    request.role = 3;
    assert_code(users.create(request).await, Code::InvalidArgument);
}

#[tokio::test]
async fn test_duplicate_email_is_opaque_internal() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut users = servers.user_client().await.unwrap();

    let request = unique_user(UserRole::User);
    users.create(request.clone()).await.unwrap();

    let status = users.create(request).await.unwrap_err();
    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "internal server error");
}

// ============================================================================
// Chat Service Tests
// ============================================================================

#[tokio::test]
async fn test_delete_chat_rejects_non_positive_ids() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut chats = servers.chat_client().await.unwrap();

    for id in [0, -5] {
        assert_code(
            chats.delete_chat(DeleteChatRequest { id }).await,
            Code::InvalidArgument,
        );
    }
}

#[tokio::test]
async fn test_delete_missing_chat_is_not_found() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut chats = servers.chat_client().await.unwrap();

    assert_code(
        chats.delete_chat(DeleteChatRequest { id: 31_337 }).await,
        Code::NotFound,
    );
}

#[tokio::test]
async fn test_add_user_twice_is_idempotent() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut users = servers.user_client().await.unwrap();
    let mut chats = servers.chat_client().await.unwrap();

    let user_id = users
        .create(unique_user(UserRole::User))
        .await
        .unwrap()
        .into_inner()
        .id;
    let chat_id = chats.create_chat(unique_chat()).await.unwrap().into_inner().id;

    chats.add_user_to_chat(membership(user_id, chat_id)).await.unwrap();
    chats.add_user_to_chat(membership(user_id, chat_id)).await.unwrap();

    let members = servers.ctx.member_repo().find_user_ids(chat_id).await.unwrap();
    assert_eq!(members, vec![user_id]);
}

#[tokio::test]
async fn test_get_messages_of_empty_or_unknown_chat() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut chats = servers.chat_client().await.unwrap();

    let chat_id = chats.create_chat(unique_chat()).await.unwrap().into_inner().id;

    let messages = chats.get_messages(history(chat_id)).await.unwrap().into_inner();
    assert!(messages.messages.is_empty());

    let messages = chats.get_messages(history(123_456)).await.unwrap().into_inner();
    assert!(messages.messages.is_empty());
}

#[tokio::test]
async fn test_messages_come_back_in_send_order() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut chats = servers.chat_client().await.unwrap();

    let chat_id = chats.create_chat(unique_chat()).await.unwrap().into_inner().id;
    for (sender, content) in [(1, "first"), (2, "second"), (1, "third")] {
        chats.send_message(message(chat_id, sender, content)).await.unwrap();
    }

    let messages = chats
        .get_messages(history(chat_id))
        .await
        .unwrap()
        .into_inner()
        .messages;

    let got: Vec<(i64, &str)> = messages
        .iter()
        .map(|m| (m.sender_id, m.content.as_str()))
        .collect();
    assert_eq!(got, [(1, "first"), (2, "second"), (1, "third")]);
    assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
}

// ============================================================================
// End-to-end Scenario
// ============================================================================

#[tokio::test]
async fn test_ada_says_hi_in_general() {
    let servers = TestServers::start().await.expect("Failed to start servers");
    let mut users = servers.user_client().await.unwrap();
    let mut chats = servers.chat_client().await.unwrap();

    let mut ada = unique_user(UserRole::User);
    ada.name = "Ada".to_string();
    ada.email = "ada@x.io".to_string();

    let user_id = users.create(ada).await.unwrap().into_inner().id;
    assert_eq!(user_id, 1);

    let user = users.get(GetRequest { id: 1 }).await.unwrap().into_inner();
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@x.io");
    assert_eq!(user.role(), UserRole::User);
    assert!(user.updated_at.is_none());

    let mut general = unique_chat();
    general.name = "General".to_string();
    let chat_id = chats.create_chat(general).await.unwrap().into_inner().id;
    assert_eq!(chat_id, 1);

    chats.add_user_to_chat(membership(1, 1)).await.unwrap();
    chats.send_message(message(1, 1, "hi")).await.unwrap();

    let messages = chats.get_messages(history(1)).await.unwrap().into_inner().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender_id, 1);
    assert_eq!(messages[0].chat_id, 1);
    assert_eq!(messages[0].content, "hi");
    assert!(messages[0].sent_at.is_some());

    users.delete(DeleteRequest { id: 1 }).await.unwrap();
    assert_code(users.delete(DeleteRequest { id: 1 }).await, Code::NotFound);

    // Membership and history outlive the sender
    let messages = chats.get_messages(history(1)).await.unwrap().into_inner().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender_id, 1);
}

#[tokio::test]
async fn test_scenario_against_postgres() {
    let Some(ctx) = database_context().await.expect("Failed to prepare database") else {
        return;
    };

    let servers = TestServers::start_with_context(ctx)
        .await
        .expect("Failed to start servers");
    let mut users = servers.user_client().await.unwrap();
    let mut chats = servers.chat_client().await.unwrap();

    let user_id = users
        .create(unique_user(UserRole::User))
        .await
        .unwrap()
        .into_inner()
        .id;
    let chat_id = chats.create_chat(unique_chat()).await.unwrap().into_inner().id;

    chats.add_user_to_chat(membership(user_id, chat_id)).await.unwrap();
    chats.add_user_to_chat(membership(user_id, chat_id)).await.unwrap();
    chats.send_message(message(chat_id, user_id, "hi")).await.unwrap();
    chats.send_message(message(chat_id, user_id, "again")).await.unwrap();

    // The user is deleted while their membership and messages still exist
    users.delete(DeleteRequest { id: user_id }).await.unwrap();
    assert_code(users.get(GetRequest { id: user_id }).await, Code::NotFound);

    let messages = chats
        .get_messages(history(chat_id))
        .await
        .unwrap()
        .into_inner()
        .messages;
    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["hi", "again"]);
    assert!(messages.iter().all(|m| m.sender_id == user_id));

    // Deleting the chat cascades to its membership and messages
    chats.delete_chat(DeleteChatRequest { id: chat_id }).await.unwrap();
    assert_code(
        chats.delete_chat(DeleteChatRequest { id: chat_id }).await,
        Code::NotFound,
    );
    assert!(chats
        .get_messages(history(chat_id))
        .await
        .unwrap()
        .into_inner()
        .messages
        .is_empty());
}

// ============================================================================
// Request Timeout
// ============================================================================

/// Member repository that waits before delegating to the in-memory store
struct SlowMemberRepository {
    inner: InMemoryChatRepository,
    delay: Duration,
}

#[async_trait]
impl MemberRepository for SlowMemberRepository {
    async fn add(&self, member: ChatMember) -> RepoResult<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.add(member).await
    }

    async fn find_user_ids(&self, chat_id: i64) -> RepoResult<Vec<i64>> {
        self.inner.find_user_ids(chat_id).await
    }
}

#[tokio::test]
async fn test_request_timeout_aborts_store_call() {
    let store = InMemoryChatRepository::new();
    let delay = Duration::from_millis(500);
    let ctx = ServiceContextBuilder::new()
        .user_repo(Arc::new(InMemoryUserRepository::new()))
        .chat_repo(Arc::new(store.clone()))
        .member_repo(Arc::new(SlowMemberRepository {
            inner: store.clone(),
            delay,
        }))
        .message_repo(Arc::new(store.clone()))
        .build()
        .unwrap();

    let servers = TestServers::start_with_timeout(ctx, Duration::from_millis(50))
        .await
        .expect("Failed to start servers");
    let mut chats = servers.chat_client().await.unwrap();

    let chat_id = chats.create_chat(unique_chat()).await.unwrap().into_inner().id;
    let status = chats
        .add_user_to_chat(membership(1, chat_id))
        .await
        .unwrap_err();
    assert!(
        matches!(status.code(), Code::Cancelled | Code::DeadlineExceeded),
        "unexpected status {:?}: {}",
        status.code(),
        status.message()
    );

    // The dropped store call never completes its write
    tokio::time::sleep(delay * 2).await;
    assert_eq!(store.member_count(), 0);
    assert!(store.find_user_ids(chat_id).await.unwrap().is_empty());
}
