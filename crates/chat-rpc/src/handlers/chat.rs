//! `chat_v1.ChatV1` handler

use chat_service::{ChatService, ServiceContext};
use tonic::{Request, Response, Status};
use tracing::info;

use crate::proto::chat_v1::chat_v1_server::ChatV1;
use crate::proto::chat_v1::{
    AddUserToChatRequest, CreateChatRequest, CreateChatResponse, DeleteChatRequest,
    GetMessagesRequest, GetMessagesResponse, SendMessageRequest,
};
use crate::status::RpcError;

/// Implementation of the chat service
#[derive(Debug, Clone)]
pub struct ChatHandler {
    ctx: ServiceContext,
}

impl ChatHandler {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    fn service(&self) -> ChatService<'_> {
        ChatService::new(&self.ctx)
    }
}

#[tonic::async_trait]
impl ChatV1 for ChatHandler {
    async fn create_chat(
        &self,
        request: Request<CreateChatRequest>,
    ) -> Result<Response<CreateChatResponse>, Status> {
        let CreateChatRequest { name } = request.into_inner();
        info!(%name, "Received CreateChat request");

        let id = self
            .service()
            .create_chat(name)
            .await
            .map_err(RpcError::from)?;
        Ok(Response::new(CreateChatResponse { id }))
    }

    async fn delete_chat(
        &self,
        request: Request<DeleteChatRequest>,
    ) -> Result<Response<()>, Status> {
        let DeleteChatRequest { id } = request.into_inner();
        info!(id, "Received DeleteChat request");

        self.service()
            .delete_chat(id)
            .await
            .map_err(RpcError::from)?;
        Ok(Response::new(()))
    }

    async fn add_user_to_chat(
        &self,
        request: Request<AddUserToChatRequest>,
    ) -> Result<Response<()>, Status> {
        let AddUserToChatRequest { user_id, chat_id } = request.into_inner();
        info!(user_id, chat_id, "Received AddUserToChat request");

        self.service()
            .add_user_to_chat(user_id, chat_id)
            .await
            .map_err(RpcError::from)?;
        Ok(Response::new(()))
    }

    async fn send_message(
        &self,
        request: Request<SendMessageRequest>,
    ) -> Result<Response<()>, Status> {
        let SendMessageRequest {
            chat_id,
            sender_id,
            content,
        } = request.into_inner();
        info!(chat_id, sender_id, "Received SendMessage request");

        self.service()
            .send_message(chat_id, sender_id, content)
            .await
            .map_err(RpcError::from)?;
        Ok(Response::new(()))
    }

    async fn get_messages(
        &self,
        request: Request<GetMessagesRequest>,
    ) -> Result<Response<GetMessagesResponse>, Status> {
        let GetMessagesRequest { chat_id } = request.into_inner();
        info!(chat_id, "Received GetMessages request");

        let messages = self
            .service()
            .get_messages(chat_id)
            .await
            .map_err(RpcError::from)?;

        Ok(Response::new(GetMessagesResponse {
            messages: messages.into_iter().map(Into::into).collect(),
        }))
    }
}
