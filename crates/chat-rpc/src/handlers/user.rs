//! `user_v1.UserV1` handler

use chat_core::entities::UserPatch;
use chat_service::{ServiceContext, UserService};
use tonic::{Request, Response, Status};
use tracing::info;

use crate::proto::user_v1::user_v1_server::UserV1;
use crate::proto::user_v1::{
    CreateRequest, CreateResponse, DeleteRequest, GetRequest, GetResponse, UpdateRequest,
};
use crate::status::RpcError;

/// Implementation of the user directory service
#[derive(Debug, Clone)]
pub struct UserHandler {
    ctx: ServiceContext,
}

impl UserHandler {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    fn service(&self) -> UserService<'_> {
        UserService::new(&self.ctx)
    }
}

#[tonic::async_trait]
impl UserV1 for UserHandler {
    async fn get(&self, request: Request<GetRequest>) -> Result<Response<GetResponse>, Status> {
        let GetRequest { id } = request.into_inner();
        info!(id, "Received Get request");

        let user = self.service().get(id).await.map_err(RpcError::from)?;
        Ok(Response::new(user.into()))
    }

    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        let CreateRequest { name, email, role } = request.into_inner();
        info!(%name, role, "Received Create request");

        let id = self
            .service()
            .create(name, email, role)
            .await
            .map_err(RpcError::from)?;
        Ok(Response::new(CreateResponse { id }))
    }

    async fn update(&self, request: Request<UpdateRequest>) -> Result<Response<()>, Status> {
        let UpdateRequest { id, name, email } = request.into_inner();
        info!(
            id,
            name = name.is_some(),
            email = email.is_some(),
            "Received Update request"
        );

        self.service()
            .update(id, UserPatch { name, email })
            .await
            .map_err(RpcError::from)?;
        Ok(Response::new(()))
    }

    async fn delete(&self, request: Request<DeleteRequest>) -> Result<Response<()>, Status> {
        let DeleteRequest { id } = request.into_inner();
        info!(id, "Received Delete request");

        self.service().delete(id).await.map_err(RpcError::from)?;
        Ok(Response::new(()))
    }
}
