//! gRPC implementation for UserService.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use super::parse_uuid;
use crate::service::UserService;
use proto::user::{
    user_service_server::UserService as UserServiceProto, CreateUserRequest, DeleteUserRequest,
    DeleteUserResponse, GetUserRequest, UserResponse,
};

/// gRPC service wrapper for UserService.
pub struct UserGrpcService {
    service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl UserServiceProto for UserGrpcService {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .service
            .create_user(req.username)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();
        let id = parse_uuid(&req.id)?;

        let user = self.service.get_user(id).await.map_err(Status::from)?;
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let req = request.into_inner();
        let id = parse_uuid(&req.id)?;

        self.service.delete_user(id).await.map_err(Status::from)?;
        Ok(Response::new(DeleteUserResponse { success: true }))
    }
}

fn user_to_proto(user: &domain::User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        username: user.username.clone(),
        created_at: user.created_at.to_rfc3339(),
    }
}
