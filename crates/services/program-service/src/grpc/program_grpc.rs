//! gRPC implementation for ProgramService.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use super::parse_uuid;
use crate::service::ProgramService;
use proto::program::{
    program_service_server::ProgramService as ProgramServiceProto, CreateProgramRequest,
    DeleteProgramRequest, DeleteProgramResponse, GetProgramRequest, ListProgramsRequest,
    ListProgramsResponse, ProgramResponse, UpdateProgramRequest,
};

/// gRPC service wrapper for ProgramService.
pub struct ProgramGrpcService {
    service: Arc<dyn ProgramService>,
}

impl ProgramGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn ProgramService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl ProgramServiceProto for ProgramGrpcService {
    async fn create_program(
        &self,
        request: Request<CreateProgramRequest>,
    ) -> Result<Response<ProgramResponse>, Status> {
        let req = request.into_inner();
        let user_id = parse_uuid(&req.user_id)?;

        let program = self
            .service
            .create_program(user_id, &req.ast)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(program_to_proto(&program)))
    }

    async fn get_program(
        &self,
        request: Request<GetProgramRequest>,
    ) -> Result<Response<ProgramResponse>, Status> {
        let req = request.into_inner();
        let id = parse_uuid(&req.id)?;

        let program = self.service.get_program(id).await.map_err(Status::from)?;
        Ok(Response::new(program_to_proto(&program)))
    }

    async fn list_programs(
        &self,
        request: Request<ListProgramsRequest>,
    ) -> Result<Response<ListProgramsResponse>, Status> {
        let req = request.into_inner();
        let user_id = parse_uuid(&req.user_id)?;

        let programs = self
            .service
            .list_programs(user_id)
            .await
            .map_err(Status::from)?;
        let total = saturating_total(programs.len());
        let programs: Vec<ProgramResponse> = programs.iter().map(program_to_proto).collect();

        Ok(Response::new(ListProgramsResponse { programs, total }))
    }

    async fn update_program(
        &self,
        request: Request<UpdateProgramRequest>,
    ) -> Result<Response<ProgramResponse>, Status> {
        let req = request.into_inner();
        let id = parse_uuid(&req.id)?;

        let program = self
            .service
            .update_program(id, &req.ast)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(program_to_proto(&program)))
    }

    async fn delete_program(
        &self,
        request: Request<DeleteProgramRequest>,
    ) -> Result<Response<DeleteProgramResponse>, Status> {
        let req = request.into_inner();
        let id = parse_uuid(&req.id)?;

        self.service.delete_program(id).await.map_err(Status::from)?;
        Ok(Response::new(DeleteProgramResponse { success: true }))
    }
}

/// Protobuf `int32` total; counts past `i32::MAX` saturate.
fn saturating_total(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Convert domain Program to proto ProgramResponse (AST as JSON text).
fn program_to_proto(program: &domain::Program) -> ProgramResponse {
    ProgramResponse {
        id: program.id.to_string(),
        user_id: program.user_id.to_string(),
        ast: program.ast.to_json_string(),
    }
}
