//! gRPC transport layer.

mod program_grpc;
mod user_grpc;

pub use program_grpc::ProgramGrpcService;
pub use user_grpc::UserGrpcService;

use tonic::Status;
use uuid::Uuid;

/// Parse UUID from string.
pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, Status> {
    Uuid::parse_str(s).map_err(|_| Status::invalid_argument("Invalid UUID format"))
}
