//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for:
//! - ProgramService: storage of user-submitted program ASTs
//! - UserService: the user records programs belong to

/// Program service definitions.
pub mod program {
    tonic::include_proto!("program");
}

/// User service definitions.
pub mod user {
    tonic::include_proto!("user");
}

// Re-export commonly used items
pub use program::program_service_client::ProgramServiceClient;
pub use program::program_service_server::{ProgramService, ProgramServiceServer};
pub use user::user_service_client::UserServiceClient;
pub use user::user_service_server::{UserService, UserServiceServer};
