//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Programs are user-submitted ASTs; users are the owners programs point at.

pub mod constants;
pub mod error;
pub mod program;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use program::{NewProgram, Program, ProgramAst};
pub use user::User;
