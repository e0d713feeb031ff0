//! Service layer - business rules on top of the repositories.

mod program_service;
mod user_service;

pub use program_service::{ProgramManager, ProgramService};
pub use user_service::{UserManager, UserService};
