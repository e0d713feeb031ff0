//! Program service - Handles storage of user-submitted ASTs.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{NewProgram, Program, ProgramAst};

use crate::repository::{ProgramRepository, UserRepository};

/// Program service trait for dependency injection.
#[async_trait]
pub trait ProgramService: Send + Sync {
    /// Validate an AST and store it for an existing user
    async fn create_program(&self, user_id: Uuid, ast_json: &str) -> AppResult<Program>;

    /// Get program by ID
    async fn get_program(&self, id: Uuid) -> AppResult<Program>;

    /// List the programs of an existing user
    async fn list_programs(&self, user_id: Uuid) -> AppResult<Vec<Program>>;

    /// Replace the AST of a program
    async fn update_program(&self, id: Uuid, ast_json: &str) -> AppResult<Program>;

    /// Delete a program
    async fn delete_program(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProgramService using repositories.
pub struct ProgramManager {
    programs: Arc<dyn ProgramRepository>,
    users: Arc<dyn UserRepository>,
}

impl ProgramManager {
    /// Create new program service instance with repositories
    pub fn new(programs: Arc<dyn ProgramRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { programs, users }
    }

    async fn ensure_user_exists(&self, user_id: Uuid) -> AppResult<()> {
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => {
                tracing::debug!(%user_id, "Unknown program owner");
                Err(AppError::NotFound)
            }
        }
    }
}

#[async_trait]
impl ProgramService for ProgramManager {
    async fn create_program(&self, user_id: Uuid, ast_json: &str) -> AppResult<Program> {
        let ast = ProgramAst::parse(ast_json)?;
        self.ensure_user_exists(user_id).await?;

        let program = self.programs.create(NewProgram { user_id, ast }).await?;
        tracing::info!(program_id = %program.id, %user_id, "Program created");
        Ok(program)
    }

    async fn get_program(&self, id: Uuid) -> AppResult<Program> {
        self.programs
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_programs(&self, user_id: Uuid) -> AppResult<Vec<Program>> {
        self.ensure_user_exists(user_id).await?;
        self.programs.list_by_user(user_id).await
    }

    async fn update_program(&self, id: Uuid, ast_json: &str) -> AppResult<Program> {
        let ast = ProgramAst::parse(ast_json)?;
        self.programs.update_ast(id, ast).await
    }

    async fn delete_program(&self, id: Uuid) -> AppResult<()> {
        self.programs.delete(id).await?;
        tracing::info!(program_id = %id, "Program deleted");
        Ok(())
    }
}
