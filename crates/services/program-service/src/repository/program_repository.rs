//! Program repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::program::{self, ActiveModel, Entity as ProgramEntity};
use super::map_foreign_key_violation;
use common::{AppError, AppResult};
use domain::{NewProgram, Program, ProgramAst};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Program repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Find program by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Program>>;

    /// List every program owned by a user, in no particular order
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Program>>;

    /// Store a new program; its ID is assigned by the database
    async fn create(&self, program: NewProgram) -> AppResult<Program>;

    /// Replace the AST of an existing program
    async fn update_ast(&self, id: Uuid, ast: ProgramAst) -> AppResult<Program>;

    /// Delete program by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProgramRepository
pub struct ProgramStore {
    db: DatabaseConnection,
}

impl ProgramStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: program::Model) -> AppResult<Program> {
    Program::try_from(model).map_err(AppError::from)
}

#[async_trait]
impl ProgramRepository for ProgramStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Program>> {
        let result = ProgramEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(to_domain).transpose()
    }

    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Program>> {
        let models = ProgramEntity::find()
            .filter(program::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(to_domain).collect()
    }

    async fn create(&self, program: NewProgram) -> AppResult<Program> {
        let active_model = ActiveModel {
            id: NotSet,
            ast: Set(program.ast.into_value()),
            user_id: Set(program.user_id),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_foreign_key_violation(e, "Program owner does not exist"))?;
        tracing::debug!(program_id = %model.id, user_id = %model.user_id, "Program stored");
        to_domain(model)
    }

    async fn update_ast(&self, id: Uuid, ast: ProgramAst) -> AppResult<Program> {
        let program = ProgramEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = program.into();
        active.ast = Set(ast.into_value());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        to_domain(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ProgramEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
