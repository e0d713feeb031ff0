//! Program database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, Program, ProgramAst};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "program")]
pub struct Model {
    /// Generated by the database (`gen_random_uuid()`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ast: Json,
    pub user_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Rows written outside this service may hold any JSON, so the AST is
/// re-validated on the way out.
impl TryFrom<Model> for Program {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Program {
            id: model.id,
            user_id: model.user_id,
            ast: ProgramAst::from_value(model.ast)?,
        })
    }
}
