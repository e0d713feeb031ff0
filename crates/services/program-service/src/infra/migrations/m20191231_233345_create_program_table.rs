//! Migration: Create the program table holding user ASTs.

use sea_orm_migration::prelude::*;

pub const FK_PROGRAM_USER: &str = "fk_program_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Program::Table)
                    .col(
                        ColumnDef::new(Program::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Program::Ast).json().not_null())
                    .col(ColumnDef::new(Program::UserId).uuid().not_null())
                    // No ON DELETE rule: a user who still owns programs cannot be removed
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROGRAM_USER)
                            .from(Program::Table, Program::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Program::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Program {
    Table,
    Id,
    Ast,
    UserId,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
