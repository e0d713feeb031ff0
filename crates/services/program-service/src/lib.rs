//! Program Service Library
//!
//! Stores user-submitted program ASTs in Postgres and serves them via gRPC.
//! The schema is owned here: see [`infra::migrations`].

pub mod config;
pub mod grpc;
pub mod infra;
pub mod queen;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use crate::config::ProgramServiceConfig;
use crate::grpc::{ProgramGrpcService, UserGrpcService};
use crate::infra::Database;
use crate::queen::QueenLink;
use crate::repository::{ProgramStore, UserStore};
use crate::service::{ProgramManager, UserManager};

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &ProgramServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.cao.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the gRPC server until ctrl-c.
pub async fn run_server(config: ProgramServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let queen = QueenLink::new(&config.cao.queen)?;

    // Initialize database
    let db = Database::connect(&config.cao.database).await?;
    db.ping().await?;
    let db_conn = db.get_connection();

    // Create repositories and services
    let user_repo = Arc::new(UserStore::new(db_conn.clone()));
    let program_repo = Arc::new(ProgramStore::new(db_conn));
    let user_service = Arc::new(UserManager::new(user_repo.clone()));
    let program_service = Arc::new(ProgramManager::new(program_repo, user_repo));

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!(queen = %queen.uri(), tag = %queen.tag(), "Program service listening on {}", addr);

    Server::builder()
        .add_service(proto::ProgramServiceServer::new(ProgramGrpcService::new(
            program_service,
        )))
        .add_service(proto::UserServiceServer::new(UserGrpcService::new(
            user_service,
        )))
        .serve_with_shutdown(addr, async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        })
        .await?;

    Ok(())
}
