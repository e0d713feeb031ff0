//! Upgrading and downgrading the program migration leaves the schema untouched.

mod support;

use sea_orm_migration::{MigratorTrait, SchemaManager};

use program_service_lib::infra::Migrator;

#[tokio::test]
async fn program_migration_round_trip() {
    let Some(db) = support::connect().await else {
        return;
    };

    Migrator::reset(&db).await.expect("reset schema");

    // Baseline: only the user table
    Migrator::up(&db, Some(1)).await.expect("apply user migration");
    let manager = SchemaManager::new(&db);
    assert!(manager.has_table("user").await.unwrap());
    assert!(!manager.has_table("program").await.unwrap());
    let before = support::schema_snapshot(&db).await;

    Migrator::up(&db, Some(1)).await.expect("apply program migration");
    assert!(manager.has_table("program").await.unwrap());
    assert!(manager.has_column("program", "ast").await.unwrap());
    assert!(manager.has_column("program", "user_id").await.unwrap());
    let upgraded = support::schema_snapshot(&db).await;
    assert!(upgraded.contains(&"program.ast json NO".to_string()));
    assert!(upgraded.contains(&"program.id uuid NO".to_string()));

    Migrator::down(&db, Some(1)).await.expect("revert program migration");
    let after = support::schema_snapshot(&db).await;

    assert_eq!(before, after);

    Migrator::reset(&db).await.expect("clean up");
}
