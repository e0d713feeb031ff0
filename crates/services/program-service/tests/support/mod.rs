#![allow(dead_code)]

//! Helpers for tests that need a disposable Postgres database.

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, Statement};

use common::DatabaseConfig;

/// Variable naming a database the tests may wipe.
pub const TEST_DATABASE_URL_VAR: &str = "TEST_DATABASE_URL";

/// Pool settings for the test database, or `None` when it is not configured.
pub fn database_config() -> Option<DatabaseConfig> {
    match std::env::var(TEST_DATABASE_URL_VAR) {
        Ok(url) => Some(DatabaseConfig {
            url,
            max_connections: 2,
            min_connections: 1,
        }),
        Err(_) => {
            eprintln!("{} not set - skipping database test", TEST_DATABASE_URL_VAR);
            None
        }
    }
}

/// Connect to the test database, or `None` when it is not configured.
pub async fn connect() -> Option<DatabaseConnection> {
    let config = database_config()?;
    Some(
        SeaDatabase::connect(config.url)
            .await
            .expect("connect to test database"),
    )
}

/// Every column of every table in the public schema, sorted.
pub async fn schema_snapshot(db: &DatabaseConnection) -> Vec<String> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            "SELECT table_name, column_name, data_type, is_nullable \
             FROM information_schema.columns \
             WHERE table_schema = 'public' \
             ORDER BY table_name, column_name"
                .to_string(),
        ))
        .await
        .expect("query information_schema");

    rows.iter()
        .map(|row| {
            let table: String = row.try_get("", "table_name").unwrap();
            let column: String = row.try_get("", "column_name").unwrap();
            let data_type: String = row.try_get("", "data_type").unwrap();
            let nullable: String = row.try_get("", "is_nullable").unwrap();
            format!("{}.{} {} {}", table, column, data_type, nullable)
        })
        .collect()
}
