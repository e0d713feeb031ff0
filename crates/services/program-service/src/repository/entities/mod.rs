//! SeaORM entities mirroring the migrated schema.

pub mod program;
pub mod user;
