//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH};
use crate::error::{DomainError, DomainResult};

/// User domain entity.
///
/// Only the columns programs need to reference their owner are modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Normalize and validate a username before it is stored.
    pub fn validate_username(raw: &str) -> DomainResult<String> {
        let name = raw.trim();
        let len = name.chars().count();
        if len < MIN_USERNAME_LENGTH {
            return Err(DomainError::validation("Username must not be empty"));
        }
        if len > MAX_USERNAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Username must be at most {} characters",
                MAX_USERNAME_LENGTH
            )));
        }
        Ok(name.to_string())
    }
}
