//! User service - the owners programs belong to.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Register a new user under a unique username
    async fn create_user(&self, username: String) -> AppResult<User>;

    /// Delete a user who owns no programs
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_user(&self, username: String) -> AppResult<User> {
        let username = User::validate_username(&username)?;

        if self.repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("Username"));
        }

        let user = self.repo.create(username).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::MockUserRepository;

    fn test_user(id: Uuid, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_user_trims_and_stores() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .withf(|name| name == "hive")
            .returning(|_| Ok(None));
        repo.expect_create()
            .with(eq("hive".to_string()))
            .returning(|name| Ok(test_user(Uuid::new_v4(), &name)));

        let service = UserManager::new(Arc::new(repo));
        let user = service.create_user("  hive ".to_string()).await.unwrap();

        assert_eq!(user.username, "hive");
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|name| Ok(Some(test_user(Uuid::new_v4(), name))));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user("hive".to_string()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_user_surfaces_store_conflict() {
        // Another request took the name between the lookup and the insert
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_| Err(AppError::conflict("Username")));

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user("hive".to_string()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_user_rejects_blank_name() {
        let repo = MockUserRepository::new();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user("   ".to_string()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
