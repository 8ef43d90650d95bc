use crate::{
    database::UserRepository,
    models::{NewUser, UserDocument, UserProfile},
    utils::{error::AppError, password},
};
use std::sync::Arc;

/// Owns the user lifecycle: validation, email uniqueness and password hashing.
/// Nothing else writes to the users collection.
#[derive(Clone)]
pub struct CredentialStore {
    users: Arc<dyn UserRepository>,
    hash_cost: u32,
}

impl CredentialStore {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            hash_cost: password::HASH_COST,
        }
    }

    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// Validate, reject known duplicates, hash, then persist.
    ///
    /// The pre-check only saves a hash computation on the common path; the
    /// unique index behind `UserRepository::insert` decides races.
    pub async fn register(&self, request: NewUser) -> Result<String, AppError> {
        let user = request.validate()?;

        if self.users.exists_by_email(&user.email).await? {
            return Err(AppError::DuplicateUser);
        }

        let hashed = password::hash_password(user.password, self.hash_cost).await?;

        let document = UserDocument {
            id: None,
            username: user.username,
            email: user.email,
            password: hashed,
            parent_email: user.parent_email,
        };

        let id = self.users.insert(document).await?;
        log::debug!("👤 User stored with id {}", id);

        Ok(id)
    }

    pub async fn lookup_by_email(&self, email: &str) -> Result<UserProfile, AppError> {
        self.users
            .find_profile_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }
}
