use super::{classify_error, is_duplicate_key, MongoDB, USERS_COLLECTION};
use crate::models::{UserDocument, UserProfile};
use crate::utils::error::AppError;
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

/// Persistence for the `users` collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// Inserts a user and returns its id. A second user with the same email
    /// must fail with `AppError::DuplicateUser`, even when the caller's own
    /// existence check raced with another insert.
    async fn insert(&self, user: UserDocument) -> Result<String, AppError>;

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, AppError>;
}

pub struct MongoUserRepository {
    users: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let found = self
            .users
            .clone_with_type::<Document>()
            .find_one(doc! { "email": email })
            .projection(doc! { "_id": 1 })
            .await
            .map_err(classify_error)?;

        Ok(found.is_some())
    }

    async fn insert(&self, user: UserDocument) -> Result<String, AppError> {
        let result = self.users.insert_one(user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::DuplicateUser
            } else {
                classify_error(e)
            }
        })?;

        Ok(result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_default())
    }

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, AppError> {
        self.users
            .clone_with_type::<UserProfile>()
            .find_one(doc! { "email": email })
            .projection(doc! { "_id": 0, "password": 0 })
            .await
            .map_err(classify_error)
    }
}
