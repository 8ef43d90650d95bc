//! In-memory repositories used as test doubles for the services and handlers.

use super::{ScoreRepository, UserRepository};
use crate::models::{Score, ScoreRecord, UserDocument, UserProfile};
use crate::utils::error::AppError;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<UserDocument>>,
    offline: AtomicBool,
}

impl MemoryUserRepository {
    /// Makes every following call fail as if the database were unreachable.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn stored(&self, email: &str) -> Option<UserDocument> {
        let users = self.users.lock().unwrap();
        users.iter().find(|u| u.email == email).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        self.check_online()?;
        Ok(self.stored(email).is_some())
    }

    async fn insert(&self, mut user: UserDocument) -> Result<String, AppError> {
        self.check_online()?;
        let mut users = self.users.lock().unwrap();
        // Mesma garantia do índice único
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateUser);
        }
        let id = ObjectId::new();
        user.id = Some(id);
        users.push(user);
        Ok(id.to_hex())
    }

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<UserProfile>, AppError> {
        self.check_online()?;
        Ok(self.stored(email).map(UserProfile::from))
    }
}

#[derive(Default)]
pub struct MemoryScoreRepository {
    scores: Mutex<Vec<ScoreRecord>>,
    offline: AtomicBool,
}

impl MemoryScoreRepository {
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ScoreRepository for MemoryScoreRepository {
    async fn insert(&self, score: Option<Score>) -> Result<String, AppError> {
        self.check_online()?;
        let id = ObjectId::new().to_hex();
        self.scores.lock().unwrap().push(ScoreRecord {
            id: id.clone(),
            score,
        });
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<ScoreRecord>, AppError> {
        self.check_online()?;
        Ok(self.scores.lock().unwrap().clone())
    }
}
