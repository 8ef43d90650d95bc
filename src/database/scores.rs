use super::{classify_error, MongoDB, SCORES_COLLECTION};
use crate::models::{QuizScoreDocument, Score, ScoreRecord};
use crate::utils::error::AppError;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;

/// Persistence for the `quizscores` collection.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn insert(&self, score: Option<Score>) -> Result<String, AppError>;

    /// Every stored record in the store's natural order.
    async fn find_all(&self) -> Result<Vec<ScoreRecord>, AppError>;
}

pub struct MongoScoreRepository {
    scores: Collection<QuizScoreDocument>,
}

impl MongoScoreRepository {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            scores: db.collection(SCORES_COLLECTION),
        }
    }
}

#[async_trait]
impl ScoreRepository for MongoScoreRepository {
    async fn insert(&self, score: Option<Score>) -> Result<String, AppError> {
        let result = self
            .scores
            .insert_one(QuizScoreDocument { id: None, score })
            .await
            .map_err(classify_error)?;

        Ok(result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_default())
    }

    async fn find_all(&self) -> Result<Vec<ScoreRecord>, AppError> {
        let cursor = self.scores.find(doc! {}).await.map_err(classify_error)?;

        let docs: Vec<QuizScoreDocument> = cursor.try_collect().await.map_err(classify_error)?;

        Ok(docs.into_iter().map(ScoreRecord::from).collect())
    }
}
