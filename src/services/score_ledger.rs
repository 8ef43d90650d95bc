use crate::{
    database::ScoreRepository,
    models::{Score, ScoreRecord},
    utils::error::AppError,
};
use std::sync::Arc;

/// Append-only store of quiz scores. Records are independent and not tied
/// to any user.
#[derive(Clone)]
pub struct ScoreLedger {
    scores: Arc<dyn ScoreRepository>,
}

impl ScoreLedger {
    pub fn new(scores: Arc<dyn ScoreRepository>) -> Self {
        Self { scores }
    }

    pub async fn record(&self, score: Option<Score>) -> Result<String, AppError> {
        self.scores.insert(score).await
    }

    pub async fn list_all(&self) -> Result<Vec<ScoreRecord>, AppError> {
        self.scores.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryScoreRepository;

    #[tokio::test]
    async fn test_records_keep_insertion_order() {
        let ledger = ScoreLedger::new(Arc::new(MemoryScoreRepository::default()));

        ledger.record(Some(Score::Int(87))).await.unwrap();
        ledger.record(Some(Score::Int(42))).await.unwrap();

        let scores: Vec<Option<Score>> = ledger
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.score)
            .collect();
        assert_eq!(scores, vec![Some(Score::Int(87)), Some(Score::Int(42))]);
    }

    #[tokio::test]
    async fn test_each_record_adds_exactly_one_entry() {
        let ledger = ScoreLedger::new(Arc::new(MemoryScoreRepository::default()));

        let submitted = [
            Score::Int(0),
            Score::Float(-3.5),
            Score::Int(87),
            Score::Int(87),
            Score::Float(1e9),
        ];
        for (i, score) in submitted.into_iter().enumerate() {
            let id = ledger.record(Some(score)).await.unwrap();
            let all = ledger.list_all().await.unwrap();

            assert_eq!(all.len(), i + 1);
            assert!(all.iter().any(|r| r.id == id && r.score == Some(score)));
        }
    }

    #[tokio::test]
    async fn test_outage_is_surfaced() {
        let repo = Arc::new(MemoryScoreRepository::default());
        let ledger = ScoreLedger::new(repo.clone());
        repo.go_offline();

        assert!(matches!(ledger.record(Some(Score::Int(1))).await, Err(AppError::StoreUnavailable(_))));
        assert!(matches!(ledger.list_all().await, Err(AppError::StoreUnavailable(_))));
    }
}
