use actix_web::{error::InternalError, web, HttpResponse};

use crate::api::metrics;
use crate::models::{RecordScoreRequest, ScoreRecord};
use crate::services::ScoreLedger;

/// A body that cannot be read as a score is answered like a failed save.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        metrics::increment_error_count();
        log::error!("❌ Error saving score: {}", err);
        let response = HttpResponse::InternalServerError().body("Error saving score");
        InternalError::from_response(err, response).into()
    })
}

#[utoipa::path(
    post,
    path = "/quizscores",
    tag = "Quiz Scores",
    request_body = RecordScoreRequest,
    responses(
        (status = 201, description = "Score saved", body = String),
        (status = 500, description = "Error saving score", body = String)
    )
)]
pub async fn record_score(
    ledger: web::Data<ScoreLedger>,
    request: web::Json<RecordScoreRequest>,
) -> HttpResponse {
    log::info!("📝 POST /quizscores - score: {:?}", request.score);

    match ledger.record(request.score).await {
        Ok(id) => {
            metrics::increment_score_count();
            log::debug!("✅ Score stored with id {}", id);
            HttpResponse::Created().body("Score saved successfully!")
        }
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Error saving score: {}", e);
            HttpResponse::InternalServerError().body("Error saving score")
        }
    }
}

#[utoipa::path(
    get,
    path = "/quizscores",
    tag = "Quiz Scores",
    responses(
        (status = 200, description = "Every stored score in insertion order", body = Vec<ScoreRecord>),
        (status = 500, description = "Error fetching scores", body = String)
    )
)]
pub async fn list_scores(ledger: web::Data<ScoreLedger>) -> HttpResponse {
    log::info!("📊 GET /quizscores");

    match ledger.list_all().await {
        Ok(scores) => HttpResponse::Ok().json(scores),
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Error fetching scores: {}", e);
            HttpResponse::InternalServerError().body("Error fetching scores")
        }
    }
}
