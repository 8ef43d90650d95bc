pub mod health;
pub mod metrics;
pub mod quiz_scores;
pub mod students;
pub mod swagger;

use actix_web::web;

/// Registers every service route. Expects `web::Data<CredentialStore>` and
/// `web::Data<ScoreLedger>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // Students
        .service(
            web::scope("/api")
                .app_data(students::json_config())
                .route("/signup", web::post().to(students::signup))
                .route("/student-details", web::get().to(students::student_details)),
        )
        // Quiz scores
        .service(
            web::resource("/quizscores")
                .app_data(quiz_scores::json_config())
                .route(web::post().to(quiz_scores::record_score))
                .route(web::get().to(quiz_scores::list_scores)),
        );
}
