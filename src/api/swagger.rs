use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Portal API",
        version = "1.0.0",
        description = "Student registration, student lookup and quiz score storage.\n\n**Note:** there is no login endpoint; passwords are only ever stored as bcrypt hashes and are never returned."
    ),
    paths(
        // Students
        crate::api::students::signup,
        crate::api::students::student_details,

        // Quiz scores
        crate::api::quiz_scores::record_score,
        crate::api::quiz_scores::list_scores,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::NewUser,
            crate::models::RecordScoreRequest,
            crate::models::ScoreRecord,
            crate::api::students::SignupResponse,
            crate::api::students::StudentDetailsResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Students", description = "Registration and student detail lookup."),
        (name = "Quiz Scores", description = "Anonymous quiz score submission and listing."),
        (name = "Health", description = "Health check and process counters."),
    )
)]
pub struct ApiDoc;
