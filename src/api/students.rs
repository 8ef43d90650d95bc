use actix_web::{error::InternalError, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::api::metrics;
use crate::models::NewUser;
use crate::services::CredentialStore;
use crate::utils::error::AppError;

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StudentDetailsResponse {
    pub success: bool,
    pub username: String,
    pub email: String,
    #[serde(rename = "parentEmail")]
    pub parent_email: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentQuery {
    /// Exact, case-sensitive email of the student
    pub email: Option<String>,
}

fn error_response(err: &AppError) -> HttpResponse {
    if err.status_code().is_server_error() {
        metrics::increment_error_count();
    }
    HttpResponse::build(err.status_code()).json(serde_json::json!({
        "success": false,
        "message": err.public_message()
    }))
}

/// Ill-typed or malformed signup bodies get the same JSON envelope as any
/// other rejection; serde's parse detail stays in the log.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("❌ Invalid signup body: {}", err);
        let response = error_response(&AppError::Validation("Invalid request body".to_string()));
        InternalError::from_response(err, response).into()
    })
}

#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "Students",
    request_body = NewUser,
    responses(
        (status = 201, description = "User registered", body = SignupResponse),
        (status = 400, description = "Missing field or user already exists", body = SignupResponse),
        (status = 500, description = "Internal Server Error", body = SignupResponse)
    )
)]
pub async fn signup(
    store: web::Data<CredentialStore>,
    request: web::Json<NewUser>,
) -> HttpResponse {
    let request = request.into_inner();
    let email = request.email.clone().unwrap_or_default();
    log::info!("📝 POST /api/signup - email: {}", email);

    match store.register(request).await {
        Ok(_) => {
            metrics::increment_signup_count();
            log::info!("✅ Registration successful: {}", email);
            HttpResponse::Created().json(SignupResponse {
                success: true,
                message: "User registered successfully".to_string(),
            })
        }
        Err(e @ (AppError::DuplicateUser | AppError::Validation(_))) => {
            log::warn!("❌ Registration rejected: {} - {}", email, e);
            error_response(&e)
        }
        Err(e) => {
            log::error!("❌ Error during signup: {}", e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/student-details",
    tag = "Students",
    params(StudentQuery),
    responses(
        (status = 200, description = "Student found", body = StudentDetailsResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn student_details(
    store: web::Data<CredentialStore>,
    query: web::Query<StudentQuery>,
) -> HttpResponse {
    let email = match query.email.as_deref() {
        Some(email) => email,
        None => {
            return error_response(&AppError::Validation(
                "Email query parameter is required".to_string(),
            ))
        }
    };
    log::info!("🔍 GET /api/student-details - email: {}", email);

    match store.lookup_by_email(email).await {
        Ok(profile) => HttpResponse::Ok().json(StudentDetailsResponse {
            success: true,
            username: profile.username,
            email: profile.email,
            parent_email: profile.parent_email,
        }),
        Err(e @ AppError::NotFound(_)) => {
            log::info!("ℹ️  Student not found: {}", email);
            error_response(&e)
        }
        Err(e) => {
            log::error!("❌ Error fetching student details: {}", e);
            error_response(&e)
        }
    }
}
