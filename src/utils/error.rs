use actix_web::http::StatusCode;
use std::fmt;

pub const GENERIC_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Campo obrigatório ausente ou vazio
    Validation(String),
    DuplicateUser,
    NotFound(String),
    /// Banco inacessível (rede, seleção de servidor, pool)
    StoreUnavailable(String),
    DatabaseError(String),
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::DuplicateUser => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) | AppError::DatabaseError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to hand back to a client. Server-side failures collapse
    /// into a generic message so driver output never reaches the response.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::DuplicateUser => "User already exists".to_string(),
            AppError::NotFound(msg) => msg.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::DuplicateUser => write!(f, "Duplicate user: email already registered"),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_4xx() {
        assert_eq!(AppError::DuplicateUser.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation("Email is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Student not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_server_errors_hide_details() {
        let errors = [
            AppError::StoreUnavailable("connection refused at 10.0.0.3:27017".into()),
            AppError::DatabaseError("E11001 something internal".into()),
            AppError::Internal("bcrypt failure".into()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);
        }
    }
}
