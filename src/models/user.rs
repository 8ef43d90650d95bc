use crate::utils::error::AppError;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signup payload. Fields are optional so a missing field surfaces as a
/// validation error instead of a deserialization failure.
#[derive(Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct NewUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "parentEmail")]
    pub parent_email: Option<String>,
}

// Nunca imprimir a senha em logs
impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("parent_email", &self.parent_email)
            .finish()
    }
}

/// A signup payload that passed validation. Owns the plaintext password
/// until it is handed to the hasher.
pub struct ValidatedUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub parent_email: Option<String>,
}

impl NewUser {
    pub fn validate(self) -> Result<ValidatedUser, AppError> {
        let username = required(self.username, "Username")?;
        let email = required(self.email, "Email")?;
        let password = required(self.password, "Password")?;

        Ok(ValidatedUser {
            username,
            email,
            password,
            parent_email: self.parent_email,
        })
    }
}

/// Absent and empty strings fail; any other text, whitespace included, passes.
fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Stored shape of a user. `password` always holds a bcrypt hash.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "parentEmail", skip_serializing_if = "Option::is_none")]
    pub parent_email: Option<String>,
}

/// Read-only projection returned by lookups. Has no password field.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(rename = "parentEmail", default)]
    pub parent_email: Option<String>,
}

impl From<UserDocument> for UserProfile {
    fn from(user: UserDocument) -> Self {
        Self {
            username: user.username,
            email: user.email,
            parent_email: user.parent_email,
        }
    }
}
