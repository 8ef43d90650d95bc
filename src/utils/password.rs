use crate::utils::error::AppError;

/// Fator de custo do bcrypt (2^10 rounds)
pub const HASH_COST: u32 = 10;

/// Hashes a password with bcrypt on the blocking pool.
///
/// Each call draws a fresh random salt, so hashing the same password twice
/// yields two different strings. The plaintext is moved into the worker and
/// dropped there.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("Hash task join error: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}
