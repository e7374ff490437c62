//! Thin client for the auth API endpoints, keeping paths and response
//! handling out of route code.

use crate::app_lib::{post_json, post_json_response, AppError};
use crate::features::auth::types::{LoginRequest, LoginResponse, RegisterRequest};

/// Exchanges credentials for a session token.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json_response("/api/auth/login", request).await
}

/// Creates a new account. Success carries no session; the caller sends the
/// user to sign-in instead.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    post_json("/api/auth/register", request).await
}
