// src/handlers/auth.rs

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    config::Config,
    engine::QuizEngine,
    error::AppError,
    models::user::{CredentialsRequest, LoginResponse, RegisteredResponse},
    utils::jwt::sign_jwt,
};

/// Registers a new user.
///
/// Returns 201 Created, or 409 Conflict if the username is taken.
pub async fn register(
    State(engine): State<Arc<QuizEngine>>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    if !engine.register_user(&payload.username, &payload.password) {
        return Err(AppError::Conflict(format!(
            "Username '{}' already exists",
            payload.username
        )));
    }

    Ok((
        StatusCode::CREATED,
        Json(RegisteredResponse {
            username: payload.username,
        }),
    ))
}

/// Checks the credentials and returns a JWT carrying the username.
pub async fn login(
    State(engine): State<Arc<QuizEngine>>,
    State(config): State<Config>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !engine.validate_user(&payload.username, &payload.password) {
        tracing::debug!(username = %payload.username, "Login rejected");
        return Err(AppError::AuthError("Invalid credentials".to_string()));
    }

    let token = sign_jwt(&payload.username, &config.jwt_secret, config.jwt_expiration)?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer",
    }))
}
