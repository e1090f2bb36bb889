//! Registration and login handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use quill_core::domain::User;
use quill_core::error::{DomainError, RepoError};
use quill_core::ports::{PasswordService, TokenService};
use quill_shared::dto::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::BadRequest("Password is required".to_string()));
    }

    // Cheap pre-check; the unique constraint below is the real guard.
    if state
        .users
        .find_by_username(&req.username)
        .await?
        .is_some()
    {
        return Err(DomainError::DuplicateUsername.into());
    }

    // Hash password
    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Create user; a concurrent registration of the same username loses
    // here, at the storage layer.
    let user = User::new(req.username, password_hash);
    match state.users.save(user).await {
        Ok(saved) => {
            tracing::info!(username = %saved.username, "User registered");
            Ok(HttpResponse::Created().json(MessageResponse {
                message: "User registered successfully.".to_string(),
            }))
        }
        Err(RepoError::Constraint(_)) => Err(DomainError::DuplicateUsername.into()),
        Err(e) => Err(e.into()),
    }
}

/// POST /login
///
/// Unknown username and wrong password produce the same response so the
/// endpoint cannot be used to enumerate accounts.
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Find user by username
    let user = state
        .users
        .find_by_username(&req.username)
        .await?
        .ok_or(DomainError::InvalidCredentials)?;

    // Verify password
    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(DomainError::InvalidCredentials.into());
    }

    // Generate token
    let token = token_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        expires_in: token_service.expiration_seconds() as u64,
    }))
}
