//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};
use tracing::info;

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::User;
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::shared::errors::DomainError;
use crate::shared::validations::validate_password_strength;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt_config: JwtConfig,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let user = state
        .repos
        .users()
        .find_by_username(&request.username)
        .await
        .map_err(error_response)?;

    // Same message for unknown user and bad password.
    let Some(user) = user else {
        return Err(error_response(DomainError::Unauthorized(
            "Invalid username or password".to_string(),
        )));
    };

    let password_valid = verify_password(&request.password, &user.password_hash).unwrap_or(false);
    if !password_valid {
        return Err(error_response(DomainError::Unauthorized(
            "Invalid username or password".to_string(),
        )));
    }

    let token = create_token(&user.id, &user.username, &state.jwt_config)
        .map_err(|e| error_response(DomainError::Store(e.to_string())))?;

    info!(username = %user.username, "Operator logged in");

    let response = LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_config.expiration_hours * 3600,
        user: user.into(),
    };

    Ok(Json(ApiResponse::success(response)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserInfo>),
        (status = 400, description = "Password policy violation or duplicate username")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserInfo>>), (StatusCode, Json<ApiResponse<()>>)> {
    if let Err(policy) = validate_password_strength(&request.password) {
        return Err(error_response(DomainError::Validation(policy)));
    }

    let password_hash = hash_password(&request.password)
        .map_err(|e| error_response(DomainError::Store(e.to_string())))?;

    let created = state
        .repos
        .users()
        .create(User::new(request.username, password_hash))
        .await
        .map_err(error_response)?;

    info!(username = %created.username, "Operator account created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user info", body = ApiResponse<UserInfo>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<ApiResponse<UserInfo>>, (StatusCode, Json<ApiResponse<()>>)> {
    let Some(Extension(user)) = user else {
        return Err(error_response(DomainError::Unauthorized(
            "Not authenticated".to_string(),
        )));
    };

    let account = state
        .repos
        .users()
        .find_by_id(&user.user_id)
        .await
        .map_err(error_response)?;

    let Some(account) = account else {
        return Err(error_response(DomainError::not_found(
            "User",
            "id",
            user.user_id,
        )));
    };

    Ok(Json(ApiResponse::success(account.into())))
}
