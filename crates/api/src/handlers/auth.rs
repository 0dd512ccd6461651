//! Handlers for the `/auth` resource (admin login and session check).

use artist_site_core::error::CoreError;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::auth::ROLE_ADMIN;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Response for `GET /auth/session`: who the token belongs to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub username: String,
    pub role: String,
    /// Token expiry as a UTC Unix timestamp.
    pub expires_at: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate the admin with username + password and return an access token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = &state.config.admin;
    let is_admin = input.username == admin.username;

    // 1. Refuse the admin account outright while it is locked. Other
    //    usernames fall through to the generic failure below.
    if is_admin && state.login_throttle.is_locked() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is temporarily locked. Try again later.".into(),
        )));
    }

    // 2. Verify the password. It is checked even for an unknown username so
    //    both failures take the same time.
    let password_ok = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !is_admin {
        tracing::info!(username = %input.username, "Login attempt for unknown user");
        return Err(invalid_credentials());
    }

    if !password_ok {
        // 3. Only failures against the admin account count towards the lock.
        if state.login_throttle.record_failure() {
            tracing::warn!(
                username = %admin.username,
                "Admin login locked after repeated failures",
            );
        } else {
            tracing::info!(username = %admin.username, "Failed admin login");
        }
        return Err(invalid_credentials());
    }

    // 4. Issue the token.
    state.login_throttle.record_success();
    let access_token = generate_access_token(&admin.username, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %admin.username, "Admin logged in");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.expires_in_secs(),
    }))
}

/// GET /api/v1/auth/session
///
/// Lets the admin panel's login gate ask the server whether its stored
/// token is still good.
pub async fn session(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<SessionInfo>> {
    Ok(Json(SessionInfo {
        username: admin.username,
        role: admin.role,
        expires_at: admin.expires_at,
    }))
}
