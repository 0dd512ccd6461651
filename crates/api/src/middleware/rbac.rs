//! Role-based access control extractors.

use artist_site_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::ROLE_ADMIN;
use crate::error::AppError;
use crate::state::AppState;
use super::auth::AuthUser;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// Every content mutation takes this extractor:
///
/// ```ignore
/// async fn delete(RequireAdmin(admin): RequireAdmin, ...) -> AppResult<StatusCode> {
///     // admin is guaranteed to hold a valid admin token here
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
