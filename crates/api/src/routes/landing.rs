use axum::routing::get;
use axum::Router;

use crate::handlers::landing;
use crate::state::AppState;

/// Routes mounted at `/landing`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(landing::get))
}
