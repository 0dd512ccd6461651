use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`: `GET /` and `PUT /`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(settings::get).put(settings::update))
}
