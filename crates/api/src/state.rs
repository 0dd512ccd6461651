use std::sync::Arc;

use crate::auth::lockout::LoginThrottle;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Content store connection pool.
    pub pool: artist_site_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Failed-login tracking for the admin account.
    pub login_throttle: Arc<LoginThrottle>,
}

impl AppState {
    pub fn new(pool: artist_site_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            login_throttle: Arc::new(LoginThrottle::default()),
        }
    }
}
