//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the landing page (`?persona=`).
///
/// Kept as a raw string so an unknown persona is reported as a validation
/// error rather than a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PersonaParams {
    pub persona: Option<String>,
}
