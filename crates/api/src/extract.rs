//! Request extractors whose rejections use the JSON error contract.
//!
//! axum's stock `Json`, `Path` and `Query` reject with plain-text bodies.
//! These wrappers route every rejection through [`AppError`] so clients
//! always receive `{ "error", "code" }`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. A body that parses but does not fit the target type
/// (missing or mistyped field) is a validation error; anything else is a
/// bad request.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters, e.g. a numeric `{id}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
