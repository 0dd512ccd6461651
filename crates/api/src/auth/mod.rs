//! Authentication primitives for the admin panel.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- HS256 access-token generation and validation.
//! - [`lockout`] -- In-memory throttling of failed logins.

pub mod jwt;
pub mod lockout;
pub mod password;

/// Role carried by admin access tokens.
pub const ROLE_ADMIN: &str = "admin";
