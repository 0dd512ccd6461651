//! Domain rules for the artist site.
//!
//! Everything in this crate is pure: no I/O, no database access. The API
//! layer calls these functions before it touches the content store.

pub mod embed;
pub mod error;
pub mod persona;
pub mod track;
pub mod types;
pub mod youtube;
