//! Row structs and request DTOs.
//!
//! Each submodule holds a `FromRow` + `Serialize` entity matching a table
//! and the `Deserialize` DTOs the admin surface submits for it. JSON field
//! names are camelCase to match the frontend.

pub mod site_setting;
pub mod track;
pub mod youtube_video;
