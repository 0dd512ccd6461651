//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod site_setting_repo;
pub mod track_repo;
pub mod youtube_video_repo;

pub use site_setting_repo::SiteSettingsRepo;
pub use track_repo::TrackRepo;
pub use youtube_video_repo::YoutubeVideoRepo;
