pub mod auth;
pub mod landing;
pub mod settings;
pub mod track;
pub mod youtube_video;
