pub mod thumbnail_quality;
pub mod video_id;

pub use thumbnail_quality::ThumbnailQuality;
pub use video_id::VideoId;
