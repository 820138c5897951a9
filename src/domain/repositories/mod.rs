pub mod video_metadata_repository;

pub use video_metadata_repository::VideoMetadataRepository;
