use crate::domain::entities::VideoMetadata;
use crate::domain::value_objects::VideoId;
use async_trait::async_trait;

/// Contrato para consultar metadata de videos.
#[async_trait]
pub trait VideoMetadataRepository: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Obtiene titulo y descripcion para un video.
    /// # Arguments
    /// - `video_id`: identificador extraido de la URL.
    /// # Errors
    /// - `Self::Error` si falla la consulta; el llamador decide los
    ///   valores de reserva.
    async fn fetch_metadata(&self, video_id: &VideoId) -> Result<VideoMetadata, Self::Error>;
}
