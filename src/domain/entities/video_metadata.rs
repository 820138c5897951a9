use crate::domain::value_objects::VideoId;

/// Titulo y descripcion obtenidos del endpoint de metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
}

impl VideoMetadata {
    /// Valores de reserva cuando la consulta de metadata falla.
    pub fn fallback(video_id: &VideoId) -> Self {
        Self {
            title: format!("AI Development Tutorial {}", video_id.as_str()),
            description: "Discover AI-powered development techniques and tools.".to_string(),
        }
    }
}
