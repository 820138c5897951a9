use crate::domain::entities::VideoMetadata;
use crate::domain::repositories::VideoMetadataRepository;
use crate::domain::value_objects::VideoId;
use crate::infrastructure::InfrastructureError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";
const HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: Option<String>,
    author_name: Option<String>,
}

/// Cliente HTTP para consultar metadata de videos via el endpoint oEmbed.
#[derive(Clone)]
pub struct YoutubeClient {
    client: Client,
    base_url: String,
}

impl YoutubeClient {
    /// Crea un cliente listo para operar con la API publica.
    /// # Errors
    /// - `InfrastructureError::ExternalService` si falla la configuracion HTTP.
    pub fn new() -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                InfrastructureError::ExternalService(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: "https://www.youtube.com".to_string(),
        })
    }
}

#[async_trait]
impl VideoMetadataRepository for YoutubeClient {
    type Error = InfrastructureError;

    async fn fetch_metadata(
        &self,
        video_id: &VideoId,
    ) -> Result<VideoMetadata, InfrastructureError> {
        let url = format!(
            "{}/oembed?url=https://www.youtube.com/watch?v={}&format=json",
            self.base_url,
            video_id.as_str()
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            InfrastructureError::ExternalService(format!("HTTP request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::ExternalService(format!(
                "HTTP request failed with status: {}",
                status
            )));
        }

        let oembed: OembedResponse = response.json().await.map_err(|e| {
            InfrastructureError::ExternalService(format!("Failed to parse response: {}", e))
        })?;

        let title = oembed
            .title
            .unwrap_or_else(|| format!("YouTube Video {}", video_id.as_str()));
        let author = oembed.author_name.unwrap_or_else(|| "Unknown".to_string());
        let description = construir_descripcion(&author, &title);

        Ok(VideoMetadata { title, description })
    }
}

fn construir_descripcion(autor: &str, titulo: &str) -> String {
    format!(
        "Learn from {}'s tutorial on {}. Master AI-powered development techniques.",
        autor,
        titulo.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construye_descripcion_con_titulo_en_minusculas() {
        let descripcion = construir_descripcion("Ada", "Rust Para Todos");
        assert_eq!(
            descripcion,
            "Learn from Ada's tutorial on rust para todos. Master AI-powered development techniques."
        );
    }

    #[test]
    fn deserializa_respuesta_oembed_completa() {
        let json = r#"{"title": "Mi Video", "author_name": "Ada", "provider_name": "YouTube"}"#;
        let oembed: OembedResponse = serde_json::from_str(json).expect("parse failed");
        assert_eq!(oembed.title.as_deref(), Some("Mi Video"));
        assert_eq!(oembed.author_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn deserializa_respuesta_oembed_sin_autor() {
        let json = r#"{"title": "Mi Video"}"#;
        let oembed: OembedResponse = serde_json::from_str(json).expect("parse failed");
        assert!(oembed.author_name.is_none());
    }
}
