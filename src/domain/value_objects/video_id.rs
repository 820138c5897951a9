use crate::domain::errors::DomainError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Patrones de URL reconocidos, en orden de prioridad.
/// La captura termina en `&`, salto de linea, `?` o `#`.
static PATRONES_URL: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
            .expect("Failed to compile YouTube URL regex"),
        Regex::new(r"youtube\.com/watch\?.*v=([^&\n?#]+)")
            .expect("Failed to compile YouTube URL regex"),
    ]
});

/// Identificador opaco de video de YouTube.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(String);

impl VideoId {
    /// Crea un identificador de video.
    /// # Arguments
    /// - `id`: token crudo del identificador.
    /// # Errors
    /// - `DomainError::InvalidVideoId` si esta vacio.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into().trim().to_string();

        if id.is_empty() {
            return Err(DomainError::InvalidVideoId(
                "Video ID cannot be empty".to_string(),
            ));
        }

        Ok(Self(id))
    }

    /// Extrae el identificador desde una URL cruda.
    /// Devuelve `None` si ningun patron reconoce la URL. No valida la
    /// forma del token capturado.
    pub fn extraer(url: &str) -> Option<Self> {
        for patron in PATRONES_URL.iter() {
            if let Some(captura) = patron.captures(url).and_then(|c| c.get(1)) {
                return Some(Self(captura.as_str().to_string()));
            }
        }

        None
    }

    /// Devuelve el identificador como `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for VideoId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for VideoId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
