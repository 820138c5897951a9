use crate::domain::value_objects::VideoId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calidad de miniatura de YouTube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    MaxResDefault,
    HqDefault,
    MqDefault,
    SdDefault,
}

impl ThumbnailQuality {
    /// Interpreta un nombre de calidad. Un nombre desconocido cae en
    /// `maxresdefault`.
    pub fn parse(nombre: &str) -> Self {
        match nombre.trim().to_lowercase().as_str() {
            "maxresdefault" => Self::MaxResDefault,
            "hqdefault" => Self::HqDefault,
            "mqdefault" => Self::MqDefault,
            "sddefault" => Self::SdDefault,
            _ => Self::MaxResDefault,
        }
    }

    /// Devuelve el nombre de la calidad como `&str`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MaxResDefault => "maxresdefault",
            Self::HqDefault => "hqdefault",
            Self::MqDefault => "mqdefault",
            Self::SdDefault => "sddefault",
        }
    }

    /// Construye la URL directa de la miniatura. Sin acceso a red.
    pub fn thumbnail_url(&self, video_id: &VideoId) -> String {
        format!(
            "https://img.youtube.com/vi/{}/{}.jpg",
            video_id.as_str(),
            self.as_str()
        )
    }
}

impl Default for ThumbnailQuality {
    fn default() -> Self {
        Self::MaxResDefault
    }
}

impl fmt::Display for ThumbnailQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
