use crate::domain::value_objects::ThumbnailQuality;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuracion de salida y calidad de miniaturas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub output_file: PathBuf,
    pub sample_file: PathBuf,
    pub thumbnail_quality: ThumbnailQuality,
}

const DEFAULT_OUTPUT_FILE: &str = "config.js";
const DEFAULT_SAMPLE_FILE: &str = "sample-urls.txt";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            sample_file: PathBuf::from(DEFAULT_SAMPLE_FILE),
            thumbnail_quality: ThumbnailQuality::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuracion desde `config/default.toml` si existe.
    /// # Notas
    /// - Si el archivo no existe, usa valores por defecto.
    pub fn load() -> Self {
        let mut config = Self::default();
        let ruta_config = Path::new("config/default.toml");

        if let Ok(contenido) = fs::read_to_string(ruta_config) {
            if let Ok(file_config) = toml::from_str::<FileConfig>(&contenido) {
                if let Some(general) = file_config.general {
                    if let Some(output_file) = general.output_file {
                        config.output_file = expandir_tilde(&output_file);
                    }
                    if let Some(sample_file) = general.sample_file {
                        config.sample_file = expandir_tilde(&sample_file);
                    }
                }
                if let Some(thumbnails) = file_config.thumbnails {
                    if let Some(quality) = thumbnails.quality {
                        config.thumbnail_quality = ThumbnailQuality::parse(&quality);
                    }
                }
            }
        }

        config
    }

    /// Resuelve la ruta de salida efectiva.
    /// # Arguments
    /// - `output_override`: ruta opcional dada por CLI; gana sobre la
    ///   configurada.
    pub fn resolve_output_path(&self, output_override: Option<&str>) -> PathBuf {
        match output_override {
            Some(ruta) => expandir_tilde(ruta),
            None => self.output_file.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    general: Option<GeneralConfig>,
    thumbnails: Option<ThumbnailsConfig>,
}

#[derive(Debug, Deserialize)]
struct GeneralConfig {
    output_file: Option<String>,
    sample_file: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ThumbnailsConfig {
    quality: Option<String>,
}

fn expandir_tilde(ruta: &str) -> PathBuf {
    let ruta_normalizada = ruta.trim();
    if let Some(resto) = ruta_normalizada.strip_prefix("~/") {
        if let Some(home) = obtener_home_dir() {
            return home.join(resto);
        }
    }
    if let Some(resto) = ruta_normalizada.strip_prefix("~\\") {
        if let Some(home) = obtener_home_dir() {
            return home.join(resto);
        }
    }

    PathBuf::from(ruta_normalizada)
}

fn obtener_home_dir() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}
