use crate::domain::entities::VideoRecord;
use crate::infrastructure::InfrastructureError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

const ENCABEZADO_CONFIG: &str = "\
// Video Configuration
// Generated automatically from YouTube URLs
// Add your YouTube video IDs and details here
const videoConfig = ";

const PIE_CONFIG: &str = ";

// Export for use in other scripts
if (typeof module !== 'undefined' && module.exports) {
    module.exports = videoConfig;
}";

const CONTENIDO_EJEMPLO: &str = "\
# YouTube URLs for AI-Assisted Engineering
# Add one URL per line, comments start with #

# Example URLs (replace with your actual videos):
https://www.youtube.com/watch?v=dQw4w9WgXcQ
https://youtu.be/dQw4w9WgXcQ
https://www.youtube.com/watch?v=dQw4w9WgXcQ

# You can also add comments to organize your videos:
# GitHub Copilot tutorials:
https://www.youtube.com/watch?v=dQw4w9WgXcQ

# Windsurf IDE tutorials:
https://www.youtube.com/watch?v=dQw4w9WgXcQ
";

/// Renderiza el documento config.js completo.
/// El JSON va con sangria de 4 espacios y sin escapar caracteres
/// no ASCII.
pub fn renderizar_config_js(videos: &[VideoRecord]) -> Result<String, InfrastructureError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    videos
        .serialize(&mut serializer)
        .map_err(|e| InfrastructureError::Serialization(e.to_string()))?;
    let json = String::from_utf8(buffer)
        .map_err(|e| InfrastructureError::Serialization(e.to_string()))?;

    Ok(format!("{}{}{}", ENCABEZADO_CONFIG, json, PIE_CONFIG))
}

/// Escribe el config.js generado en disco.
/// # Errors
/// - `InfrastructureError::Io` si falla la escritura.
pub async fn escribir_config(
    videos: &[VideoRecord],
    ruta: &Path,
) -> Result<(), InfrastructureError> {
    let contenido = renderizar_config_js(videos)?;
    tokio::fs::write(ruta, contenido).await?;
    Ok(())
}

/// Escribe el archivo de URLs de ejemplo.
/// # Errors
/// - `InfrastructureError::Io` si falla la escritura.
pub async fn escribir_archivo_ejemplo(ruta: &Path) -> Result<(), InfrastructureError> {
    tokio::fs::write(ruta, CONTENIDO_EJEMPLO).await?;
    Ok(())
}
