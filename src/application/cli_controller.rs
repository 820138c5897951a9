use crate::domain::entities::{VideoMetadata, VideoRecord};
use crate::domain::repositories::VideoMetadataRepository;
use crate::domain::value_objects::VideoId;
use crate::infrastructure::emitter::{escribir_archivo_ejemplo, escribir_config};
use crate::infrastructure::{AppConfig, YoutubeClient};
use crate::presentation::{Cli, ConsoleOutput};
use std::path::Path;

/// Orquesta la ejecucion de la CLI.
pub async fn ejecutar_cli(cli: Cli, config: AppConfig, client: YoutubeClient) -> anyhow::Result<()> {
    let salida = ConsoleOutput::new();
    let Cli {
        input_file,
        output,
        sample,
    } = cli;

    salida.mostrar_banner();

    if sample {
        escribir_archivo_ejemplo(&config.sample_file).await?;
        salida.mostrar_ejemplo_creado(&config.sample_file);
        return Ok(());
    }

    let Some(input_file) = input_file else {
        salida.mostrar_error_sin_archivo_entrada();
        std::process::exit(1);
    };

    let videos = procesar_archivo_urls(&client, &config, Path::new(&input_file), &salida).await;

    if videos.is_empty() {
        salida.mostrar_error_sin_videos();
        std::process::exit(1);
    }

    let ruta_salida = config.resolve_output_path(output.as_deref());
    match escribir_config(&videos, &ruta_salida).await {
        Ok(()) => {
            salida.mostrar_resumen_exito(&ruta_salida, videos.len());
            Ok(())
        }
        Err(err) => {
            salida.mostrar_error_escritura(&err.to_string());
            std::process::exit(1);
        }
    }
}

/// Procesa el archivo de URLs y devuelve los registros en orden de
/// aparicion. Las lineas en blanco o que comienzan con `#` se ignoran.
/// Nunca aborta la corrida: extraccion fallida salta la linea y una
/// consulta de metadata fallida usa valores de reserva.
pub async fn procesar_archivo_urls<R>(
    repo: &R,
    config: &AppConfig,
    ruta: &Path,
    salida: &ConsoleOutput,
) -> Vec<VideoRecord>
where
    R: VideoMetadataRepository,
{
    let contenido = match tokio::fs::read_to_string(ruta).await {
        Ok(contenido) => contenido,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            salida.mostrar_error_archivo_no_encontrado(ruta);
            return Vec::new();
        }
        Err(err) => {
            salida.mostrar_error_lectura(&err.to_string());
            return Vec::new();
        }
    };

    let urls: Vec<&str> = contenido
        .lines()
        .map(str::trim)
        .filter(|linea| !linea.is_empty() && !linea.starts_with('#'))
        .collect();

    salida.mostrar_total_urls(urls.len());

    let mut videos = Vec::new();

    for (indice, url) in urls.iter().enumerate() {
        salida.mostrar_progreso(indice + 1, urls.len(), url);

        let Some(video_id) = VideoId::extraer(url) else {
            salida.advertir_sin_video_id(url);
            continue;
        };

        let metadata = match repo.fetch_metadata(&video_id).await {
            Ok(metadata) => metadata,
            Err(err) => {
                salida.advertir_fallo_metadata(video_id.as_str(), &err.to_string());
                VideoMetadata::fallback(&video_id)
            }
        };

        let thumbnail = config.thumbnail_quality.thumbnail_url(&video_id);
        let title = descodificar_entidades_html(&metadata.title);
        salida.mostrar_video_agregado(&title);

        videos.push(VideoRecord {
            id: video_id.as_str().to_string(),
            title,
            description: metadata.description,
            thumbnail,
        });
    }

    videos
}

/// Reemplaza las entidades HTML comunes en titulos.
/// `&amp;` va al final para no descodificar dos veces.
fn descodificar_entidades_html(texto: &str) -> String {
    texto
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
