use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use ytcfg::application::procesar_archivo_urls;
use ytcfg::domain::entities::VideoMetadata;
use ytcfg::domain::repositories::VideoMetadataRepository;
use ytcfg::domain::value_objects::VideoId;
use ytcfg::infrastructure::{AppConfig, InfrastructureError};
use ytcfg::presentation::ConsoleOutput;

struct RepoFijo;

#[async_trait]
impl VideoMetadataRepository for RepoFijo {
    type Error = InfrastructureError;

    async fn fetch_metadata(&self, video_id: &VideoId) -> Result<VideoMetadata, Self::Error> {
        Ok(VideoMetadata {
            title: format!("Titulo {}", video_id.as_str()),
            description: format!("Descripcion {}", video_id.as_str()),
        })
    }
}

struct RepoFallido;

#[async_trait]
impl VideoMetadataRepository for RepoFallido {
    type Error = InfrastructureError;

    async fn fetch_metadata(&self, _video_id: &VideoId) -> Result<VideoMetadata, Self::Error> {
        Err(InfrastructureError::ExternalService(
            "connection refused".to_string(),
        ))
    }
}

struct RepoConEntidades;

#[async_trait]
impl VideoMetadataRepository for RepoConEntidades {
    type Error = InfrastructureError;

    async fn fetch_metadata(&self, _video_id: &VideoId) -> Result<VideoMetadata, Self::Error> {
        Ok(VideoMetadata {
            title: "Rust &amp; Cargo: &quot;Hola&quot;".to_string(),
            description: "Descripcion".to_string(),
        })
    }
}

fn escribir_archivo(dir: &TempDir, nombre: &str, contenido: &str) -> PathBuf {
    let ruta = dir.path().join(nombre);
    std::fs::write(&ruta, contenido).expect("No se pudo escribir el archivo de prueba");
    ruta
}

#[tokio::test]
async fn procesa_archivo_mixto() {
    let dir = TempDir::new().expect("tempdir");
    let ruta = escribir_archivo(
        &dir,
        "urls.txt",
        "# Comentario\n\nhttps://www.youtube.com/watch?v=abc123\nesto no es una url\n",
    );

    let videos = procesar_archivo_urls(
        &RepoFijo,
        &AppConfig::default(),
        &ruta,
        &ConsoleOutput::new(),
    )
    .await;

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, "abc123");
    assert_eq!(videos[0].title, "Titulo abc123");
    assert_eq!(
        videos[0].thumbnail,
        "https://img.youtube.com/vi/abc123/maxresdefault.jpg"
    );
}

#[tokio::test]
async fn metadata_fallida_usa_valores_de_reserva() {
    let dir = TempDir::new().expect("tempdir");
    let ruta = escribir_archivo(
        &dir,
        "urls.txt",
        "https://www.youtube.com/watch?v=abc123\nhttps://youtu.be/zzz999\n",
    );

    let videos = procesar_archivo_urls(
        &RepoFallido,
        &AppConfig::default(),
        &ruta,
        &ConsoleOutput::new(),
    )
    .await;

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].title, "AI Development Tutorial abc123");
    assert_eq!(
        videos[0].description,
        "Discover AI-powered development techniques and tools."
    );
    assert_eq!(videos[1].title, "AI Development Tutorial zzz999");
}

#[tokio::test]
async fn archivo_inexistente_devuelve_vacio() {
    let videos = procesar_archivo_urls(
        &RepoFijo,
        &AppConfig::default(),
        Path::new("no-existe.txt"),
        &ConsoleOutput::new(),
    )
    .await;

    assert!(videos.is_empty());
}

#[tokio::test]
async fn solo_comentarios_y_blancos_devuelve_vacio() {
    let dir = TempDir::new().expect("tempdir");
    let ruta = escribir_archivo(&dir, "urls.txt", "# Solo comentarios\n\n   \n# Otro\n");

    let videos = procesar_archivo_urls(
        &RepoFijo,
        &AppConfig::default(),
        &ruta,
        &ConsoleOutput::new(),
    )
    .await;

    assert!(videos.is_empty());
}

#[tokio::test]
async fn conserva_orden_y_duplicados() {
    let dir = TempDir::new().expect("tempdir");
    let ruta = escribir_archivo(
        &dir,
        "urls.txt",
        "https://www.youtube.com/watch?v=abc123\nhttps://youtu.be/zzz999\nhttps://www.youtube.com/watch?v=abc123\n",
    );

    let videos = procesar_archivo_urls(
        &RepoFijo,
        &AppConfig::default(),
        &ruta,
        &ConsoleOutput::new(),
    )
    .await;

    let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["abc123", "zzz999", "abc123"]);
}

#[tokio::test]
async fn descodifica_entidades_en_titulo() {
    let dir = TempDir::new().expect("tempdir");
    let ruta = escribir_archivo(&dir, "urls.txt", "https://www.youtube.com/watch?v=abc123\n");

    let videos = procesar_archivo_urls(
        &RepoConEntidades,
        &AppConfig::default(),
        &ruta,
        &ConsoleOutput::new(),
    )
    .await;

    assert_eq!(videos[0].title, "Rust & Cargo: \"Hola\"");
}
