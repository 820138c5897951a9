use thiserror::Error;

/// Errores del dominio.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid video ID: {0}")]
    InvalidVideoId(String),
}
