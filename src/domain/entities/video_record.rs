use serde::{Deserialize, Serialize};

/// Registro de video para el arreglo de configuracion generado.
/// El orden de los campos define el orden de las claves JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}
