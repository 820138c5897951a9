pub mod cli_controller;

pub use cli_controller::{ejecutar_cli, procesar_archivo_urls};
