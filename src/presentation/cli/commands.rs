use clap::Parser;

/// Parametros de linea de comandos.
#[derive(Parser)]
#[command(name = "ytcfg")]
#[command(author, version, about = "Generador de config.js desde URLs de YouTube")]
pub struct Cli {
    /// Archivo de texto con URLs de YouTube.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: Option<String>,

    /// Archivo de configuracion de salida (por defecto config.js).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Crea un archivo de URLs de ejemplo y termina.
    #[arg(long)]
    pub sample: bool,
}
