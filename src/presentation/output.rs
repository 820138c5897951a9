use std::path::Path;

pub struct ConsoleOutput;

const LARGO_MAXIMO_LINEA: usize = 50;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }

    pub fn mostrar_banner(&self) {
        println!("=== ytcfg - YouTube Config Generator ===\n");
    }

    pub fn mostrar_error_sin_archivo_entrada(&self) {
        println!("Error: Debes especificar un archivo con URLs de YouTube");
        println!("Uso: ytcfg <archivo_urls.txt> [-o salida.js]");
        println!("     ytcfg --sample");
    }

    pub fn mostrar_error_archivo_no_encontrado(&self, ruta: &Path) {
        println!("[ERROR] No se encontro el archivo '{}'", ruta.display());
    }

    pub fn mostrar_error_lectura(&self, error: &str) {
        println!("[ERROR] No se pudo leer el archivo: {}", error);
    }

    pub fn mostrar_total_urls(&self, total: usize) {
        println!("Procesando {} URLs...", total);
    }

    pub fn mostrar_progreso(&self, actual: usize, total: usize, url: &str) {
        println!(
            "[{}/{}] Procesando video: {}...",
            actual,
            total,
            truncar(url, LARGO_MAXIMO_LINEA)
        );
    }

    pub fn advertir_sin_video_id(&self, url: &str) {
        println!("[WARN] No se pudo extraer el video ID de: {}", url);
    }

    pub fn advertir_fallo_metadata(&self, video_id: &str, error: &str) {
        println!(
            "[WARN] No se pudo obtener info del video {}: {}",
            video_id, error
        );
    }

    pub fn mostrar_video_agregado(&self, titulo: &str) {
        println!("[OK] Agregado: {}...", truncar(titulo, LARGO_MAXIMO_LINEA));
    }

    pub fn mostrar_error_sin_videos(&self) {
        println!("[ERROR] No se encontraron videos validos");
    }

    pub fn mostrar_error_escritura(&self, error: &str) {
        println!("[ERROR] No se pudo escribir el archivo de configuracion: {}", error);
    }

    pub fn mostrar_resumen_exito(&self, ruta: &Path, total: usize) {
        println!("\n[OK] Generado {} con {} video(s)", ruta.display(), total);
        println!("Proximos pasos:");
        println!("1. Revisa el archivo {} generado", ruta.display());
        println!("2. Ajusta las descripciones si hace falta");
        println!("3. Recarga tu pagina para ver los videos nuevos");
    }

    pub fn mostrar_ejemplo_creado(&self, ruta: &Path) {
        println!(
            "[OK] Creado {} con el formato de ejemplo",
            ruta.display()
        );
    }
}

fn truncar(texto: &str, maximo: usize) -> String {
    texto.chars().take(maximo).collect()
}
