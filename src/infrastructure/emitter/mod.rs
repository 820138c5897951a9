pub mod config_emitter;

pub use config_emitter::{escribir_archivo_ejemplo, escribir_config, renderizar_config_js};
