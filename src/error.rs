use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no se pudo leer el catálogo YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("catálogo inválido: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("error de E/S en {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no se pudo serializar el progreso: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("almacenamiento bloqueado por un hilo que falló")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no se pudo leer {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuración YAML inválida: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("falta la API key, modo sin conexión")]
    MissingKey,
    #[error("error conectando con el generador: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("el generador devolvió HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("respuesta inválida del generador: {0}")]
    Malformed(String),
}
