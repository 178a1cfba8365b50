//! Errores de los bordes falibles (lectura de entrada, CLI)
//!
//! El motor en sí es total: nunca devuelve error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error("no se pudo acceder a '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("línea {line}: JSON inválido: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("no se proporcionó ninguna oración")]
    EmptyInput,

    #[error("regla desconocida: '{0}'")]
    UnknownRule(String),
}

impl ReconstructError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReconstructError>;
