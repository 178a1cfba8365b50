//! Colaboradores externos: re-etiquetado y entrega a la fase de corrección

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{ReconstructError, Result};
use crate::grammar::tokenizer::{TaggedToken, Tokenizer};

/// Servicio que etiqueta un texto ya formado
pub trait Tagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Etiquetador del formato `palabra/ETIQUETA palabra/ETIQUETA`.
///
/// Una palabra sin etiqueta recibe `Unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlashTagger {
    tokenizer: Tokenizer,
}

impl SlashTagger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tagger for SlashTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        self.tokenizer.tokenize(text)
    }
}

/// Lo que recibe la fase de corrección posterior
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectionHandoff {
    pub sentence: String,
    /// Etiquetado fresco de `sentence`, si había etiquetador
    pub retagged: Option<Vec<TaggedToken>>,
}

/// Formato de una línea de entrada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// `the/DT dog/NN`
    #[default]
    Slash,
    /// `[["the","DT"],["dog","NN"]]`
    Json,
}

/// Lee una línea de entrada. `line_number` empieza en 1 y solo se usa en errores.
pub fn parse_line(line: &str, format: InputFormat, line_number: usize) -> Result<Vec<TaggedToken>> {
    match format {
        InputFormat::Slash => Ok(SlashTagger::new().tag(line)),
        InputFormat::Json => {
            let json_error = |source| ReconstructError::Json {
                line: line_number,
                source,
            };
            serde_json::from_str(line).map_err(json_error)
        }
    }
}

/// Lee un documento con una oración por línea; ignora líneas vacías y comentarios `#`
pub fn parse_document(content: &str, format: InputFormat) -> Result<Vec<Vec<TaggedToken>>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, line)| parse_line(line, format, idx + 1))
        .collect()
}
