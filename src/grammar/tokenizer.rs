//! Tokens etiquetados y lectura del formato de intercambio `palabra/ETIQUETA`

use serde::{Deserialize, Serialize};

use super::tags::PosTag;

/// Token con su categoría gramatical.
///
/// Se serializa como par `["dog", "NN"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, PosTag)", into = "(String, PosTag)")]
pub struct TaggedToken {
    pub text: String,
    pub tag: PosTag,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<PosTag>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }
}

impl From<(String, PosTag)> for TaggedToken {
    fn from((text, tag): (String, PosTag)) -> Self {
        Self { text, tag }
    }
}

impl From<TaggedToken> for (String, PosTag) {
    fn from(token: TaggedToken) -> Self {
        (token.text, token.tag)
    }
}

impl From<(&str, &str)> for TaggedToken {
    fn from((text, tag): (&str, &str)) -> Self {
        Self::new(text, tag)
    }
}

/// Construye una secuencia desde pares `(texto, etiqueta)`
pub fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
    pairs.iter().map(|&pair| TaggedToken::from(pair)).collect()
}

/// Lector del formato `the/DT dog/NN barks/VBZ`
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokeniza una línea en formato `palabra/ETIQUETA`.
    ///
    /// La etiqueta es lo que sigue a la última barra, así que `and/or/CC`
    /// produce el texto `and/or`. Sin barra, la etiqueta es `Unknown`.
    pub fn tokenize(&self, line: &str) -> Vec<TaggedToken> {
        line.split_whitespace().map(Self::parse_item).collect()
    }

    fn parse_item(item: &str) -> TaggedToken {
        match item.rsplit_once('/') {
            Some((text, tag)) if !text.is_empty() && !tag.is_empty() => TaggedToken::new(text, tag),
            _ => TaggedToken::new(item, PosTag::Unknown),
        }
    }

    /// Serializa de vuelta al formato `palabra/ETIQUETA`
    pub fn render(&self, tokens: &[TaggedToken]) -> String {
        tokens
            .iter()
            .map(|t| format!("{}/{}", t.text, t.tag))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Une los textos de los tokens con un espacio
pub fn join_text(tokens: &[TaggedToken]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Textos de un rango de tokens
pub fn texts(tokens: &[TaggedToken]) -> Vec<String> {
    tokens.iter().map(|t| t.text.clone()).collect()
}
