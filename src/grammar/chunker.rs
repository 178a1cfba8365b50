//! Detección de frases nominales y grupos verbales
//!
//! Frases nominales, por prioridad en cada posición:
//! - PRP sola
//! - (DT|PRP$)? JJ* NN  (una sola cabeza nominal)
//! - NN sola
//!
//! Grupos verbales: (MD|AUX)? VB RP?

use std::ops::Range;

use serde::Serialize;

use super::lexicon::Lexicon;
use super::tokenizer::{texts, TaggedToken};

/// Rango semiabierto `[start, end)` sobre una secuencia concreta.
///
/// Solo es válido contra la secuencia de la que salió: tras una reparación
/// hay que volver a trocear, nunca ajustar índices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub tokens: Vec<String>,
}

impl Span {
    fn over(tokens: &[TaggedToken], start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            tokens: texts(&tokens[start..end]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Frase nominal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NounPhrase {
    #[serde(flatten)]
    pub span: Span,
}

/// Grupo verbal: auxiliar opcional, verbo, partícula opcional
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbGroup {
    #[serde(flatten)]
    pub span: Span,
    /// El verbo cabeza no es auxiliar
    pub is_main: bool,
}

/// Identifica frases nominales en un único recorrido de izquierda a derecha.
///
/// Las frases no se solapan y salen ordenadas por inicio.
pub fn identify_noun_phrases(tokens: &[TaggedToken]) -> Vec<NounPhrase> {
    let mut phrases = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].tag.is_pronoun() {
            phrases.push(NounPhrase {
                span: Span::over(tokens, i, i + 1),
            });
            i += 1;
            continue;
        }

        match match_noun_phrase(tokens, i) {
            Some(end) => {
                phrases.push(NounPhrase {
                    span: Span::over(tokens, i, end),
                });
                i = end;
            }
            // Frase incompleta: se descarta y se reexamina desde la siguiente posición
            None => i += 1,
        }
    }

    phrases
}

/// Intenta casar `(DT|PRP$)? JJ* NN` desde `start`; devuelve el fin de la frase
fn match_noun_phrase(tokens: &[TaggedToken], start: usize) -> Option<usize> {
    let mut end = start;

    if tokens[end].tag.opens_noun_phrase() {
        end += 1;
    }

    while end < tokens.len() && tokens[end].tag.is_adjective() {
        end += 1;
    }

    // Cabeza obligatoria. Si no se consumió nada antes, es el caso del sustantivo suelto.
    if end < tokens.len() && tokens[end].tag.is_noun() {
        return Some(end + 1);
    }

    None
}

/// Identifica grupos verbales de izquierda a derecha.
///
/// Un modal o auxiliar solo actúa como auxiliar si le sigue un verbo. Un
/// auxiliar con etiqueta VB* sin verbo detrás es la cabeza de su propio grupo
/// (no principal); un modal sin verbo detrás se descarta.
pub fn find_verb_groups(tokens: &[TaggedToken], lexicon: &Lexicon) -> Vec<VerbGroup> {
    let mut groups = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let start = i;

        let is_helper = tokens[i].tag.is_modal()
            || (tokens[i].tag.is_verb() && lexicon.is_auxiliary(&tokens[i].text));
        if is_helper && i + 1 < tokens.len() && tokens[i + 1].tag.is_verb() {
            i += 1;
        }

        if !tokens[i].tag.is_verb() {
            i = start + 1;
            continue;
        }

        let is_main = !lexicon.is_auxiliary(&tokens[i].text);
        i += 1;

        if i < tokens.len() && tokens[i].tag.is_particle() {
            i += 1;
        }

        groups.push(VerbGroup {
            span: Span::over(tokens, start, i),
            is_main,
        });
    }

    groups
}

/// Grupo verbal que gobierna la cláusula: el primero principal o, si no hay,
/// el primero de cualquier tipo
pub fn main_verb_group(groups: &[VerbGroup]) -> Option<&VerbGroup> {
    groups
        .iter()
        .find(|g| g.is_main)
        .or_else(|| groups.first())
}
