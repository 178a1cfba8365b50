//! Extracción de sujeto, verbo y objeto

use serde::Serialize;

use super::chunker::{
    find_verb_groups, identify_noun_phrases, main_verb_group, NounPhrase, Span, VerbGroup,
};
use super::lexicon::{is_dropped_punctuation, Lexicon};
use super::tokenizer::TaggedToken;

/// Componentes S-V-O de una secuencia
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SvoComponents {
    pub subject: Vec<String>,
    pub verb: Vec<String>,
    pub object: Vec<String>,
    /// Tokens no cubiertos, sin `, . ! ?`
    pub other: Vec<String>,
}

impl SvoComponents {
    /// Partes no vacías en orden S, V, O, resto
    pub fn ordered_parts(&self) -> Vec<String> {
        [&self.subject, &self.verb, &self.object, &self.other]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.join(" "))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.subject.is_empty()
            && self.verb.is_empty()
            && self.object.is_empty()
            && self.other.is_empty()
    }
}

/// Troceo y extracción sobre una secuencia
pub fn extract_svo(tokens: &[TaggedToken], lexicon: &Lexicon) -> SvoComponents {
    let noun_phrases = identify_noun_phrases(tokens);
    let verb_groups = find_verb_groups(tokens, lexicon);
    extract_svo_from_chunks(tokens, &noun_phrases, &verb_groups)
}

/// Extracción a partir de frases y grupos ya calculados sobre `tokens`.
///
/// Sujeto: la última frase nominal que termina antes del verbo principal.
/// Objeto: la primera que empieza tras él. Sin verbo no hay sujeto ni objeto.
pub fn extract_svo_from_chunks(
    tokens: &[TaggedToken],
    noun_phrases: &[NounPhrase],
    verb_groups: &[VerbGroup],
) -> SvoComponents {
    let verb = main_verb_group(verb_groups).map(|g| &g.span);

    let subject = verb.and_then(|v| {
        noun_phrases
            .iter()
            .map(|p| &p.span)
            .filter(|p| p.end <= v.start)
            .last()
    });
    let object = verb.and_then(|v| {
        noun_phrases
            .iter()
            .map(|p| &p.span)
            .find(|p| p.start >= v.end)
    });

    let chosen: Vec<&Span> = [subject, verb, object].into_iter().flatten().collect();
    let other = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| !chosen.iter().any(|span| span.contains(*i)))
        .map(|(_, t)| t.text.as_str())
        .filter(|text| !is_dropped_punctuation(text))
        .map(str::to_string)
        .collect();

    SvoComponents {
        subject: subject.map(|s| s.tokens.clone()).unwrap_or_default(),
        verb: verb.map(|s| s.tokens.clone()).unwrap_or_default(),
        object: object.map(|s| s.tokens.clone()).unwrap_or_default(),
        other,
    }
}
