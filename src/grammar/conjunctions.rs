//! Detección de conjunciones subordinantes por lista cerrada (independiente de la etiqueta)

use serde::Serialize;

use super::lexicon::Lexicon;
use super::tokenizer::TaggedToken;

/// Conjunción subordinante encontrada
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjunctionMarker {
    pub position: usize,
    /// Forma en minúsculas
    pub word: String,
}

/// Devuelve las conjunciones subordinantes en orden de aparición
pub fn detect_subordinate_conjunctions(
    tokens: &[TaggedToken],
    lexicon: &Lexicon,
) -> Vec<ConjunctionMarker> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| lexicon.is_subordinating_conjunction(&t.text))
        .map(|(position, t)| ConjunctionMarker {
            position,
            word: t.lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::tokenizer::tagged;

    #[test]
    fn test_detects_regardless_of_tag() {
        let lexicon = Lexicon::english();
        let tokens = tagged(&[
            ("Because", "IN"),
            ("it", "PRP"),
            ("rained", "VBD"),
            ("we", "PRP"),
            ("stayed", "VBD"),
            ("as", "RB"),
            ("expected", "VBN"),
        ]);
        let markers = detect_subordinate_conjunctions(&tokens, &lexicon);
        assert_eq!(
            markers,
            vec![
                ConjunctionMarker {
                    position: 0,
                    word: "because".to_string(),
                },
                ConjunctionMarker {
                    position: 5,
                    word: "as".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_no_conjunctions() {
        let lexicon = Lexicon::english();
        let tokens = tagged(&[("dogs", "NNS"), ("bark", "VBP")]);
        let markers = detect_subordinate_conjunctions(&tokens, &lexicon);
        assert!(markers.is_empty());
    }
}
