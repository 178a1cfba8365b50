//! Conjuntos cerrados de palabras: verbos auxiliares y conjunciones subordinantes
//!
//! Se construyen una sola vez y se pasan por referencia a quien los necesite.

use rustc_hash::FxHashSet;

/// Verbos auxiliares y modales (minúsculas)
pub const AUXILIARY_VERBS: &[&str] = &[
    "to", "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "will", "would", "shall", "should", "may", "might", "must",
    "can", "could",
];

/// Conjunciones que abren una cláusula subordinada (minúsculas)
pub const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "although", "because", "if", "when", "while", "since", "unless", "until", "whereas", "though",
    "after", "before", "as",
];

/// Tokens de puntuación que nunca pasan al residuo
pub const DROPPED_PUNCTUATION: &[&str] = &[",", ".", "!", "?"];

/// Conjuntos cerrados inmutables usados por el motor
#[derive(Debug, Clone)]
pub struct Lexicon {
    auxiliaries: FxHashSet<String>,
    conjunctions: FxHashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// Conjuntos del inglés
    pub fn english() -> Self {
        Self::from_lists(AUXILIARY_VERBS, SUBORDINATING_CONJUNCTIONS)
    }

    pub fn from_lists(auxiliaries: &[&str], conjunctions: &[&str]) -> Self {
        Self {
            auxiliaries: auxiliaries.iter().map(|w| w.to_lowercase()).collect(),
            conjunctions: conjunctions.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// ¿Es un verbo auxiliar? (sin distinguir mayúsculas)
    pub fn is_auxiliary(&self, word: &str) -> bool {
        self.auxiliaries.contains(&word.to_lowercase())
    }

    /// ¿Es una conjunción subordinante? (sin distinguir mayúsculas)
    pub fn is_subordinating_conjunction(&self, word: &str) -> bool {
        self.conjunctions.contains(&word.to_lowercase())
    }
}

/// ¿Es uno de los signos que el extractor SVO descarta?
pub fn is_dropped_punctuation(word: &str) -> bool {
    DROPPED_PUNCTUATION.contains(&word)
}
