//! Propiedades generales del motor sobre secuencias aleatorias.

use proptest::prelude::*;
use reconstructor::grammar::{
    extract_svo, find_verb_groups, handle_clauses, identify_clauses, identify_noun_phrases,
    Lexicon, TaggedToken,
};
use reconstructor::Reconstructor;

const TAGS: &[&str] = &[
    "DT", "PRP$", "JJ", "NN", "NNS", "NNP", "PRP", "VB", "VBD", "VBZ", "VBN", "MD", "RB", "IN",
    "RP", "CC", "TO", "XYZ",
];

/// Palabras de uso frecuente para que aparezcan auxiliares y conjunciones
const WORDS: &[&str] = &[
    "the", "dog", "is", "has", "will", "can", "because", "if", "when", "quickly", "he", "up",
];

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        prop::sample::select(WORDS).prop_map(String::from),
    ]
}

fn tagged_token() -> impl Strategy<Value = TaggedToken> {
    (word(), prop::sample::select(TAGS))
        .prop_map(|(text, tag)| TaggedToken::new(text, tag))
}

fn sentence() -> impl Strategy<Value = Vec<TaggedToken>> {
    prop::collection::vec(tagged_token(), 1..14)
}

/// Incluye comas y puntos para ejercitar los límites de cláusula
fn sentence_with_punctuation() -> impl Strategy<Value = Vec<TaggedToken>> {
    prop::collection::vec(
        prop_oneof![
            4 => tagged_token(),
            1 => Just(TaggedToken::new(",", ",")),
            1 => Just(TaggedToken::new(".", ".")),
        ],
        0..14,
    )
}

fn sorted_lowercase<'a>(words: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut words: Vec<String> = words.map(|w| w.to_lowercase()).collect();
    words.sort();
    words
}

proptest! {
    #[test]
    fn reconstruction_is_capitalized_and_terminated(tokens in sentence()) {
        let analysis = Reconstructor::default().reconstruct(&tokens);
        let text = &analysis.reconstructed;

        prop_assert!(!text.is_empty());
        prop_assert!(
            text.chars().next().is_some_and(char::is_uppercase),
            "sin mayúscula: {}",
            text
        );
        prop_assert!(
            text.ends_with('.') && !text.ends_with(".."),
            "terminación incorrecta: {}",
            text
        );
    }

    #[test]
    fn reconstruction_preserves_token_multiset(tokens in sentence()) {
        let analysis = Reconstructor::default().reconstruct(&tokens);
        let output = sorted_lowercase(
            analysis
                .reconstructed
                .split_whitespace()
                .map(|w| w.trim_end_matches(|c: char| c == '.' || c == ',')),
        );
        let input = sorted_lowercase(tokens.iter().map(|t| t.text.as_str()));
        prop_assert_eq!(output, input);
    }

    #[test]
    fn chunking_is_idempotent_and_non_overlapping(tokens in sentence_with_punctuation()) {
        let lexicon = Lexicon::english();
        let phrases = identify_noun_phrases(&tokens);
        prop_assert_eq!(&phrases, &identify_noun_phrases(&tokens));
        prop_assert_eq!(
            find_verb_groups(&tokens, &lexicon),
            find_verb_groups(&tokens, &lexicon)
        );

        for pair in phrases.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
        for phrase in &phrases {
            prop_assert!(!phrase.span.is_empty() && phrase.span.end <= tokens.len());
        }
    }

    #[test]
    fn main_verb_takes_precedence(tokens in sentence()) {
        let lexicon = Lexicon::english();
        let groups = find_verb_groups(&tokens, &lexicon);
        let svo = extract_svo(&tokens, &lexicon);

        match groups.iter().find(|g| g.is_main).or_else(|| groups.first()) {
            Some(group) => {
                prop_assert_eq!(&svo.verb, &group.span.tokens);
            }
            None => {
                prop_assert!(svo.verb.is_empty());
                prop_assert!(svo.subject.is_empty() && svo.object.is_empty());
            }
        }
    }

    #[test]
    fn clause_ranges_cover_the_sequence(tokens in sentence_with_punctuation()) {
        let lexicon = Lexicon::english();
        let partition = identify_clauses(&tokens, &lexicon);

        match &partition.dependent {
            Some(dependent) if dependent.start == 0 => {
                prop_assert_eq!(dependent.end, partition.main.start);
                prop_assert_eq!(partition.main.end, tokens.len());
            }
            Some(dependent) => {
                prop_assert_eq!(partition.main.start, 0);
                prop_assert_eq!(partition.main.end, dependent.start);
                prop_assert_eq!(dependent.end, tokens.len());
            }
            None => {
                prop_assert_eq!(partition.main.clone(), 0..tokens.len());
            }
        }

        // nunca entra en pánico, con o sin puntuación
        let _ = handle_clauses(&tokens, &lexicon);
    }
}
