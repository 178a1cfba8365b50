//! Motor gramatical
//!
//! Reparación estructural, troceo, división en cláusulas y reordenación
//! sujeto-verbo-objeto sobre secuencias ya etiquetadas.

pub mod assembler;
pub mod chunker;
pub mod clauses;
pub mod conjunctions;
pub mod lexicon;
pub mod repair;
pub mod rules;
pub mod svo;
pub mod tags;
pub mod tokenizer;

pub use assembler::finalize_sentence;
pub use chunker::{
    find_verb_groups, identify_noun_phrases, main_verb_group, NounPhrase, Span, VerbGroup,
};
pub use clauses::{handle_clauses, identify_clauses, reorder_clause, ClausePartition};
pub use conjunctions::{detect_subordinate_conjunctions, ConjunctionMarker};
pub use lexicon::Lexicon;
pub use repair::{ProblemRecord, ProblemRepairer, RepairOutcome};
pub use rules::{ProblemKind, RepairRule, RuleEngine};
pub use svo::{extract_svo, SvoComponents};
pub use tags::PosTag;
pub use tokenizer::{TaggedToken, Tokenizer};
