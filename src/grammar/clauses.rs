//! División en cláusula principal y subordinada, y reordenación S-V-O

use std::ops::Range;

use serde::Serialize;

use super::conjunctions::detect_subordinate_conjunctions;
use super::lexicon::Lexicon;
use super::svo::extract_svo;
use super::tokenizer::TaggedToken;

/// Si la primera conjunción cae antes de esta posición, la subordinada abre la oración
pub const LEADING_CLAUSE_LIMIT: usize = 3;

/// Partición de una secuencia en cláusulas
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClausePartition {
    pub main: Range<usize>,
    pub dependent: Option<Range<usize>>,
    pub subordinate_positions: Vec<usize>,
}

impl ClausePartition {
    fn single(len: usize) -> Self {
        Self {
            main: 0..len,
            dependent: None,
            subordinate_positions: Vec::new(),
        }
    }
}

impl Default for ClausePartition {
    fn default() -> Self {
        Self::single(0)
    }
}

/// Divide la secuencia usando solo la primera conjunción subordinante.
///
/// - Conjunción en las 3 primeras posiciones: la subordinada va desde el
///   inicio hasta la primera coma posterior (incluida) o, sin coma, hasta la
///   mitad de la secuencia (nunca antes de la conjunción).
/// - En otro caso: principal antes de la conjunción, subordinada desde ella.
pub fn identify_clauses(tokens: &[TaggedToken], lexicon: &Lexicon) -> ClausePartition {
    let markers = detect_subordinate_conjunctions(tokens, lexicon);
    let Some(first) = markers.first().map(|m| m.position) else {
        return ClausePartition::single(tokens.len());
    };
    let subordinate_positions = markers.iter().map(|m| m.position).collect();
    let len = tokens.len();

    let (main, dependent) = if first < LEADING_CLAUSE_LIMIT {
        let boundary = (first + 1..len)
            .find(|&i| tokens[i].text == ",")
            .unwrap_or_else(|| (len / 2).max(first));
        (boundary + 1..len, 0..boundary + 1)
    } else {
        (0..first, first..len)
    };

    ClausePartition {
        main,
        dependent: Some(dependent),
        subordinate_positions,
    }
}

/// Reordena una cláusula como sujeto, verbo, objeto y resto
pub fn reorder_clause(tokens: &[TaggedToken], lexicon: &Lexicon) -> String {
    if tokens.is_empty() {
        return String::new();
    }
    extract_svo(tokens, lexicon).ordered_parts().join(" ")
}

/// Reordena cada cláusula por separado y las une como `"{principal}, {subordinada}"`.
///
/// La conjunción de la subordinada se mantiene en cabeza; el resto de la
/// subordinada se reordena.
pub fn handle_clauses(tokens: &[TaggedToken], lexicon: &Lexicon) -> String {
    let partition = identify_clauses(tokens, lexicon);
    handle_partition(tokens, &partition, lexicon)
}

/// Igual que [`handle_clauses`] con una partición ya calculada
pub fn handle_partition(
    tokens: &[TaggedToken],
    partition: &ClausePartition,
    lexicon: &Lexicon,
) -> String {
    let Some(dependent) = partition.dependent.clone().filter(|d| !d.is_empty()) else {
        return reorder_clause(tokens, lexicon);
    };

    let main = reorder_clause(&tokens[partition.main.clone()], lexicon);

    let conjunction_at = partition
        .subordinate_positions
        .first()
        .copied()
        .filter(|p| dependent.contains(p))
        .unwrap_or(dependent.start);
    let rest: Vec<TaggedToken> = dependent
        .clone()
        .filter(|&i| i != conjunction_at)
        .map(|i| tokens[i].clone())
        .collect();
    let subordinate = format!(
        "{} {}",
        tokens[conjunction_at].text,
        reorder_clause(&rest, lexicon)
    )
    .trim()
    .to_string();

    match (main.is_empty(), subordinate.is_empty()) {
        (false, false) => format!("{}, {}", main, subordinate),
        (false, true) => main,
        _ => subordinate,
    }
}
