//! Detección y reparación de patrones defectuosos
//!
//! Las reparaciones son reescrituras destructivas de la secuencia de trabajo
//! pero se implementan como funciones puras que devuelven una secuencia nueva.
//! Cada regla ve el estado que dejó la anterior.

use serde::Serialize;
use tracing::{debug, warn};

use super::chunker::find_verb_groups;
use super::lexicon::Lexicon;
use super::rules::{ProblemKind, RuleEngine};
use super::tokenizer::{texts, TaggedToken};

/// Posiciones examinadas tras la preposición en busca de sustantivo (i+2..=i+4)
pub const NOUN_LOOKAHEAD: usize = 3;
/// Ventana previa al verbo en la que un sustantivo/pronombre cuenta como sujeto
pub const SUBJECT_WINDOW: usize = 3;
/// Alcance de la búsqueda de sujeto a cada lado del grupo verbal
pub const SUBJECT_SEARCH: usize = 5;
/// Reescrituras máximas por oración
pub const DEFAULT_MAX_REWRITES: usize = 64;

/// Registro de un defecto detectado
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemRecord {
    pub kind: ProblemKind,
    pub position: usize,
    pub original: Vec<String>,
    /// `false` si se detectó pero no había con qué repararlo
    pub fixed: bool,
}

/// Resultado de la fase de reparación
#[derive(Debug, Clone, Default)]
pub struct RepairOutcome {
    pub tokens: Vec<TaggedToken>,
    pub problems: Vec<ProblemRecord>,
}

impl RepairOutcome {
    pub fn fixed_count(&self) -> usize {
        self.problems.iter().filter(|p| p.fixed).count()
    }
}

/// Presupuesto de reescrituras de una oración
struct RewriteBudget {
    remaining: usize,
    warned: bool,
}

impl RewriteBudget {
    fn new(limit: usize) -> Self {
        Self {
            remaining: limit,
            warned: false,
        }
    }

    fn has_room(&mut self) -> bool {
        if self.remaining > 0 {
            return true;
        }
        if !self.warned {
            warn!(
                "presupuesto de reescrituras agotado; los defectos restantes quedan sin reparar"
            );
            self.warned = true;
        }
        false
    }

    fn spend(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

/// Detector y reparador de defectos
#[derive(Debug, Clone)]
pub struct ProblemRepairer {
    rules: RuleEngine,
    max_rewrites: usize,
}

impl Default for ProblemRepairer {
    fn default() -> Self {
        Self::new(RuleEngine::standard())
    }
}

impl ProblemRepairer {
    pub fn new(rules: RuleEngine) -> Self {
        Self {
            rules,
            max_rewrites: DEFAULT_MAX_REWRITES,
        }
    }

    pub fn with_max_rewrites(mut self, max_rewrites: usize) -> Self {
        self.max_rewrites = max_rewrites;
        self
    }

    /// Aplica las reglas habilitadas en orden
    pub fn repair(&self, tokens: &[TaggedToken], lexicon: &Lexicon) -> RepairOutcome {
        let mut current = tokens.to_vec();
        let mut problems = Vec::new();
        let mut budget = RewriteBudget::new(self.max_rewrites);

        for rule in self.rules.get_enabled_rules() {
            current = match rule.kind {
                ProblemKind::PrepositionAdjectiveNoNoun => {
                    repair_preposition_adjective(current, &mut problems, &mut budget)
                }
                ProblemKind::VerbWithoutSubject => {
                    repair_verb_without_subject(current, lexicon, &mut problems, &mut budget)
                }
                ProblemKind::UnusualStart => {
                    repair_unusual_start(current, &mut problems, &mut budget)
                }
            };
        }

        RepairOutcome {
            tokens: current,
            problems,
        }
    }
}

/// Mueve el token en `from` para que quede justo delante del token que ahora
/// ocupa `before` (`before == len` lo lleva al final). El resto conserva su orden.
pub fn relocate(tokens: &[TaggedToken], from: usize, before: usize) -> Vec<TaggedToken> {
    let mut out = tokens.to_vec();
    let token = out.remove(from);
    let target = if from < before { before - 1 } else { before };
    out.insert(target, token);
    out
}

fn record(
    problems: &mut Vec<ProblemRecord>,
    kind: ProblemKind,
    position: usize,
    original: Vec<String>,
    fixed: bool,
) {
    debug!(rule = %kind, position, fixed, original = ?original, "defecto detectado");
    problems.push(ProblemRecord {
        kind,
        position,
        original,
        fixed,
    });
}

// ---------------------------------------------------------------------------
// IN + JJ sin sustantivo
// ---------------------------------------------------------------------------

/// Preposición en `i`, adjetivo en `i+1` y ningún sustantivo en `i+2`
pub fn is_dangling_adjective(tokens: &[TaggedToken], i: usize) -> bool {
    i + 1 < tokens.len()
        && tokens[i].tag.is_preposition()
        && tokens[i + 1].tag.is_adjective()
        && !tokens.get(i + 2).is_some_and(|t| t.tag.is_noun())
}

/// Lleva el primer sustantivo de `i+2..=i+4` justo detrás del adjetivo
pub fn attach_adjective_to_noun(tokens: &[TaggedToken], i: usize) -> Option<Vec<TaggedToken>> {
    let window_end = (i + 2 + NOUN_LOOKAHEAD).min(tokens.len());
    let noun = (i + 2..window_end).find(|&j| tokens[j].tag.is_noun())?;
    Some(relocate(tokens, noun, i + 2))
}

fn repair_preposition_adjective(
    mut tokens: Vec<TaggedToken>,
    problems: &mut Vec<ProblemRecord>,
    budget: &mut RewriteBudget,
) -> Vec<TaggedToken> {
    let mut i = 0;
    while i + 1 < tokens.len() {
        if is_dangling_adjective(&tokens, i) {
            let original = texts(&tokens[i..i + 2]);
            let rewritten = if budget.has_room() {
                attach_adjective_to_noun(&tokens, i)
            } else {
                None
            };
            let fixed = rewritten.is_some();
            if let Some(next) = rewritten {
                budget.spend();
                tokens = next;
            }
            record(
                problems,
                ProblemKind::PrepositionAdjectiveNoNoun,
                i,
                original,
                fixed,
            );
        }
        i += 1;
    }
    tokens
}

// ---------------------------------------------------------------------------
// Verbo principal sin sujeto
// ---------------------------------------------------------------------------

/// ¿Hay sustantivo o pronombre en las `SUBJECT_WINDOW` posiciones previas?
pub fn has_subject_before(tokens: &[TaggedToken], verb_start: usize) -> bool {
    tokens[verb_start.saturating_sub(SUBJECT_WINDOW)..verb_start]
        .iter()
        .any(|t| t.tag.is_subject_candidate())
}

/// Candidato a sujeto para el grupo `[start, end)`: el más cercano por
/// delante (hasta `SUBJECT_SEARCH` posiciones) o, si no hay, el primero por
/// detrás a partir de `end`
pub fn find_subject_candidate(tokens: &[TaggedToken], start: usize, end: usize) -> Option<usize> {
    let is_candidate = |i: &usize| tokens[*i].tag.is_subject_candidate();
    let limit = (end + SUBJECT_SEARCH).min(tokens.len());

    (start.saturating_sub(SUBJECT_SEARCH)..start)
        .rev()
        .find(is_candidate)
        .or_else(|| (end..limit).find(is_candidate))
}

fn repair_verb_without_subject(
    mut tokens: Vec<TaggedToken>,
    lexicon: &Lexicon,
    problems: &mut Vec<ProblemRecord>,
    budget: &mut RewriteBudget,
) -> Vec<TaggedToken> {
    // Los grupos se recalculan tras cada reescritura; `cursor` marca el
    // primer índice aún no examinado de la secuencia actual.
    let mut cursor = 0;

    loop {
        let groups = find_verb_groups(&tokens, lexicon);
        let Some(group) = groups.into_iter().find(|g| {
            g.is_main
                && g.span.start >= cursor
                && g.span.start > 0
                && !has_subject_before(&tokens, g.span.start)
        }) else {
            break;
        };

        let (start, end) = (group.span.start, group.span.end);
        let candidate = if budget.has_room() {
            find_subject_candidate(&tokens, start, end)
        } else {
            None
        };

        cursor = end;
        if let Some(subject) = candidate {
            tokens = relocate(&tokens, subject, start);
            budget.spend();
            if subject >= end {
                // El sujeto entró por delante: el grupo se desplaza una posición
                cursor = end + 1;
            }
        }

        record(
            problems,
            ProblemKind::VerbWithoutSubject,
            start,
            group.span.tokens,
            candidate.is_some(),
        );
    }

    tokens
}

// ---------------------------------------------------------------------------
// Inicio inusual
// ---------------------------------------------------------------------------

/// Primer token adjetivo/adverbio sin sustantivo o pronombre detrás
pub fn has_unusual_start(tokens: &[TaggedToken]) -> bool {
    let Some(first) = tokens.first() else {
        return false;
    };
    (first.tag.is_adjective() || first.tag.is_adverb())
        && (tokens.len() < 3 || !tokens[1].tag.is_subject_candidate())
}

/// Mueve el primer token justo detrás del primer sustantivo, pronombre o verbo
pub fn move_start_after_anchor(tokens: &[TaggedToken]) -> Option<Vec<TaggedToken>> {
    let anchor = (1..tokens.len())
        .find(|&i| tokens[i].tag.is_subject_candidate() || tokens[i].tag.is_verb())?;
    Some(relocate(tokens, 0, anchor + 1))
}

fn repair_unusual_start(
    tokens: Vec<TaggedToken>,
    problems: &mut Vec<ProblemRecord>,
    budget: &mut RewriteBudget,
) -> Vec<TaggedToken> {
    if !has_unusual_start(&tokens) {
        return tokens;
    }

    let original = vec![tokens[0].text.clone()];
    let rewritten = if budget.has_room() {
        move_start_after_anchor(&tokens)
    } else {
        None
    };
    let fixed = rewritten.is_some();
    record(problems, ProblemKind::UnusualStart, 0, original, fixed);

    match rewritten {
        Some(next) => {
            budget.spend();
            next
        }
        None => tokens,
    }
}
