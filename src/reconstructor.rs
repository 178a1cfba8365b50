//! Motor principal de reconstrucción

use std::fmt::Write as _;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::grammar::assembler::finalize_sentence;
use crate::grammar::chunker::{find_verb_groups, identify_noun_phrases, NounPhrase, VerbGroup};
use crate::grammar::clauses::{handle_partition, identify_clauses, ClausePartition};
use crate::grammar::lexicon::Lexicon;
use crate::grammar::repair::{ProblemRecord, ProblemRepairer, DEFAULT_MAX_REWRITES};
use crate::grammar::rules::RuleEngine;
use crate::grammar::svo::{extract_svo_from_chunks, SvoComponents};
use crate::grammar::tokenizer::{join_text, TaggedToken, Tokenizer};
use crate::tagging::{CorrectionHandoff, Tagger};

/// Parámetros del motor
#[derive(Debug, Clone)]
pub struct ReconstructorConfig {
    pub rules: RuleEngine,
    /// Reescrituras máximas por oración
    pub max_rewrites: usize,
}

impl Default for ReconstructorConfig {
    fn default() -> Self {
        Self {
            rules: RuleEngine::standard(),
            max_rewrites: DEFAULT_MAX_REWRITES,
        }
    }
}

/// Resultado completo de reconstruir una oración
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub original: String,
    pub reconstructed: String,
    pub noun_phrases: Vec<NounPhrase>,
    pub verb_groups: Vec<VerbGroup>,
    pub problems: Vec<ProblemRecord>,
    pub clauses: ClausePartition,
    pub svo: SvoComponents,
}

/// Recibe la salida intermedia de cada fase
pub trait StageObserver {
    fn on_original(&mut self, _original: &str) {}
    fn on_repair(&mut self, _problems: &[ProblemRecord], _repaired: &[TaggedToken]) {}
    fn on_chunks(&mut self, _noun_phrases: &[NounPhrase], _verb_groups: &[VerbGroup]) {}
    fn on_clauses(&mut self, _partition: &ClausePartition) {}
    fn on_svo(&mut self, _svo: &SvoComponents) {}
    fn on_reconstructed(&mut self, _reconstructed: &str) {}
}

/// Observador silencioso
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StageObserver for NoopObserver {}

/// Emite cada fase como evento `tracing` de nivel info
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StageObserver for TracingObserver {
    fn on_original(&mut self, original: &str) {
        tracing::info!(stage = "original", %original);
    }

    fn on_repair(&mut self, problems: &[ProblemRecord], _repaired: &[TaggedToken]) {
        for problem in problems {
            tracing::info!(
                stage = "problems",
                kind = %problem.kind,
                position = problem.position,
                fixed = problem.fixed
            );
        }
    }

    fn on_chunks(&mut self, noun_phrases: &[NounPhrase], verb_groups: &[VerbGroup]) {
        tracing::info!(
            stage = "chunks",
            noun_phrases = noun_phrases.len(),
            verb_groups = verb_groups.len()
        );
    }

    fn on_clauses(&mut self, partition: &ClausePartition) {
        tracing::info!(
            stage = "clauses",
            main = ?partition.main,
            dependent = ?partition.dependent
        );
    }

    fn on_svo(&mut self, svo: &SvoComponents) {
        tracing::info!(
            stage = "svo",
            subject = ?svo.subject,
            verb = ?svo.verb,
            object = ?svo.object
        );
    }

    fn on_reconstructed(&mut self, reconstructed: &str) {
        tracing::info!(stage = "reconstructed", %reconstructed);
    }
}

/// Acumula un informe legible paso a paso
#[derive(Debug, Clone, Default)]
pub struct ReportObserver {
    report: String,
}

impl ReportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) -> &str {
        &self.report
    }

    pub fn into_report(self) -> String {
        self.report
    }

    fn step(&mut self, number: usize, name: &str) {
        let _ = writeln!(self.report, "\n[Paso {}] {}", number, name);
        let _ = writeln!(self.report, "{}", "-".repeat(60));
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.report, "{}", text);
    }
}

impl StageObserver for ReportObserver {
    fn on_original(&mut self, original: &str) {
        self.step(0, "Oración original");
        self.line(original);
    }

    fn on_repair(&mut self, problems: &[ProblemRecord], repaired: &[TaggedToken]) {
        self.step(1, "Problemas detectados");
        if problems.is_empty() {
            self.line("Ninguno");
        }
        for problem in problems {
            let status = if problem.fixed {
                "reparado"
            } else {
                "sin reparar"
            };
            self.line(&format!(
                "  {} en {}: {} ({})",
                problem.kind,
                problem.position,
                problem.original.join(" "),
                status
            ));
        }
        let sequence = Tokenizer::new().render(repaired);
        self.line(&format!("  secuencia: {}", sequence));
    }

    fn on_chunks(&mut self, noun_phrases: &[NounPhrase], verb_groups: &[VerbGroup]) {
        self.step(2, "Frases nominales");
        if noun_phrases.is_empty() {
            self.line("Ninguna");
        }
        for phrase in noun_phrases {
            let text = format!("  {:?} {}", phrase.span.range(), phrase.span.text());
            self.line(&text);
        }

        self.step(3, "Grupos verbales");
        if verb_groups.is_empty() {
            self.line("Ninguno");
        }
        for group in verb_groups {
            let kind = if group.is_main {
                "principal"
            } else {
                "auxiliar"
            };
            self.line(&format!(
                "  {:?} {} ({})",
                group.span.range(),
                group.span.text(),
                kind
            ));
        }
    }

    fn on_clauses(&mut self, partition: &ClausePartition) {
        self.step(4, "Estructura de cláusulas");
        self.line(&format!("  principal: {:?}", partition.main));
        match &partition.dependent {
            Some(dependent) => self.line(&format!("  subordinada: {:?}", dependent)),
            None => self.line("  subordinada: ninguna"),
        }
        if !partition.subordinate_positions.is_empty() {
            self.line(&format!(
                "  conjunciones en: {:?}",
                partition.subordinate_positions
            ));
        }
    }

    fn on_svo(&mut self, svo: &SvoComponents) {
        self.step(5, "Componentes S-V-O");
        self.line(&format!("  sujeto: {}", svo.subject.join(" ")));
        self.line(&format!("  verbo: {}", svo.verb.join(" ")));
        self.line(&format!("  objeto: {}", svo.object.join(" ")));
        self.line(&format!("  resto: {}", svo.other.join(" ")));
    }

    fn on_reconstructed(&mut self, reconstructed: &str) {
        self.step(6, "Oración reconstruida");
        self.line(reconstructed);
    }
}

/// Motor de reconstrucción. Inmutable tras construirse; se puede compartir entre hilos.
#[derive(Debug, Clone)]
pub struct Reconstructor {
    lexicon: Lexicon,
    repairer: ProblemRepairer,
}

impl Default for Reconstructor {
    fn default() -> Self {
        Self::new(&ReconstructorConfig::default())
    }
}

impl Reconstructor {
    /// Crea un motor con el léxico inglés
    pub fn new(config: &ReconstructorConfig) -> Self {
        Self::with_lexicon(config, Lexicon::english())
    }

    pub fn with_lexicon(config: &ReconstructorConfig, lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            repairer: ProblemRepairer::new(config.rules.clone())
                .with_max_rewrites(config.max_rewrites),
        }
    }

    /// Reconstruye una oración sin salida intermedia
    pub fn reconstruct(&self, tokens: &[TaggedToken]) -> Analysis {
        self.reconstruct_with_observer(tokens, &mut NoopObserver)
    }

    /// Con `verbose`, cada fase se emite como evento `tracing`
    pub fn reconstruct_verbose(&self, tokens: &[TaggedToken], verbose: bool) -> Analysis {
        if verbose {
            self.reconstruct_with_observer(tokens, &mut TracingObserver)
        } else {
            self.reconstruct(tokens)
        }
    }

    /// Ejecuta la tubería completa avisando al observador tras cada fase
    pub fn reconstruct_with_observer<O: StageObserver + ?Sized>(
        &self,
        tokens: &[TaggedToken],
        observer: &mut O,
    ) -> Analysis {
        let original = join_text(tokens);
        observer.on_original(&original);

        // Fase 1: Reparación de defectos
        let outcome = self.repairer.repair(tokens, &self.lexicon);
        debug!(
            problems = outcome.problems.len(),
            fixed = outcome.fixed_count(),
            "reparación terminada"
        );
        let repaired = outcome.tokens;
        observer.on_repair(&outcome.problems, &repaired);

        // Fase 2: Troceo sobre la secuencia reparada
        let noun_phrases = identify_noun_phrases(&repaired);
        let verb_groups = find_verb_groups(&repaired, &self.lexicon);
        debug!(
            noun_phrases = noun_phrases.len(),
            verb_groups = verb_groups.len(),
            "troceo terminado"
        );
        observer.on_chunks(&noun_phrases, &verb_groups);

        // Fase 3: Cláusulas
        let clauses = identify_clauses(&repaired, &self.lexicon);
        debug!(
            main = ?clauses.main,
            dependent = ?clauses.dependent,
            "cláusulas identificadas"
        );
        observer.on_clauses(&clauses);

        // Fase 4: S-V-O de la oración completa
        let svo = extract_svo_from_chunks(&repaired, &noun_phrases, &verb_groups);
        observer.on_svo(&svo);

        // Fase 5: Reordenación por cláusula y ensamblado
        let joined = handle_partition(&repaired, &clauses, &self.lexicon);
        let reconstructed = finalize_sentence(&joined);
        debug!(%reconstructed, "oración reconstruida");
        observer.on_reconstructed(&reconstructed);

        Analysis {
            original,
            reconstructed,
            noun_phrases,
            verb_groups,
            problems: outcome.problems,
            clauses,
            svo,
        }
    }

    /// Reconstruye oraciones independientes en paralelo; conserva el orden de entrada
    pub fn reconstruct_batch(&self, sentences: &[Vec<TaggedToken>]) -> Vec<Analysis> {
        sentences
            .par_iter()
            .map(|tokens| self.reconstruct(tokens))
            .collect()
    }

    /// Prepara la entrega a la fase de corrección, re-etiquetando si hay etiquetador
    pub fn handoff(&self, analysis: &Analysis, tagger: Option<&dyn Tagger>) -> CorrectionHandoff {
        let retagged = tagger
            .filter(|_| !analysis.reconstructed.is_empty())
            .map(|tagger| tagger.tag(&analysis.reconstructed));
        CorrectionHandoff {
            sentence: analysis.reconstructed.clone(),
            retagged,
        }
    }
}
