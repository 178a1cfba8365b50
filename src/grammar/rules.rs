//! Sistema de reglas de reparación
//!
//! Cada regla es un par detección + transformación (ver `repair`). El orden
//! del `RuleEngine` es el orden de aplicación: cada regla lee la secuencia
//! que dejó la anterior.

use std::fmt;

use serde::Serialize;

/// Tipo de defecto estructural
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// IN + JJ sin sustantivo detrás
    PrepositionAdjectiveNoNoun,
    /// Verbo principal sin sujeto cercano
    VerbWithoutSubject,
    /// La oración empieza por adjetivo o adverbio sin estructura
    UnusualStart,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 3] = [
        ProblemKind::PrepositionAdjectiveNoNoun,
        ProblemKind::VerbWithoutSubject,
        ProblemKind::UnusualStart,
    ];

    /// Identificador estable de la regla
    pub fn id(&self) -> &'static str {
        match self {
            ProblemKind::PrepositionAdjectiveNoNoun => "preposition_adjective_no_noun",
            ProblemKind::VerbWithoutSubject => "verb_without_subject",
            ProblemKind::UnusualStart => "unusual_start",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id.trim())
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Regla de reparación
#[derive(Debug, Clone)]
pub struct RepairRule {
    pub kind: ProblemKind,
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

impl RepairRule {
    pub fn new(kind: ProblemKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            description: String::new(),
            enabled: true,
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }
}

/// Motor de reglas: lista ordenada de reglas de reparación
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<RepairRule>,
}

impl RuleEngine {
    /// Motor vacío
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Las tres reglas en su orden de prioridad
    pub fn standard() -> Self {
        let mut engine = Self::new();
        engine.add_rules(vec![
            RepairRule::new(
                ProblemKind::PrepositionAdjectiveNoNoun,
                "Preposición + adjetivo sin sustantivo",
            )
            .with_description(
                "Acerca el sustantivo más próximo (hasta 3 posiciones) al adjetivo",
            ),
            RepairRule::new(ProblemKind::VerbWithoutSubject, "Verbo principal sin sujeto")
                .with_description(
                    "Mueve el sujeto candidato más cercano justo delante del grupo verbal",
                ),
            RepairRule::new(ProblemKind::UnusualStart, "Inicio inusual").with_description(
                "Mueve el adjetivo/adverbio inicial tras el primer sustantivo, pronombre o verbo",
            ),
        ]);
        engine
    }

    pub fn add_rules(&mut self, rules: Vec<RepairRule>) {
        self.rules.extend(rules);
    }

    pub fn get_rules(&self) -> &[RepairRule] {
        &self.rules
    }

    pub fn get_enabled_rules(&self) -> Vec<&RepairRule> {
        self.rules.iter().filter(|r| r.enabled).collect()
    }

    pub fn is_enabled(&self, kind: ProblemKind) -> bool {
        self.rules.iter().any(|r| r.kind == kind && r.enabled)
    }

    pub fn enable_rule(&mut self, kind: ProblemKind) {
        for rule in &mut self.rules {
            if rule.kind == kind {
                rule.enabled = true;
            }
        }
    }

    pub fn disable_rule(&mut self, kind: ProblemKind) {
        for rule in &mut self.rules {
            if rule.kind == kind {
                rule.enabled = false;
            }
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let engine = RuleEngine::standard();
        let kinds: Vec<_> = engine.get_rules().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, ProblemKind::ALL.to_vec());
    }

    #[test]
    fn test_disable_and_enable() {
        let mut engine = RuleEngine::default();
        engine.disable_rule(ProblemKind::VerbWithoutSubject);
        assert!(!engine.is_enabled(ProblemKind::VerbWithoutSubject));
        assert_eq!(engine.get_enabled_rules().len(), 2);

        engine.enable_rule(ProblemKind::VerbWithoutSubject);
        assert!(engine.is_enabled(ProblemKind::VerbWithoutSubject));
    }

    #[test]
    fn test_ids_round_trip() {
        for kind in ProblemKind::ALL {
            assert_eq!(ProblemKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(ProblemKind::from_id("double_determiner"), None);
    }

    #[test]
    fn test_kind_serializes_as_id() {
        let json = serde_json::to_string(&ProblemKind::UnusualStart).unwrap();
        assert_eq!(json, "\"unusual_start\"");
    }
}
