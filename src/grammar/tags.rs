//! Alfabeto cerrado de etiquetas POS (estilo Penn Treebank) y predicados de categoría

use std::fmt;

use serde::{Deserialize, Serialize};

/// Etiqueta gramatical de un token.
///
/// Cualquier etiqueta fuera del alfabeto se convierte en `Unknown`, que no
/// coincide con ningún predicado: el token acaba como residuo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PosTag {
    /// CC
    CoordConj,
    /// CD
    Cardinal,
    /// DT
    Determiner,
    /// EX
    Existential,
    /// FW
    Foreign,
    /// IN
    Preposition,
    /// JJ
    Adjective,
    /// JJR
    AdjectiveComparative,
    /// JJS
    AdjectiveSuperlative,
    /// LS
    ListMarker,
    /// MD
    Modal,
    /// NN
    Noun,
    /// NNS
    NounPlural,
    /// NNP
    ProperNoun,
    /// NNPS
    ProperNounPlural,
    /// PDT
    Predeterminer,
    /// POS
    PossessiveEnding,
    /// PRP
    Pronoun,
    /// PRP$
    PossessivePronoun,
    /// RB
    Adverb,
    /// RBR
    AdverbComparative,
    /// RBS
    AdverbSuperlative,
    /// RP
    Particle,
    /// SYM
    Symbol,
    /// TO
    To,
    /// UH
    Interjection,
    /// VB
    Verb,
    /// VBD
    VerbPast,
    /// VBG
    VerbGerund,
    /// VBN
    VerbPastParticiple,
    /// VBP
    VerbNon3rdSing,
    /// VBZ
    Verb3rdSing,
    /// WDT
    WhDeterminer,
    /// WP
    WhPronoun,
    /// WP$
    WhPossessive,
    /// WRB
    WhAdverb,
    /// `.` `,` `:` `(` `)` `` ` `` `''` `#` `$`
    Punctuation(PunctTag),
    Unknown,
}

/// Etiquetas de puntuación del alfabeto Penn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctTag {
    Terminal,
    Comma,
    Colon,
    OpenParen,
    CloseParen,
    OpenQuote,
    CloseQuote,
    Hash,
    Dollar,
}

impl PosTag {
    /// Convierte una etiqueta textual. Nunca falla: lo desconocido es `Unknown`.
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "CC" => PosTag::CoordConj,
            "CD" => PosTag::Cardinal,
            "DT" => PosTag::Determiner,
            "EX" => PosTag::Existential,
            "FW" => PosTag::Foreign,
            "IN" => PosTag::Preposition,
            "JJ" => PosTag::Adjective,
            "JJR" => PosTag::AdjectiveComparative,
            "JJS" => PosTag::AdjectiveSuperlative,
            "LS" => PosTag::ListMarker,
            "MD" => PosTag::Modal,
            "NN" => PosTag::Noun,
            "NNS" => PosTag::NounPlural,
            "NNP" => PosTag::ProperNoun,
            "NNPS" => PosTag::ProperNounPlural,
            "PDT" => PosTag::Predeterminer,
            "POS" => PosTag::PossessiveEnding,
            "PRP" => PosTag::Pronoun,
            "PRP$" => PosTag::PossessivePronoun,
            "RB" => PosTag::Adverb,
            "RBR" => PosTag::AdverbComparative,
            "RBS" => PosTag::AdverbSuperlative,
            "RP" => PosTag::Particle,
            "SYM" => PosTag::Symbol,
            "TO" => PosTag::To,
            "UH" => PosTag::Interjection,
            "VB" => PosTag::Verb,
            "VBD" => PosTag::VerbPast,
            "VBG" => PosTag::VerbGerund,
            "VBN" => PosTag::VerbPastParticiple,
            "VBP" => PosTag::VerbNon3rdSing,
            "VBZ" => PosTag::Verb3rdSing,
            "WDT" => PosTag::WhDeterminer,
            "WP" => PosTag::WhPronoun,
            "WP$" => PosTag::WhPossessive,
            "WRB" => PosTag::WhAdverb,
            "." => PosTag::Punctuation(PunctTag::Terminal),
            "," => PosTag::Punctuation(PunctTag::Comma),
            ":" => PosTag::Punctuation(PunctTag::Colon),
            "(" | "-LRB-" => PosTag::Punctuation(PunctTag::OpenParen),
            ")" | "-RRB-" => PosTag::Punctuation(PunctTag::CloseParen),
            "``" => PosTag::Punctuation(PunctTag::OpenQuote),
            "''" => PosTag::Punctuation(PunctTag::CloseQuote),
            "#" => PosTag::Punctuation(PunctTag::Hash),
            "$" => PosTag::Punctuation(PunctTag::Dollar),
            _ => PosTag::Unknown,
        }
    }

    /// Etiqueta Penn Treebank
    pub fn penn_tag(&self) -> &'static str {
        match self {
            PosTag::CoordConj => "CC",
            PosTag::Cardinal => "CD",
            PosTag::Determiner => "DT",
            PosTag::Existential => "EX",
            PosTag::Foreign => "FW",
            PosTag::Preposition => "IN",
            PosTag::Adjective => "JJ",
            PosTag::AdjectiveComparative => "JJR",
            PosTag::AdjectiveSuperlative => "JJS",
            PosTag::ListMarker => "LS",
            PosTag::Modal => "MD",
            PosTag::Noun => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::ProperNounPlural => "NNPS",
            PosTag::Predeterminer => "PDT",
            PosTag::PossessiveEnding => "POS",
            PosTag::Pronoun => "PRP",
            PosTag::PossessivePronoun => "PRP$",
            PosTag::Adverb => "RB",
            PosTag::AdverbComparative => "RBR",
            PosTag::AdverbSuperlative => "RBS",
            PosTag::Particle => "RP",
            PosTag::Symbol => "SYM",
            PosTag::To => "TO",
            PosTag::Interjection => "UH",
            PosTag::Verb => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbPastParticiple => "VBN",
            PosTag::VerbNon3rdSing => "VBP",
            PosTag::Verb3rdSing => "VBZ",
            PosTag::WhDeterminer => "WDT",
            PosTag::WhPronoun => "WP",
            PosTag::WhPossessive => "WP$",
            PosTag::WhAdverb => "WRB",
            PosTag::Punctuation(PunctTag::Terminal) => ".",
            PosTag::Punctuation(PunctTag::Comma) => ",",
            PosTag::Punctuation(PunctTag::Colon) => ":",
            PosTag::Punctuation(PunctTag::OpenParen) => "(",
            PosTag::Punctuation(PunctTag::CloseParen) => ")",
            PosTag::Punctuation(PunctTag::OpenQuote) => "``",
            PosTag::Punctuation(PunctTag::CloseQuote) => "''",
            PosTag::Punctuation(PunctTag::Hash) => "#",
            PosTag::Punctuation(PunctTag::Dollar) => "$",
            PosTag::Unknown => "UNK",
        }
    }

    /// NN, NNS, NNP, NNPS
    pub fn is_noun(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::NounPlural | PosTag::ProperNoun | PosTag::ProperNounPlural
        )
    }

    pub fn is_proper_noun(&self) -> bool {
        matches!(self, PosTag::ProperNoun | PosTag::ProperNounPlural)
    }

    pub fn is_plural_noun(&self) -> bool {
        matches!(self, PosTag::NounPlural | PosTag::ProperNounPlural)
    }

    /// PRP (sin el posesivo PRP$)
    pub fn is_pronoun(&self) -> bool {
        *self == PosTag::Pronoun
    }

    pub fn is_possessive(&self) -> bool {
        *self == PosTag::PossessivePronoun
    }

    pub fn is_determiner(&self) -> bool {
        *self == PosTag::Determiner
    }

    /// Determinante o posesivo: puede abrir una frase nominal
    pub fn opens_noun_phrase(&self) -> bool {
        self.is_determiner() || self.is_possessive()
    }

    pub fn is_adjective(&self) -> bool {
        matches!(
            self,
            PosTag::Adjective | PosTag::AdjectiveComparative | PosTag::AdjectiveSuperlative
        )
    }

    pub fn is_adverb(&self) -> bool {
        matches!(
            self,
            PosTag::Adverb | PosTag::AdverbComparative | PosTag::AdverbSuperlative
        )
    }

    /// Todas las formas VB*
    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::Verb
                | PosTag::VerbPast
                | PosTag::VerbGerund
                | PosTag::VerbPastParticiple
                | PosTag::VerbNon3rdSing
                | PosTag::Verb3rdSing
        )
    }

    pub fn is_modal(&self) -> bool {
        *self == PosTag::Modal
    }

    /// IN: preposición o conjunción subordinante
    pub fn is_preposition(&self) -> bool {
        *self == PosTag::Preposition
    }

    pub fn is_particle(&self) -> bool {
        *self == PosTag::Particle
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self, PosTag::Punctuation(_))
    }

    /// Candidato a sujeto: sustantivo o pronombre personal
    pub fn is_subject_candidate(&self) -> bool {
        self.is_noun() || self.is_pronoun()
    }
}

impl From<String> for PosTag {
    fn from(label: String) -> Self {
        PosTag::parse(&label)
    }
}

impl From<&str> for PosTag {
    fn from(label: &str) -> Self {
        PosTag::parse(label)
    }
}

impl From<PosTag> for String {
    fn from(tag: PosTag) -> Self {
        tag.penn_tag().to_string()
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.penn_tag())
    }
}
