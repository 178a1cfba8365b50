//! Tests de integración de la reconstrucción sintáctica.
//!
//! Ejecutar solo estos tests:  cargo test --test reconstruction

use pretty_assertions::assert_eq;
use reconstructor::grammar::rules::{ProblemKind, RuleEngine};
use reconstructor::grammar::{PosTag, TaggedToken, Tokenizer};
use reconstructor::{
    Analysis, Reconstructor, ReconstructorConfig, ReportObserver, SlashTagger, Tagger,
};

fn create_test_reconstructor() -> Reconstructor {
    Reconstructor::new(&ReconstructorConfig::default())
}

fn reconstruct(line: &str) -> Analysis {
    let tokens = Tokenizer::new().tokenize(line);
    create_test_reconstructor().reconstruct(&tokens)
}

#[test]
fn test_adverb_start_with_pronoun_is_reordered() {
    let analysis = reconstruct("quickly/RB he/PRP ran/VBD");
    assert!(
        analysis.problems.is_empty(),
        "No debería detectar inicio inusual con pronombre detrás: {:?}",
        analysis.problems
    );
    assert_eq!(analysis.svo.subject, vec!["he"]);
    assert_eq!(analysis.svo.verb, vec!["ran"]);
    assert_eq!(analysis.reconstructed, "He ran quickly.");
}

#[test]
fn test_doubled_determiner_is_not_repaired() {
    let analysis = reconstruct("the/DT the/DT dog/NN barks/VBZ");
    assert!(
        analysis.problems.is_empty(),
        "No hay regla para determinantes duplicados"
    );
    assert_eq!(analysis.noun_phrases.len(), 1);
    assert_eq!(analysis.noun_phrases[0].span.tokens, vec!["the", "dog"]);
    assert_eq!(analysis.verb_groups.len(), 1);
    assert!(analysis.verb_groups[0].is_main);
    assert_eq!(analysis.svo.other, vec!["the"]);
    assert_eq!(analysis.reconstructed, "The dog barks the.");
}

#[test]
fn test_empty_input_gives_empty_analysis() {
    let analysis = reconstruct("");
    assert_eq!(analysis.original, "");
    assert_eq!(analysis.reconstructed, "");
    assert!(analysis.noun_phrases.is_empty());
    assert!(analysis.verb_groups.is_empty());
    assert!(analysis.problems.is_empty());
    assert_eq!(analysis.clauses.main, 0..0);
    assert_eq!(analysis.clauses.dependent, None);
    assert!(analysis.svo.is_empty());
}

#[test]
fn test_punctuation_only_input_gives_empty_sentence() {
    for (line, original) in [(",/,", ","), ("./. ,/, !/.", ". , !")] {
        let analysis = reconstruct(line);
        assert_eq!(analysis.original, original);
        assert!(
            analysis.reconstructed.is_empty(),
            "Solo puntuación descartable: la reconstrucción debería quedar vacía: {:?}",
            analysis.reconstructed
        );
        assert!(analysis.svo.is_empty());
    }
}

#[test]
fn test_preposition_adjective_pulls_noun() {
    let analysis = reconstruct("she/PRP sat/VBD on/IN old/JJ the/DT bench/NN");
    assert_eq!(analysis.problems.len(), 1);
    let problem = &analysis.problems[0];
    assert_eq!(problem.kind, ProblemKind::PrepositionAdjectiveNoNoun);
    assert_eq!(problem.position, 2);
    assert_eq!(problem.original, vec!["on", "old"]);
    assert!(
        problem.fixed,
        "Debería encontrar 'bench' dentro de la ventana"
    );
    assert_eq!(analysis.svo.object, vec!["old", "bench"]);
    assert_eq!(analysis.reconstructed, "She sat old bench on the.");
}

#[test]
fn test_preposition_adjective_without_noun_is_left_unfixed() {
    let analysis = reconstruct("in/IN big/JJ ./.");
    assert_eq!(analysis.problems.len(), 1);
    assert!(
        !analysis.problems[0].fixed,
        "Sin sustantivo cercano el defecto queda registrado sin reparar"
    );
    assert_eq!(analysis.reconstructed, "In big.");
}

#[test]
fn test_missing_subject_is_pulled_in_front_of_verb() {
    let analysis = reconstruct("and/CC then/RB quickly/RB ran/VBD the/DT dog/NN");
    assert_eq!(analysis.problems.len(), 1);
    assert_eq!(analysis.problems[0].kind, ProblemKind::VerbWithoutSubject);
    assert_eq!(analysis.problems[0].position, 3);
    assert!(analysis.problems[0].fixed);
    assert_eq!(analysis.svo.subject, vec!["dog"]);
    assert_eq!(analysis.reconstructed, "Dog ran and then quickly the.");
}

#[test]
fn test_unusual_start_moves_adjective_after_noun() {
    let analysis = reconstruct("happy/JJ the/DT children/NNS played/VBD");
    assert_eq!(analysis.problems.len(), 1);
    assert_eq!(analysis.problems[0].kind, ProblemKind::UnusualStart);
    assert!(analysis.problems[0].fixed);
    assert_eq!(analysis.svo.subject, vec!["the", "children"]);
    assert_eq!(analysis.reconstructed, "The children played happy.");
}

#[test]
fn test_exhausted_budget_records_without_fixing() {
    let reconstructor = Reconstructor::new(&ReconstructorConfig {
        rules: RuleEngine::standard(),
        max_rewrites: 0,
    });
    let tokens = Tokenizer::new().tokenize("happy/JJ the/DT children/NNS played/VBD");
    let analysis = reconstructor.reconstruct(&tokens);
    assert_eq!(analysis.problems.len(), 1);
    assert!(
        !analysis.problems[0].fixed,
        "Con presupuesto cero no se aplica ninguna reescritura"
    );
}

#[test]
fn test_leading_subordinate_clause_moves_after_main() {
    let analysis = reconstruct("because/IN it/PRP rained/VBD ,/, we/PRP stayed/VBD home/NN");
    assert_eq!(analysis.clauses.subordinate_positions, vec![0]);
    assert_eq!(analysis.clauses.dependent, Some(0..4));
    assert_eq!(analysis.clauses.main, 4..7);
    assert_eq!(analysis.reconstructed, "We stayed home, because it rained.");
}

#[test]
fn test_trailing_subordinate_clause() {
    let analysis = reconstruct(
        "we/PRP left/VBD the/DT party/NN after/IN midnight/NN struck/VBD",
    );
    assert_eq!(analysis.clauses.main, 0..4);
    assert_eq!(analysis.clauses.dependent, Some(4..7));
    assert_eq!(
        analysis.reconstructed,
        "We left the party, after midnight struck."
    );
}

#[test]
fn test_unknown_tags_survive_as_residue() {
    let analysis = reconstruct("he/PRP ran/VBD zzz/XYZ");
    assert_eq!(analysis.svo.other, vec!["zzz"]);
    assert_eq!(analysis.reconstructed, "He ran zzz.");
}

#[test]
fn test_report_observer_produces_step_report() {
    let reconstructor = create_test_reconstructor();
    let tokens = Tokenizer::new().tokenize("happy/JJ the/DT children/NNS played/VBD");
    let mut observer = ReportObserver::new();
    let analysis = reconstructor.reconstruct_with_observer(&tokens, &mut observer);
    let report = observer.report();

    assert!(
        report.contains("happy the children played"),
        "Falta la oración original: {}",
        report
    );
    assert!(
        report.contains("unusual_start"),
        "Falta el problema detectado: {}",
        report
    );
    assert!(
        report.contains("the/DT children/NNS happy/JJ played/VBD"),
        "Falta la secuencia reparada en formato palabra/ETIQUETA: {}",
        report
    );
    assert!(
        report.contains(&analysis.reconstructed),
        "Falta la reconstrucción: {}",
        report
    );
}

#[test]
fn test_verbose_flag_does_not_change_result() {
    let reconstructor = create_test_reconstructor();
    let tokens = Tokenizer::new().tokenize("quickly/RB he/PRP ran/VBD");
    assert_eq!(
        reconstructor.reconstruct_verbose(&tokens, true),
        reconstructor.reconstruct_verbose(&tokens, false)
    );
}

#[test]
fn test_batch_matches_sequential() {
    let reconstructor = create_test_reconstructor();
    let tokenizer = Tokenizer::new();
    let sentences: Vec<Vec<TaggedToken>> = [
        "quickly/RB he/PRP ran/VBD",
        "the/DT the/DT dog/NN barks/VBZ",
        "",
        "because/IN it/PRP rained/VBD ,/, we/PRP stayed/VBD home/NN",
    ]
    .iter()
    .map(|line| tokenizer.tokenize(line))
    .collect();

    let batch = reconstructor.reconstruct_batch(&sentences);
    let sequential: Vec<Analysis> = sentences
        .iter()
        .map(|s| reconstructor.reconstruct(s))
        .collect();
    assert_eq!(batch, sequential);
}

/// Etiquetador de prueba: todo es sustantivo
struct AllNouns;

impl Tagger for AllNouns {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        text.split_whitespace()
            .map(|word| TaggedToken::new(word, PosTag::Noun))
            .collect()
    }
}

#[test]
fn test_handoff_uses_external_tagger() {
    let reconstructor = create_test_reconstructor();
    let analysis = reconstruct("quickly/RB he/PRP ran/VBD");

    let handoff = reconstructor.handoff(&analysis, Some(&AllNouns));
    assert_eq!(handoff.sentence, "He ran quickly.");
    let retagged = handoff.retagged.unwrap_or_default();
    assert_eq!(retagged.len(), 3);
    assert!(retagged.iter().all(|t| t.tag == PosTag::Noun));

    let slash = SlashTagger::new();
    let handoff = reconstructor.handoff(&analysis, Some(&slash));
    let retagged = handoff.retagged.unwrap_or_default();
    assert_eq!(retagged.len(), 3);
    assert!(
        retagged.iter().all(|t| t.tag == PosTag::Unknown),
        "Texto sin barras: todas las etiquetas deberían ser Unknown"
    );

    let handoff = reconstructor.handoff(&analysis, None);
    assert_eq!(handoff.retagged, None);
}

#[test]
fn test_analysis_serializes_to_json() {
    let analysis = reconstruct("happy/JJ the/DT children/NNS played/VBD");
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["reconstructed"], "The children played happy.");
    assert_eq!(json["problems"][0]["kind"], "unusual_start");
    assert_eq!(json["noun_phrases"][0]["tokens"][1], "children");
    assert_eq!(json["verb_groups"][0]["is_main"], true);
    assert_eq!(json["clauses"]["main"]["end"], 4);
    assert!(json["clauses"]["dependent"].is_null());
    assert_eq!(json["svo"]["other"][0], "happy");
}

#[test]
fn test_json_input_round_trips_tokens() {
    let json = r#"[["quickly","RB"],["he","PRP"],["ran","VBD"]]"#;
    let tokens: Vec<TaggedToken> = serde_json::from_str(json).unwrap();
    assert_eq!(tokens[1].tag, PosTag::Pronoun);
    assert_eq!(
        create_test_reconstructor().reconstruct(&tokens).reconstructed,
        "He ran quickly."
    );
    assert_eq!(
        serde_json::to_string(&tokens[0]).unwrap(),
        r#"["quickly","RB"]"#
    );
}
