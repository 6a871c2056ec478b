use resume_fit::scoring::{score_item, ItemScorer};
use resume_fit::ScoringConfig;

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn duty_with_conjugated_verb_gets_exact_and_fuzzy_evidence() {
    let score = score_item("Coordinar eventos", "Coordiné eventos de la organización");

    assert_eq!(score.item, "Coordinar eventos");
    assert_eq!(score.evidence_exact, vec!["eventos"]);
    assert_eq!(score.evidence_fuzzy.len(), 1);

    let fuzzy = &score.evidence_fuzzy[0];
    assert_eq!(fuzzy.item, "coordinar");
    assert_eq!(fuzzy.matched, "coordine");
    assert_eq!(fuzzy.similarity, 0.78);

    assert!(approx(score.overlap, 0.5));
    assert!(approx(score.fuzzy, (7.0 / 9.0 + 1.0) / 2.0));
    // The item names "coordinar"; the résumé only has "coordine".
    assert_eq!(score.verb, 0.0);

    assert!(approx(score.raw, 0.6 * 0.5 + 0.3 * (7.0 / 9.0 + 1.0) / 2.0));
    assert_eq!(score.score, 3.27);
}

#[test]
fn fully_covered_item_has_full_overlap() {
    let score = score_item(
        "Organizar reuniones semanales",
        "Me gusta organizar reuniones semanales con el equipo",
    );

    assert_eq!(score.overlap, 1.0);
    assert_eq!(score.fuzzy, 1.0);
    assert_eq!(score.verb, 1.0);
    assert!(approx(score.raw, 1.0));
    assert_eq!(score.score, 5.0);
    assert_eq!(
        score.evidence_exact,
        vec!["organizar", "reuniones", "semanales"]
    );
    assert!(score.evidence_fuzzy.is_empty());
}

#[test]
fn stopword_only_item_scores_zero() {
    let score = score_item("de la y el", "Coordinar y liderar eventos con el equipo");

    assert_eq!(score.raw, 0.0);
    assert_eq!(score.score, 1.0);
    assert_eq!(score.verb, 0.0);
    assert!(score.evidence_exact.is_empty());
    assert!(score.evidence_fuzzy.is_empty());
}

#[test]
fn empty_inputs_score_zero() {
    let empty_resume = score_item("Gestionar recursos", "");
    assert_eq!(empty_resume.raw, 0.0);
    assert_eq!(empty_resume.score, 1.0);

    let empty_item = score_item("", "Gestionar recursos");
    assert_eq!(empty_item.raw, 0.0);
    assert_eq!(empty_item.score, 1.0);
}

#[test]
fn verb_signal_saturates_at_two_resume_verbs() {
    let one = score_item("eventos académicos", "Solía coordinar eventos");
    assert_eq!(one.verb, 0.5);

    let two = score_item("eventos académicos", "Solía coordinar y liderar eventos");
    assert_eq!(two.verb, 1.0);

    let three = score_item("eventos académicos", "Coordinar, liderar y evaluar eventos");
    assert_eq!(three.verb, 1.0);
}

#[test]
fn verb_signal_tracks_item_verbs_when_present() {
    let score = score_item(
        "Planear y ejecutar el presupuesto",
        "Debía planear el presupuesto anual",
    );
    assert_eq!(score.verb, 0.5);
}

#[test]
fn exact_evidence_is_deduplicated() {
    let score = score_item("eventos eventos", "eventos");

    assert_eq!(score.evidence_exact, vec!["eventos"]);
    assert_eq!(score.overlap, 1.0);
}

#[test]
fn weak_fuzzy_matches_are_not_evidence() {
    let score = score_item("astronomía", "eventos");

    assert!(score.evidence_exact.is_empty());
    assert!(score.evidence_fuzzy.is_empty());
    assert!(score.fuzzy < 0.6);
}

#[test]
fn evidence_ignores_fuzzy_early_exit() {
    let config = ScoringConfig {
        fuzzy_early_exit: Some(0.7),
        ..ScoringConfig::v0()
    };
    let resume = config.lexicon.analyze("gestor gestiones");
    let score = ItemScorer::new(&config).score("gestión", &resume);

    // The score stops at "gestor", the evidence names the true best match.
    assert!(approx(score.fuzzy, 1.0 - 2.0 / 7.0));
    assert_eq!(score.evidence_fuzzy[0].matched, "gestiones");
    assert_eq!(score.evidence_fuzzy[0].similarity, 0.78);

    let full = score_item("gestión", "gestor gestiones");
    assert!(approx(full.fuzzy, 1.0 - 2.0 / 9.0));
}

#[test]
fn scores_stay_in_range() {
    let resume = "Estudiante de ingeniería industrial. Coordiné la logística del congreso \
                  regional, lideré el equipo de mercadeo y apoyé la tesorería del capítulo.";
    let items = [
        "Coordinar la logística de eventos",
        "Liderar equipos de trabajo",
        "Capacidad de análisis financiero",
        "Responsabilidad",
        "x",
    ];

    for item in items {
        let score = score_item(item, resume);
        assert!((0.0..=1.0).contains(&score.raw), "{item}: raw {}", score.raw);
        assert!((1.0..=5.0).contains(&score.score), "{item}: score {}", score.score);
        for sub in [score.overlap, score.fuzzy, score.verb] {
            assert!((0.0..=1.0).contains(&sub));
        }
    }
}

#[test]
fn leading_byte_order_mark_does_not_hide_first_word() {
    let score = score_item("Coordinar eventos", "\u{FEFF}Coordinar eventos");

    assert_eq!(score.overlap, 1.0);
    assert_eq!(score.evidence_exact, vec!["coordinar", "eventos"]);
    assert_eq!(score.score, 5.0);
}
