use std::collections::BTreeMap;

use resume_fit::catalog::{AdviceTable, IndicatorTable, RoleProfile};
use resume_fit::report::{JsonRenderer, ReportRenderer};
use resume_fit::types::{
    EvaluationRequest, EvaluationResult, FuzzyEvidence, IndicatorScore, ItemScore, ResumeDigest,
    SectionAverages, SectionScore,
};
use resume_fit::Evaluator;

const RESUME: &str = "Estudiante de ingeniería industrial. Coordiné la logística del congreso \
                      regional y lideré el equipo de mercadeo del capítulo. Miembro de ANEIAP \
                      desde 2021, con experiencia en organización de eventos académicos.";

fn fixtures() -> (RoleProfile, IndicatorTable, AdviceTable) {
    let profile = RoleProfile::new(
        [
            "Coordinar la logística de eventos",
            "Liderar equipos de trabajo",
            "Gestionar el presupuesto del capítulo",
        ],
        ["Responsabilidad", "Trabajo en equipo", "Comunicación asertiva"],
    );

    let mut indicators = IndicatorTable::new();
    indicators.insert(
        "UNINORTE",
        "DCA",
        "Experiencia en ANEIAP",
        vec!["ANEIAP".into(), "capítulo".into()],
    );
    indicators.insert(
        "UNINORTE",
        "DCA",
        "Eventos organizados",
        vec!["congreso".into(), "eventos".into(), "feria".into()],
    );
    indicators.insert("UNINORTE", "DCA", "Finanzas", vec!["presupuesto".into()]);

    let mut advice = AdviceTable::new();
    advice.insert("DCA", "Finanzas", vec!["Toma un curso de finanzas".into()]);

    (profile, indicators, advice)
}

#[test]
fn repeated_evaluations_are_identical() {
    let (profile, indicators, advice) = fixtures();
    let evaluator = Evaluator::default();
    let request = EvaluationRequest::new("DCA", "UNINORTE", RESUME).with_candidate("Ana");

    let first = evaluator.evaluate(&request, &profile, &indicators, &advice);
    let second = evaluator.evaluate(&request, &profile, &indicators, &advice);

    assert_eq!(first, second);

    let renderer = JsonRenderer { pretty: false };
    assert_eq!(renderer.render(&first).unwrap(), renderer.render(&second).unwrap());
}

#[test]
fn fresh_evaluators_agree() {
    let (profile, indicators, advice) = fixtures();
    let request = EvaluationRequest::new("DCA", "UNINORTE", RESUME);

    let a = Evaluator::default().evaluate(&request, &profile, &indicators, &advice);
    let b = Evaluator::new(Default::default())
        .unwrap()
        .evaluate(&request, &profile, &indicators, &advice);

    assert_eq!(a, b);
}

#[test]
fn shared_evaluator_across_threads() {
    let (profile, indicators, advice) = fixtures();
    let evaluator = Evaluator::default();
    let request = EvaluationRequest::new("DCA", "UNINORTE", RESUME);

    let expected = evaluator.evaluate(&request, &profile, &indicators, &advice);

    let (evaluator, request) = (&evaluator, &request);
    let (profile, indicators, advice) = (&profile, &indicators, &advice);
    let results: Vec<EvaluationResult> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || evaluator.evaluate(request, profile, indicators, advice)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
fn resume_digest_is_content_hash() {
    assert_eq!(
        ResumeDigest::from_text("").as_str(),
        "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );

    let a = ResumeDigest::from_text(RESUME);
    let b = ResumeDigest::from_text(RESUME);
    let c = ResumeDigest::from_text("otro texto");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn golden_result_serialization() {
    // 1. Hand-built result
    let duty = ItemScore {
        item: "Coordinar eventos".to_string(),
        raw: 0.5,
        score: 3.0,
        overlap: 0.5,
        fuzzy: 0.5,
        verb: 0.5,
        evidence_exact: vec!["eventos".to_string()],
        evidence_fuzzy: vec![FuzzyEvidence {
            item: "coordinar".to_string(),
            matched: "coordine".to_string(),
            similarity: 0.78,
        }],
    };

    let indicator = IndicatorScore {
        name: "Finanzas".to_string(),
        score: 1.0,
        ratio: 0.0,
        matches: Vec::new(),
    };

    let section = |raw: f64, score: f64| SectionScore { raw, score };

    let mut suggestions = BTreeMap::new();
    suggestions.insert("Finanzas".to_string(), "Toma un curso".to_string());

    let result = EvaluationResult {
        candidate: Some("Ana".to_string()),
        role: "DCA".to_string(),
        chapter: "UNINORTE".to_string(),
        resume_digest: ResumeDigest::from_text(""),
        duties: vec![duty],
        profile: Vec::new(),
        indicators: vec![indicator],
        presentation: 1.0,
        averages: SectionAverages {
            duties: section(0.5, 3.0),
            profile: section(0.0, 1.0),
            indicators: section(0.0, 1.0),
            presentation: section(0.0, 1.0),
        },
        global: section(0.125, 1.5),
        suggestions,
    };

    // 2. Serialize
    let json = JsonRenderer { pretty: false }.render(&result).unwrap();

    // 3. Key order follows declaration order
    let role_pos = json.find("\"role\":").unwrap();
    let duties_pos = json.find("\"duties\":[").unwrap();
    let global_pos = json.find("\"global\":").unwrap();
    let suggestions_pos = json.find("\"suggestions\":").unwrap();
    assert!(role_pos < duties_pos);
    assert!(duties_pos < global_pos);
    assert!(global_pos < suggestions_pos);

    // 4. Snapshot
    const EXPECTED_JSON: &str = concat!(
        r#"{"candidate":"Ana","role":"DCA","chapter":"UNINORTE","#,
        r#""resume_digest":"sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855","#,
        r#""duties":[{"item":"Coordinar eventos","raw":0.5,"score":3.0,"overlap":0.5,"fuzzy":0.5,"verb":0.5,"#,
        r#""evidence_exact":["eventos"],"evidence_fuzzy":[{"item":"coordinar","match":"coordine","similarity":0.78}]}],"#,
        r#""profile":[],"#,
        r#""indicators":[{"name":"Finanzas","score":1.0,"ratio":0.0,"matches":[]}],"#,
        r#""presentation":1.0,"#,
        r#""averages":{"duties":{"raw":0.5,"score":3.0},"profile":{"raw":0.0,"score":1.0},"#,
        r#""indicators":{"raw":0.0,"score":1.0},"presentation":{"raw":0.0,"score":1.0}},"#,
        r#""global":{"raw":0.125,"score":1.5},"#,
        r#""suggestions":{"Finanzas":"Toma un curso"}}"#,
    );
    assert_eq!(json, EXPECTED_JSON);

    // 5. Round trip
    let parsed: EvaluationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn anonymous_results_omit_candidate() {
    let (profile, indicators, advice) = fixtures();
    let result = Evaluator::default().evaluate(
        &EvaluationRequest::new("DCA", "UNINORTE", RESUME),
        &profile,
        &indicators,
        &advice,
    );

    let json = JsonRenderer::default().render(&result).unwrap();
    assert!(!json.contains("\"candidate\""));
    assert!(json.starts_with("{\"role\":\"DCA\""));
}
