use crate::{
    load_all_fixtures, load_fixture, run_harness, AssertionKind, ExpectedFailures,
    FailureState, HarnessConfig, HobbsFixture,
};
use layered_hobbs::Position;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn fixture(name: &str) -> HobbsFixture {
    load_fixture(&fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

#[test]
fn test_single_sentence_fixture() {
    let fixture = fixture("single-sentence.hobbs");

    assert_eq!(fixture.title.as_deref(), Some("Single sentence resolution"));
    assert_eq!(fixture.cases.len(), 12);
    assert_eq!(
        fixture.cases[11].assertions[0].kind,
        AssertionKind::NoAntecedent
    );
    assert_eq!(fixture.cases[0].pronoun, Position::from([1, 1, 0]));
    assert_eq!(fixture.cases[0].assertions[0].body.field_checks.len(), 4);
    assert_eq!(fixture.cases[2].pronoun_word, "herself");
}

#[test]
fn test_discourse_fixture() {
    let fixture = fixture("discourse.hobbs");

    assert_eq!(fixture.cases.len(), 5);
    assert_eq!(fixture.cases[0].sentences.len(), 2);
    assert_eq!(fixture.cases[2].sentences.len(), 3);
    assert_eq!(fixture.cases[2].assertions[0].kind, AssertionKind::NoAntecedent);
    assert_eq!(
        fixture.cases[1].text(),
        "John met Bill\nHe left"
    );
}

#[test]
fn test_structural_fixture() {
    let fixture = fixture("structural.hobbs");
    assert!(fixture
        .cases
        .iter()
        .flat_map(|c| &c.assertions)
        .all(|a| a.kind == AssertionKind::StructuralError));
}

#[test]
fn test_expected_failures_file() {
    let expected = ExpectedFailures::load(&fixtures_dir().join("expected-failures.toml")).unwrap();
    assert_eq!(expected.count(), 1);
    assert_eq!(
        expected.is_expected("single-sentence.hobbs", "C8"),
        FailureState::Known
    );
}

#[test]
fn test_all_fixtures_pass() {
    let dir = fixtures_dir();
    let config = HarnessConfig::load(&dir.join("harness.toml")).unwrap();
    let resolver = config.resolver().unwrap();
    let expected = ExpectedFailures::load(&dir.join("expected-failures.toml")).unwrap();
    let fixtures = load_all_fixtures(&dir).unwrap();

    let result = run_harness(&fixtures, &resolver, &expected)
        .into_result()
        .unwrap_or_else(|e| panic!("{}", e));

    assert_eq!(result.total, 20);
    assert_eq!(result.expected_failures, 1);
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn test_all_mode_reaches_earlier_sentences() {
    let dir = fixtures_dir();
    let mut config = HarnessConfig::load(&dir.join("harness.toml")).unwrap();
    config.prior_sentences = layered_hobbs::PriorSentenceSearch::All;
    let resolver = config.resolver().unwrap();

    let fixtures = vec![("discourse.hobbs".to_string(), fixture("discourse.hobbs"))];
    let report = run_harness(&fixtures, &resolver, &ExpectedFailures::default());

    // the three-sentence case now finds "the cat"
    assert_eq!(report.result.regressions, 1);
    assert!(report.output.contains("(C2)"));
    assert!(report.output.contains("[the cat] slept"));
}
