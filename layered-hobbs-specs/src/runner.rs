//! Running fixtures through the resolver.

use layered_hobbs::{GenderLookup, HobbsResolver};

use crate::errors::{SpecError, SpecResult};
use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::fixture::{Assertion, Case, HobbsFixture};
use crate::formatter::{format_failure, format_summary};
use crate::matcher::{check_assertion, resolve_case, AssertionOutcome, Resolution};

/// Result of one case: what it resolved to and how each assertion fared.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub case_index: usize,
    pub resolution: Resolution,
    pub outcomes: Vec<(Assertion, AssertionOutcome)>,
}

/// Resolve every case of a fixture and check its assertions.
pub fn run_fixture<G: GenderLookup>(
    fixture: &HobbsFixture,
    resolver: &HobbsResolver<G>,
) -> Vec<CaseResult> {
    fixture
        .cases
        .iter()
        .map(|case| {
            let resolution = resolve_case(case, resolver);
            let outcomes = case
                .assertions
                .iter()
                .map(|assertion| (assertion.clone(), check_assertion(assertion, &resolution)))
                .collect();
            CaseResult {
                case_index: case.index,
                resolution,
                outcomes,
            }
        })
        .collect()
}

/// Counts and printable report of a harness run.
#[derive(Debug, Clone, Default)]
pub struct HarnessReport {
    pub result: HarnessResult,
    pub output: String,
}

impl HarnessReport {
    /// The counts of a clean run, or an assertion error carrying the report.
    pub fn into_result(self) -> SpecResult<HarnessResult> {
        if self.result.success() {
            Ok(self.result)
        } else {
            Err(SpecError::Assertion {
                message: format!(
                    "{} regressions in {} assertions\n{}",
                    self.result.regressions, self.result.total, self.output
                ),
            })
        }
    }
}

/// Run every fixture, classify failures against `expected`, and build a report.
pub fn run_harness<G: GenderLookup>(
    fixtures: &[(String, HobbsFixture)],
    resolver: &HobbsResolver<G>,
    expected: &ExpectedFailures,
) -> HarnessReport {
    let mut report = HarnessReport::default();

    for (name, fixture) in fixtures {
        let mut fixture_result = HarnessResult::new();
        let mut failed = 0;

        for case_result in run_fixture(fixture, resolver) {
            let case_ref = ExpectedFailures::format_ref(case_result.case_index);
            for (assertion, outcome) in &case_result.outcomes {
                if outcome.is_passed() {
                    fixture_result.record_pass();
                    continue;
                }

                failed += 1;
                let state = expected.is_expected(name, &case_ref);
                fixture_result.record_failure(state);
                if state == FailureState::Regression {
                    log::warn!("regression in {} {}: {}", name, case_ref, assertion);
                    if let Some(case) = find_case(fixture, case_result.case_index) {
                        report.output.push_str(&format_failure(
                            name,
                            case,
                            assertion,
                            &case_result.resolution,
                            outcome,
                        ));
                    }
                }
            }
        }

        log::info!(
            "{}: {} of {} assertions passed",
            name,
            fixture_result.passed,
            fixture_result.total
        );
        report.output.push_str(&format_summary(
            name,
            fixture_result.passed,
            failed,
            fixture_result.expected_failures,
            fixture_result.regressions,
        ));
        report.result.merge(&fixture_result);
    }

    report
}

fn find_case(fixture: &HobbsFixture, index: usize) -> Option<&Case> {
    fixture.cases.iter().find(|case| case.index == index)
}
