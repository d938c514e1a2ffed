//! Rich error formatting for assertion failures.

use std::fmt::{self, Write};

use layered_hobbs::{ParseTree, Position};

use crate::fixture::{Assertion, Case};
use crate::matcher::{AssertionOutcome, Resolution};

/// Words of `tree` with the antecedent in `[...]` and the pronoun in `<...>`.
///
/// ```text
/// [John] said Mary likes <him>
/// ```
pub fn annotate(tree: &ParseTree, antecedent: Option<&Position>, pronoun: Option<&Position>) -> String {
    let antecedent = antecedent.and_then(|pos| tree.leaf_span(pos));
    let pronoun = pronoun.and_then(|pos| tree.leaf_span(pos));

    let mut words = Vec::new();
    for (i, word) in tree.leaves().into_iter().enumerate() {
        let mut out = String::new();
        if antecedent.as_ref().map_or(false, |span| span.start == i) {
            out.push('[');
        }
        if pronoun.as_ref().map_or(false, |span| span.start == i) {
            out.push('<');
        }
        out.push_str(word);
        if pronoun.as_ref().map_or(false, |span| span.end == i + 1) {
            out.push('>');
        }
        if antecedent.as_ref().map_or(false, |span| span.end == i + 1) {
            out.push(']');
        }
        words.push(out);
    }
    words.join(" ")
}

/// Format a failed assertion with the case annotated by what was resolved.
pub fn format_failure(
    fixture_name: &str,
    case: &Case,
    assertion: &Assertion,
    resolution: &Resolution,
    outcome: &AssertionOutcome,
) -> String {
    let mut output = String::new();
    // writing into a String cannot fail
    write_failure(&mut output, fixture_name, case, assertion, resolution, outcome).ok();
    output
}

fn write_failure(
    output: &mut String,
    fixture_name: &str,
    case: &Case,
    assertion: &Assertion,
    resolution: &Resolution,
    outcome: &AssertionOutcome,
) -> fmt::Result {
    writeln!(output, "\nFAIL: {}:{} (C{})", fixture_name, assertion.source_line, case.index)?;
    writeln!(output)?;

    let found = match resolution {
        Resolution::Found {
            sentence, position, ..
        } => Some((*sentence, position)),
        _ => None,
    };
    let last = case.sentences.len().saturating_sub(1);
    for (i, tree) in case.sentences.iter().enumerate() {
        let antecedent = found.filter(|(s, _)| *s == i).map(|(_, pos)| pos);
        let pronoun = if i == last { Some(&case.pronoun) } else { None };
        writeln!(output, "  {}", annotate(tree, antecedent, pronoun))?;
    }
    writeln!(output)?;

    match outcome {
        AssertionOutcome::Failed(mismatches) => {
            writeln!(output, "  antecedent of \"{}\" differs:", case.pronoun_word)?;
            for field in mismatches {
                writeln!(
                    output,
                    "    \u{2717} {}: expected `{}`, found `{}`",
                    field.field, field.expected, field.actual
                )?;
            }
        }
        AssertionOutcome::KindMismatch { expected, actual } => {
            writeln!(output, "  expected {}, found {}", expected, actual)?;
            if let Some(err) = resolution.error() {
                writeln!(output, "    {}", err)?;
            }
        }
        AssertionOutcome::InvalidCase => {
            writeln!(output, "  case cannot be resolved")?;
            if let Some(err) = resolution.error() {
                writeln!(output, "    {}", err)?;
            }
        }
        AssertionOutcome::Passed => {
            writeln!(output, "  (passed)")?;
        }
    }

    writeln!(output)?;
    writeln!(output, "  Assertion was: {}", assertion)?;
    Ok(())
}

/// Format a summary of one fixture's results.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let status = if regressions > 0 { "FAIL" } else { "PASS" };
    format!(
        "\n{}: {}\n  {} passed, {} failed ({} expected, {} regressions)\n",
        status, fixture_name, passed, failed, expected_failures, regressions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{check_assertion, resolve_case};
    use crate::parse_fixture;
    use layered_hobbs::{HobbsResolver, NameTable};

    fn tree(input: &str) -> ParseTree {
        input.parse().unwrap()
    }

    #[test]
    fn test_annotate() {
        let t = tree("(S (NP (NNP John)) (VP (VBD said) (SBAR (S (NP (NNP Mary)) (VP (VBD likes) (NP (PRP him)))))))");
        assert_eq!(
            annotate(&t, Some(&Position::from([0])), Some(&Position::from([1, 1, 0, 1, 1, 0]))),
            "[John] said Mary likes <him>"
        );
        assert_eq!(annotate(&t, None, None), "John said Mary likes him");
    }

    #[test]
    fn test_annotate_nested() {
        let t = tree("(S (NP (DT the) (NN dog) (SBAR (IN that) (S (NP (PRP it)) (VP (VBD chased) (NP (NNS cats)))))) (VP (VBD ran)))");
        assert_eq!(
            annotate(&t, Some(&Position::from([0])), Some(&Position::from([0, 2, 1, 0, 0]))),
            "[the dog that <it> chased cats] ran"
        );
    }

    #[test]
    fn test_format_failure() {
        let fixture = parse_fixture(
            "# Failures\n(S (NP (NNS dogs)) (VP (VBD chased) (NP (PRP <it>))))\n> Antecedent(text=dogs)",
        )
        .unwrap();
        let case = &fixture.cases[0];
        let resolver = HobbsResolver::new(NameTable::empty());
        let resolution = resolve_case(case, &resolver);
        let outcome = check_assertion(&case.assertions[0], &resolution);

        insta::assert_snapshot!(
            format_failure("chase.hobbs", case, &case.assertions[0], &resolution, &outcome),
            @r###"
        FAIL: chase.hobbs:3 (C0)

          dogs chased <it>

          expected Antecedent, found NoAntecedent

          Assertion was: Antecedent(text=dogs)
        "###
        );
    }

    #[test]
    fn test_format_field_mismatch() {
        let fixture = parse_fixture(
            "(S (NP (DT the) (NN cat)) (VP (VBD slept)))\n(S (NP (NNS dogs)) (VP (VBD chased) (NP (PRP <it>))))\n> Antecedent(text=the dog)",
        )
        .unwrap();
        let case = &fixture.cases[0];
        let resolver: HobbsResolver = HobbsResolver::default();
        let resolution = resolve_case(case, &resolver);
        let outcome = check_assertion(&case.assertions[0], &resolution);

        let output = format_failure("prior.hobbs", case, &case.assertions[0], &resolution, &outcome);
        assert!(output.contains("[the cat] slept"));
        assert!(output.contains("dogs chased <it>"));
        assert!(output.contains("text: expected `=the dog`, found `the cat`"));
    }

    #[test]
    fn test_format_invalid_case() {
        let fixture = parse_fixture("(S <it> (VP (VBD rained)))\n> StructuralError()").unwrap();
        let case = &fixture.cases[0];
        let resolver: HobbsResolver = HobbsResolver::default();
        let resolution = resolve_case(case, &resolver);
        let outcome = check_assertion(&case.assertions[0], &resolution);

        let output = format_failure("weather.hobbs", case, &case.assertions[0], &resolution, &outcome);
        assert!(output.contains("case cannot be resolved"));
        assert!(output.contains("Assertion was: StructuralError()"));
    }

    #[test]
    fn test_format_summary_pass() {
        let output = format_summary("basic.hobbs", 10, 0, 0, 0);
        assert!(output.contains("PASS: basic.hobbs"));
        assert!(output.contains("10 passed"));
    }

    #[test]
    fn test_format_summary_with_regressions() {
        let output = format_summary("basic.hobbs", 10, 2, 1, 1);
        assert!(output.contains("FAIL: basic.hobbs"));
        assert!(output.contains("1 regressions"));
    }
}
