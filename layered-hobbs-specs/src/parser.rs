//! Parser for `.hobbs` fixture files.
//!
//! ```text
//! # Title
//! // comment
//! (S (NP (NNP John)) (VP (VBD saw) (NP (NNP Bill))))
//! (S (NP (PRP <He>)) (VP (VBD left)))
//! > Antecedent(text=John, sentence=0, position=0)
//! ---
//! ...
//! ```

use layered_hobbs::{ParseTree, Position};

use crate::errors::{SpecError, SpecResult};
use crate::fixture::{
    Assertion, AssertionBody, AssertionKind, Case, CompareOp, FieldCheck, HobbsFixture,
};

/// Lines collected for one case before parsing.
#[derive(Default)]
struct CaseLines<'a> {
    trees: Vec<(usize, &'a str)>,
    assertions: Vec<(usize, &'a str)>,
}

/// Parse a full `.hobbs` fixture file.
pub fn parse_fixture(input: &str) -> SpecResult<HobbsFixture> {
    let mut title = None;
    let mut blocks: Vec<CaseLines> = vec![CaseLines::default()];

    for (line_num, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        let line_num = line_num + 1;

        if trimmed.starts_with("# ") && title.is_none() {
            title = Some(trimmed[2..].trim().to_string());
        } else if trimmed == "---" {
            blocks.push(CaseLines::default());
        } else if let Some(assertion) = trimmed.strip_prefix('>') {
            if let Some(block) = blocks.last_mut() {
                block.assertions.push((line_num, assertion.trim()));
            }
        } else if !trimmed.is_empty() && !trimmed.starts_with("//") {
            if let Some(block) = blocks.last_mut() {
                block.trees.push((line_num, trimmed));
            }
        }
    }

    let mut cases = Vec::new();
    for block in blocks {
        if block.trees.is_empty() {
            if let Some(&(line, _)) = block.assertions.first() {
                return Err(SpecError::Parse {
                    line,
                    message: "assertion without a sentence".to_string(),
                });
            }
            continue;
        }
        let index = cases.len();
        cases.push(parse_case(index, block)?);
    }

    Ok(HobbsFixture { title, cases })
}

fn parse_case(index: usize, block: CaseLines<'_>) -> SpecResult<Case> {
    let source_line = block.trees[0].0;
    let last = block.trees.len() - 1;

    let mut sentences = Vec::with_capacity(block.trees.len());
    let mut marked = None;

    for (i, &(line, text)) in block.trees.iter().enumerate() {
        let mut tree: ParseTree = text.parse().map_err(|e| SpecError::Parse {
            line,
            message: format!("{}", e),
        })?;
        let markers = strip_markers(&mut tree);

        match (i == last, markers.as_slice()) {
            (true, [single]) => marked = Some(single.clone()),
            (true, []) => {
                return Err(SpecError::Parse {
                    line,
                    message: "last sentence has no <pronoun> marker".to_string(),
                })
            }
            (_, []) => {}
            (true, _) => {
                return Err(SpecError::Parse {
                    line,
                    message: format!("expected one <pronoun> marker, found {}", markers.len()),
                })
            }
            (false, _) => {
                return Err(SpecError::Parse {
                    line,
                    message: "only the last sentence may mark a pronoun".to_string(),
                })
            }
        }
        sentences.push(tree);
    }

    let (leaf, pronoun_word) = marked.ok_or_else(|| SpecError::Parse {
        line: source_line,
        message: "case has no pronoun".to_string(),
    })?;
    let pronoun = leaf.parent().ok_or_else(|| SpecError::Parse {
        line: block.trees[last].0,
        message: "pronoun marker must be inside a tag".to_string(),
    })?;

    let assertions = block
        .assertions
        .into_iter()
        .map(|(line, text)| parse_assertion(text, line))
        .collect::<SpecResult<Vec<_>>>()?;

    Ok(Case {
        index,
        sentences,
        pronoun,
        pronoun_word,
        assertions,
        source_line,
    })
}

/// Remove `<...>` from marked words, returning their positions and words.
fn strip_markers(tree: &mut ParseTree) -> Vec<(Position, String)> {
    let mut found = Vec::new();
    for pos in tree.leaf_positions() {
        if let Some(word) = tree.leaf_mut(&pos) {
            let inner = word
                .strip_prefix('<')
                .and_then(|w| w.strip_suffix('>'))
                .filter(|w| !w.is_empty())
                .map(str::to_string);
            if let Some(inner) = inner {
                *word = inner.clone();
                found.push((pos, inner));
            }
        }
    }
    found
}

/// Parse a single assertion line: `Type(body)`.
fn parse_assertion(input: &str, source_line: usize) -> SpecResult<Assertion> {
    let input = input.trim();

    let paren_start = input.find('(').ok_or_else(|| SpecError::Parse {
        line: source_line,
        message: format!("Expected Type(body) format: {}", input),
    })?;

    if !input.ends_with(')') {
        return Err(SpecError::Parse {
            line: source_line,
            message: format!("Unclosed parenthesis: {}", input),
        });
    }

    let kind = match input[..paren_start].trim() {
        "Antecedent" => AssertionKind::Antecedent,
        "NoAntecedent" => AssertionKind::NoAntecedent,
        "StructuralError" => AssertionKind::StructuralError,
        other => {
            return Err(SpecError::Parse {
                line: source_line,
                message: format!("Unknown assertion type '{}'", other),
            })
        }
    };

    let body = parse_assertion_body(&input[paren_start + 1..input.len() - 1], source_line)?;
    if kind != AssertionKind::Antecedent && !body.field_checks.is_empty() {
        return Err(SpecError::Parse {
            line: source_line,
            message: format!("{} takes no fields", kind),
        });
    }

    Ok(Assertion {
        kind,
        body,
        source_line,
    })
}

/// Parse assertion body: comma-separated field checks.
fn parse_assertion_body(input: &str, source_line: usize) -> SpecResult<AssertionBody> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(AssertionBody::default());
    }

    let mut field_checks = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        field_checks.push(parse_field_check(part, source_line)?);
    }

    Ok(AssertionBody { field_checks })
}

const FIELDS: &[&str] = &["text", "sentence", "position", "label"];

/// Parse a single field check: field=value or field~=value.
fn parse_field_check(input: &str, source_line: usize) -> SpecResult<FieldCheck> {
    let (field, operator, expected) = if let Some(pos) = input.find("~=") {
        (&input[..pos], CompareOp::Contains, &input[pos + 2..])
    } else if let Some(pos) = input.find('=') {
        (&input[..pos], CompareOp::Equals, &input[pos + 1..])
    } else {
        return Err(SpecError::Parse {
            line: source_line,
            message: format!("Invalid field check '{}': expected 'field=value'", input),
        });
    };

    let field = field.trim();
    if !FIELDS.contains(&field) {
        return Err(SpecError::Parse {
            line: source_line,
            message: format!("Unknown field '{}', expected one of {}", field, FIELDS.join(", ")),
        });
    }

    Ok(FieldCheck {
        field: field.to_string(),
        expected: expected.trim().to_string(),
        operator,
    })
}

/// Format a position the way fixtures write it: `1.1.0`, or `root`.
pub fn format_position(pos: &Position) -> String {
    if pos.is_root() {
        return "root".to_string();
    }
    pos.indices()
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture() {
        let input = r#"# Test: Simple

// object pronoun
(S (NP (NNP Alex)) (VP (VBD is) (NP (PRP <him>))))
> Antecedent(text=Alex, position=0)
"#;
        let fixture = parse_fixture(input).unwrap();
        assert_eq!(fixture.title.as_deref(), Some("Test: Simple"));
        assert_eq!(fixture.cases.len(), 1);

        let case = &fixture.cases[0];
        assert_eq!(case.source_line, 4);
        assert_eq!(case.pronoun, Position::from([1, 1, 0]));
        assert_eq!(case.pronoun_word, "him");
        assert_eq!(case.text(), "Alex is him");
        assert_eq!(case.assertions.len(), 1);
        assert_eq!(case.assertions[0].source_line, 5);
        assert_eq!(case.assertions[0].body.field_checks[1].expected, "0");
    }

    #[test]
    fn test_multiple_cases_and_sentences() {
        let input = r#"(S (NP (DT the) (NN cat)) (VP (VBD slept)))
(S (NP (NNS dogs)) (VP (VBD chased) (NP (PRP <it>))))
> Antecedent(sentence=0)
---
(FRAG (ADVP (PRP <it>)))
> StructuralError()
"#;
        let fixture = parse_fixture(input).unwrap();
        assert_eq!(fixture.cases.len(), 2);
        assert_eq!(fixture.cases[0].sentences.len(), 2);
        assert_eq!(fixture.cases[1].index, 1);
        assert_eq!(fixture.cases[1].pronoun, Position::from([0, 0]));
        assert_eq!(fixture.assertion_count(), 2);
    }

    #[test]
    fn test_parse_assertion() {
        let assertion = parse_assertion("Antecedent(text~=dog, label=NP)", 3).unwrap();
        assert_eq!(assertion.kind, AssertionKind::Antecedent);
        assert_eq!(assertion.body.field_checks.len(), 2);
        assert_eq!(assertion.body.field_checks[0].operator, CompareOp::Contains);
        assert_eq!(assertion.body.field_checks[1].field, "label");
        assert_eq!(assertion.to_string(), "Antecedent(text~=dog, label=NP)");

        let assertion = parse_assertion("NoAntecedent()", 3).unwrap();
        assert_eq!(assertion.kind, AssertionKind::NoAntecedent);
    }

    #[test]
    fn test_assertion_errors() {
        assert!(parse_assertion("Antecedent(text=John", 1).is_err());
        assert!(parse_assertion("Referent(text=John)", 1).is_err());
        assert!(parse_assertion("Antecedent(gender=male)", 1).is_err());
        assert!(parse_assertion("NoAntecedent(text=John)", 1).is_err());
        assert!(parse_assertion("Antecedent(John)", 1).is_err());
    }

    #[test]
    fn test_marker_errors() {
        let err = parse_fixture("(S (NP (PRP it)))").unwrap_err();
        assert!(matches!(err, SpecError::Parse { line: 1, .. }));

        let err = parse_fixture("(S (NP (PRP <it>)) (VP (VBD saw) (NP (PRP <her>))))").unwrap_err();
        assert!(err.to_string().contains("found 2"));

        let err = parse_fixture("(S (NP (PRP <it>)))\n(S (NP (PRP <it>)))").unwrap_err();
        assert!(matches!(err, SpecError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_tree_error_reports_line() {
        let err = parse_fixture("# T\n\n(S (NP (PRP <it>))").unwrap_err();
        assert!(matches!(err, SpecError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_assertion_without_sentence() {
        let err = parse_fixture("> NoAntecedent()").unwrap_err();
        assert!(matches!(err, SpecError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(&Position::root()), "root");
        assert_eq!(format_position(&Position::from([1, 1, 0])), "1.1.0");
    }
}
