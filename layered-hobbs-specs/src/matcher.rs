//! Checking fixture assertions against a resolution.

use layered_hobbs::{GenderLookup, HobbsError, HobbsResolver, Position};

use crate::fixture::{Assertion, AssertionKind, Case};
use crate::parser::format_position;

/// What a case resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found {
        sentence: usize,
        position: Position,
        label: String,
        text: String,
    },
    NotFound,
    /// The climb reached the root without meeting an NP or S.
    Structural(HobbsError),
    /// The case itself is malformed: a bad target or an empty discourse.
    Invalid(HobbsError),
}

impl Resolution {
    /// The assertion kind this resolution satisfies, `None` for an invalid case.
    pub fn kind(&self) -> Option<AssertionKind> {
        match self {
            Resolution::Found { .. } => Some(AssertionKind::Antecedent),
            Resolution::NotFound => Some(AssertionKind::NoAntecedent),
            Resolution::Structural(_) => Some(AssertionKind::StructuralError),
            Resolution::Invalid(_) => None,
        }
    }

    /// The resolver error behind a structural or invalid resolution.
    pub fn error(&self) -> Option<&HobbsError> {
        match self {
            Resolution::Structural(err) | Resolution::Invalid(err) => Some(err),
            _ => None,
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match self {
            Resolution::Found {
                sentence,
                position,
                label,
                text,
            } => match name {
                "text" => Some(text.clone()),
                "sentence" => Some(sentence.to_string()),
                "position" => Some(format_position(position)),
                "label" => Some(label.clone()),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Resolve the marked pronoun of a case.
pub fn resolve_case<G: GenderLookup>(case: &Case, resolver: &HobbsResolver<G>) -> Resolution {
    match resolver.resolve(&case.sentences, &case.pronoun) {
        Ok(Some(antecedent)) => Resolution::Found {
            sentence: antecedent.sentence,
            label: antecedent
                .node()
                .map(|node| node.label().to_string())
                .unwrap_or_default(),
            text: antecedent.text(),
            position: antecedent.position,
        },
        Ok(None) => Resolution::NotFound,
        Err(err @ HobbsError::NoDominatingNode { .. }) => Resolution::Structural(err),
        Err(err) => Resolution::Invalid(err),
    }
}

/// A field whose value differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    pub field: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of an assertion check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionOutcome {
    Passed,
    Failed(Vec<FieldMismatch>),
    KindMismatch {
        expected: AssertionKind,
        actual: AssertionKind,
    },
    /// The case could not be resolved at all, so no assertion holds.
    InvalidCase,
}

impl AssertionOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, AssertionOutcome::Passed)
    }
}

/// Check one assertion against a resolution.
pub fn check_assertion(assertion: &Assertion, resolution: &Resolution) -> AssertionOutcome {
    let actual = match resolution.kind() {
        Some(kind) => kind,
        None => return AssertionOutcome::InvalidCase,
    };
    if assertion.kind != actual {
        return AssertionOutcome::KindMismatch {
            expected: assertion.kind,
            actual,
        };
    }

    let mismatches: Vec<FieldMismatch> = assertion
        .body
        .field_checks
        .iter()
        .filter_map(|check| {
            let actual = resolution.field(&check.field).unwrap_or_default();
            if check.matches(&actual) {
                None
            } else {
                Some(FieldMismatch {
                    field: check.field.clone(),
                    expected: format!("{}{}", check.operator, check.expected),
                    actual,
                })
            }
        })
        .collect();

    if mismatches.is_empty() {
        AssertionOutcome::Passed
    } else {
        AssertionOutcome::Failed(mismatches)
    }
}
