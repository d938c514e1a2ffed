//! Core types for parsed `.hobbs` fixture files.

use layered_hobbs::{ParseTree, Position};
use serde::{Deserialize, Serialize};

/// A parsed `.hobbs` fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HobbsFixture {
    /// Optional title from `# Title` header
    pub title: Option<String>,
    /// Cases separated by `---`
    pub cases: Vec<Case>,
}

/// One discourse with one marked pronoun and what it should resolve to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    /// Case index (0-based)
    pub index: usize,
    /// Sentences in reading order, markers removed
    pub sentences: Vec<ParseTree>,
    /// Position of the pronoun's tag in the last sentence
    pub pronoun: Position,
    /// The marked word
    pub pronoun_word: String,
    pub assertions: Vec<Assertion>,
    /// Line of the first sentence, for error reporting
    pub source_line: usize,
}

/// An expectation about a case's resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assertion {
    pub kind: AssertionKind,
    /// Field checks, only meaningful for [`AssertionKind::Antecedent`]
    pub body: AssertionBody,
    /// Source line number for error reporting
    pub source_line: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssertionKind {
    /// `Antecedent(field=value, ...)`
    Antecedent,
    /// `NoAntecedent()`: the search is exhausted without a match
    NoAntecedent,
    /// `StructuralError()`: the tree cannot be searched
    StructuralError,
}

/// Parsed assertion body containing field assertions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssertionBody {
    /// Key-value field assertions (e.g., text=John)
    pub field_checks: Vec<FieldCheck>,
}

/// A single field check within an assertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldCheck {
    /// Field name: `text`, `sentence`, `position` or `label`
    pub field: String,
    /// Expected value (e.g., "John")
    pub expected: String,
    /// Comparison operator
    pub operator: CompareOp,
}

/// Comparison operators for field checks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompareOp {
    /// Exact equality: field=value
    #[default]
    Equals,
    /// Contains: field~=value
    Contains,
}

impl HobbsFixture {
    /// Total number of assertions over all cases.
    pub fn assertion_count(&self) -> usize {
        self.cases.iter().map(|c| c.assertions.len()).sum()
    }
}

impl Case {
    /// Words of every sentence, one sentence per line.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.leaves().join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FieldCheck {
    pub fn matches(&self, actual: &str) -> bool {
        match self.operator {
            CompareOp::Equals => actual == self.expected,
            CompareOp::Contains => actual.contains(self.expected.as_str()),
        }
    }
}

impl std::fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssertionKind::Antecedent => write!(f, "Antecedent"),
            AssertionKind::NoAntecedent => write!(f, "NoAntecedent"),
            AssertionKind::StructuralError => write!(f, "StructuralError"),
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareOp::Equals => write!(f, "="),
            CompareOp::Contains => write!(f, "~="),
        }
    }
}

impl std::fmt::Display for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.kind)?;
        for (i, check) in self.body.field_checks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}{}{}", check.field, check.operator, check.expected)?;
        }
        write!(f, ")")
    }
}
