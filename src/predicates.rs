//! Label-based node classification.

use crate::ParseTree;

/// Part-of-speech tags that head a noun phrase: nouns and personal pronouns.
pub const NOMINAL_LABELS: &[&str] = &["NN", "NNS", "NNP", "NNPS", "PRP"];

/// Reflexive pronoun forms, lowercase.
pub const REFLEXIVE_PRONOUNS: &[&str] = &[
    "herself",
    "himself",
    "themself",
    "themselves",
    "itself",
    "myself",
    "yourself",
    "yourselves",
];

pub fn is_np_or_s(node: &ParseTree) -> bool {
    matches!(node.label(), "NP" | "S")
}

pub fn is_np(node: &ParseTree) -> bool {
    node.label() == "NP"
}

pub fn is_s(node: &ParseTree) -> bool {
    node.label() == "S"
}

pub fn is_nominal(node: &ParseTree) -> bool {
    NOMINAL_LABELS.contains(&node.label())
}

/// Case-insensitive check against [`REFLEXIVE_PRONOUNS`].
pub fn is_reflexive(word: &str) -> bool {
    let lower = word.to_lowercase();
    REFLEXIVE_PRONOUNS.contains(&lower.as_str())
}
