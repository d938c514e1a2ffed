//! Number and gender agreement between a pronoun and a candidate phrase.
//!
//! Example:
//! ```text
//! (NP (NNP Mary))   + "him"  -> number ok (singular), gender rejected
//! (NP (NNS dogs))   + "it"   -> number rejected
//! (NP (NNP Alex))   + "him"  -> accepted (Alex unknown or male)
//! ```
//!
//! Number must be confirmed by at least one head; gender only has to not be
//! contradicted. A head word missing from both name sets, or present in both,
//! never blocks a candidate.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::predicates::is_nominal;
use crate::{ParseTree, Position};

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
}

/// The gender a pronoun form commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PronounGender {
    Masculine,
    Feminine,
    /// it, its, itself
    Inanimate,
    /// they, we, ... : compatible with any head
    Unmarked,
}

/// What the name tables say about a head word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameGender {
    Male,
    Female,
    /// Listed in both tables.
    Ambiguous,
    Unknown,
}

/// Membership tests against male and female name sets.
///
/// Implementors receive lowercase words.
pub trait GenderLookup {
    fn is_male(&self, word: &str) -> bool;
    fn is_female(&self, word: &str) -> bool;

    fn classify(&self, word: &str) -> NameGender {
        match (self.is_male(word), self.is_female(word)) {
            (true, false) => NameGender::Male,
            (false, true) => NameGender::Female,
            (true, true) => NameGender::Ambiguous,
            (false, false) => NameGender::Unknown,
        }
    }
}

impl<G: GenderLookup + ?Sized> GenderLookup for &G {
    fn is_male(&self, word: &str) -> bool {
        (**self).is_male(word)
    }

    fn is_female(&self, word: &str) -> bool {
        (**self).is_female(word)
    }
}

/// Read-only male/female name sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    male: HashSet<String>,
    female: HashSet<String>,
}

impl NameTable {
    /// Build from name lists; names are stored lowercase.
    pub fn new<M, F>(male: M, female: F) -> Self
    where
        M: IntoIterator,
        M::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        Self {
            male: male.into_iter().map(|n| n.as_ref().to_lowercase()).collect(),
            female: female
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// An empty table: every head is unknown, so gender never rejects.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn male_count(&self) -> usize {
        self.male.len()
    }

    pub fn female_count(&self) -> usize {
        self.female.len()
    }
}

impl GenderLookup for NameTable {
    fn is_male(&self, word: &str) -> bool {
        self.male.contains(word)
    }

    fn is_female(&self, word: &str) -> bool {
        self.female.contains(word)
    }
}

/// Features of a known pronoun form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PronounFeatures {
    number: Number,
    gender: PronounGender,
}

static PRONOUN_FEATURES: Lazy<HashMap<&'static str, PronounFeatures>> = Lazy::new(|| {
    use Number::*;
    use PronounGender::*;

    let entries: &[(&'static str, Number, PronounGender)] = &[
        ("he", Singular, Masculine),
        ("him", Singular, Masculine),
        ("his", Singular, Masculine),
        ("himself", Singular, Masculine),
        ("she", Singular, Feminine),
        ("her", Singular, Feminine),
        ("hers", Singular, Feminine),
        ("herself", Singular, Feminine),
        ("it", Singular, Inanimate),
        ("its", Singular, Inanimate),
        ("itself", Singular, Inanimate),
        ("themself", Singular, Unmarked),
        ("myself", Singular, Unmarked),
        ("yourself", Singular, Unmarked),
        ("we", Plural, Unmarked),
        ("us", Plural, Unmarked),
        ("our", Plural, Unmarked),
        ("ours", Plural, Unmarked),
        ("ourselves", Plural, Unmarked),
        ("they", Plural, Unmarked),
        ("them", Plural, Unmarked),
        ("their", Plural, Unmarked),
        ("theirs", Plural, Unmarked),
        ("themselves", Plural, Unmarked),
        ("yourselves", Plural, Unmarked),
    ];

    entries
        .iter()
        .map(|&(form, number, gender)| (form, PronounFeatures { number, gender }))
        .collect()
});

/// Number of a pronoun form, `None` when the form does not fix one.
pub fn pronoun_number(pronoun: &str) -> Option<Number> {
    PRONOUN_FEATURES
        .get(pronoun.to_lowercase().as_str())
        .map(|f| f.number)
}

pub fn pronoun_gender(pronoun: &str) -> PronounGender {
    PRONOUN_FEATURES
        .get(pronoun.to_lowercase().as_str())
        .map_or(PronounGender::Unmarked, |f| f.gender)
}

/// Number implied by a nominal part-of-speech tag. `PRP` fixes none.
pub fn label_number(label: &str) -> Option<Number> {
    match label {
        "NN" | "NNP" => Some(Number::Singular),
        "NNS" | "NNPS" => Some(Number::Plural),
        _ => None,
    }
}

/// Accept the phrase at `pos` as an antecedent of `pronoun`?
///
/// Looks only at the direct nominal children of the phrase. Both checks have
/// to hold; a phrase with no nominal child always fails the number check.
pub fn propose<G: GenderLookup + ?Sized>(
    tree: &ParseTree,
    pos: &Position,
    pronoun: &str,
    names: &G,
) -> bool {
    let node = match tree.node(pos) {
        Some(node) => node,
        None => return false,
    };
    let pronoun = pronoun.to_lowercase();

    let accepted = check_number(node, &pronoun) && check_gender(node, &pronoun, names);
    log::trace!(
        "proposed {} {} for {:?}: {}",
        node.label(),
        pos,
        pronoun,
        if accepted { "accepted" } else { "rejected" }
    );
    accepted
}

fn nominal_heads(node: &ParseTree) -> impl Iterator<Item = &ParseTree> {
    node.subtrees()
        .map(|(_, child)| child)
        .filter(|child| is_nominal(child))
}

fn check_number(node: &ParseTree, pronoun: &str) -> bool {
    let wanted = match pronoun_number(pronoun) {
        Some(number) => number,
        None => return false,
    };
    nominal_heads(node).any(|head| label_number(head.label()) == Some(wanted))
}

fn check_gender<G: GenderLookup + ?Sized>(node: &ParseTree, pronoun: &str, names: &G) -> bool {
    let gender = pronoun_gender(pronoun);

    for head in nominal_heads(node) {
        let word = match head.first_leaf() {
            Some(word) => word.to_lowercase(),
            None => continue,
        };
        let contradicts = match names.classify(&word) {
            NameGender::Male => {
                matches!(gender, PronounGender::Feminine | PronounGender::Inanimate)
            }
            NameGender::Female => {
                matches!(gender, PronounGender::Masculine | PronounGender::Inanimate)
            }
            NameGender::Ambiguous | NameGender::Unknown => false,
        };
        if contradicts {
            return false;
        }
    }

    true
}
