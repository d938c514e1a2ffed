//! Hobbs' naive syntactic pronoun resolution.
//!
//! The search order for a non-reflexive pronoun:
//!
//! 1. From the NP over the pronoun, climb to the first NP or S node `X`.
//! 2. Breadth-first over the left branch of `X`, propose every NP or S that
//!    is not on the climbed path.
//! 3. While `X` is not the sentence root, climb to the next NP or S `Y`:
//!    - if `Y` is an NP not entered through a nominal child, propose `Y`;
//!    - breadth-first over the left branch of `Y`, propose NPs left of the
//!      path;
//!    - if `Y` is an S, scan its right branch right of the path, stopping at
//!      the first NP or S;
//!    - continue with `Y` as `X`.
//! 4. Breadth-first over previous sentences, nearest first, propose NPs.
//!
//! A proposal succeeds when the candidate passes the agreement filter
//! ([`propose`]). Reflexive pronouns take a separate, clause-bound path
//! ([`resolve_reflexive`]).
//!
//! ```
//! use layered_hobbs::{HobbsResolver, NameTable, ParseTree, Position};
//!
//! let sentence: ParseTree =
//!     "(S (NP (NNP John)) (VP (VBD said) (SBAR (S (NP (NNP Mary)) (VP (VBD likes) (NP (PRP him)))))))"
//!         .parse()
//!         .unwrap();
//! let resolver = HobbsResolver::new(NameTable::new(["john"], ["mary"]));
//!
//! let discourse = [sentence];
//! let antecedent = resolver
//!     .resolve(&discourse, &Position::from([1, 1, 0, 1, 1, 0]))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(antecedent.text(), "John");
//! ```

use serde::{Deserialize, Serialize};

use crate::agreement::{propose, GenderLookup, NameTable};
use crate::bfs::{bfs, Branch};
use crate::climb::{climb_to_node, Climb};
use crate::predicates::{is_nominal, is_np, is_np_or_s, is_reflexive};
use crate::reflexive::resolve_reflexive;
use crate::{HobbsError, HobbsResult, ParseTree, Position};

/// How far back the search goes when the current sentence has no antecedent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorSentenceSearch {
    /// Only the immediately preceding sentence.
    #[default]
    Nearest,
    /// Every preceding sentence, nearest first.
    All,
}

/// The node chosen as antecedent.
#[derive(Debug, Clone, PartialEq)]
pub struct Antecedent<'d> {
    /// Index of the sentence in the discourse.
    pub sentence: usize,
    /// Position of the NP (or S) within that sentence.
    pub position: Position,
    pub tree: &'d ParseTree,
}

impl<'d> Antecedent<'d> {
    pub fn node(&self) -> Option<&'d ParseTree> {
        self.tree.node(&self.position)
    }

    /// The words covered by the antecedent, space separated.
    pub fn text(&self) -> String {
        self.node()
            .map(|node| node.leaves().join(" "))
            .unwrap_or_default()
    }
}

/// Resolves pronouns against a discourse of parse trees.
///
/// Holds no state between calls; resolving several pronouns of the same
/// discourse, even from several threads, is fine as long as the trees are not
/// modified meanwhile.
#[derive(Debug, Clone)]
pub struct HobbsResolver<G = NameTable> {
    names: G,
    prior_sentences: PriorSentenceSearch,
}

impl Default for HobbsResolver<NameTable> {
    fn default() -> Self {
        Self::new(NameTable::empty())
    }
}

impl<G: GenderLookup> HobbsResolver<G> {
    pub fn new(names: G) -> Self {
        Self {
            names,
            prior_sentences: PriorSentenceSearch::default(),
        }
    }

    pub fn with_prior_sentences(mut self, prior_sentences: PriorSentenceSearch) -> Self {
        self.prior_sentences = prior_sentences;
        self
    }

    pub fn names(&self) -> &G {
        &self.names
    }

    pub fn prior_sentences(&self) -> PriorSentenceSearch {
        self.prior_sentences
    }

    /// Find the antecedent of the pronoun at `pos` in the last sentence of
    /// `discourse`.
    ///
    /// `pos` addresses the pronoun's part-of-speech node (a position of the
    /// word itself is accepted and moved up to that node). `Ok(None)` means
    /// the search order was exhausted without an agreeing candidate.
    pub fn resolve<'d>(
        &self,
        discourse: &'d [ParseTree],
        pos: &Position,
    ) -> HobbsResult<Option<Antecedent<'d>>> {
        let (tree, prior) = discourse
            .split_last()
            .ok_or(HobbsError::EmptyDiscourse)?;
        let target = pronoun_target(tree, pos)?;
        let pronoun = tree
            .node(&target)
            .and_then(ParseTree::first_leaf)
            .ok_or_else(|| HobbsError::MissingLeaf {
                position: target.clone(),
            })?
            .to_lowercase();

        log::debug!("resolving {:?} at {}", pronoun, target);

        if is_reflexive(&pronoun) {
            let found = resolve_reflexive(tree, &target, &pronoun, &self.names)?;
            return Ok(found.map(|position| Antecedent {
                sentence: prior.len(),
                position,
                tree,
            }));
        }

        if let Some(position) = self.search_sentence(tree, &target, &pronoun)? {
            log::debug!("{:?} resolved within its sentence to {}", pronoun, position);
            return Ok(Some(Antecedent {
                sentence: prior.len(),
                position,
                tree,
            }));
        }

        let found = self.search_prior(prior, &pronoun);
        if found.is_none() {
            log::debug!("no antecedent found for {:?}", pronoun);
        }
        Ok(found)
    }

    /// Resolve each target independently against the same discourse.
    pub fn resolve_all<'d>(
        &self,
        discourse: &'d [ParseTree],
        targets: &[Position],
    ) -> Vec<HobbsResult<Option<Antecedent<'d>>>> {
        targets
            .iter()
            .map(|pos| self.resolve(discourse, pos))
            .collect()
    }

    fn accepts(&self, tree: &ParseTree, pos: &Position, pronoun: &str) -> bool {
        propose(tree, pos, pronoun, &self.names)
    }

    /// Climbing and searching within the pronoun's own sentence.
    fn search_sentence(
        &self,
        tree: &ParseTree,
        pos: &Position,
        pronoun: &str,
    ) -> HobbsResult<Option<Position>> {
        let start = pos.parent().ok_or_else(|| HobbsError::InvalidPosition {
            position: pos.clone(),
        })?;
        let Climb {
            found: mut x,
            path,
        } = climb_to_node(tree, &start)?;

        let below_x = bfs(tree, &x, Branch::Left).find(|candidate| {
            !path.contains(candidate)
                && candidate != pos
                && tree.node(candidate).map_or(false, is_np_or_s)
                && self.accepts(tree, candidate, pronoun)
        });
        if below_x.is_some() {
            return Ok(below_x);
        }

        while !x.is_root() {
            let Climb { found: y, path } = climb_to_node(tree, &x)?;
            let y_node = match tree.node(&y) {
                Some(node) => node,
                None => break,
            };
            log::debug!("widening search from {} to {} {}", x, y_node.label(), y);

            if is_np(y_node)
                && !is_nominal(y_node)
                && !entered_through_nominal(tree, &y, &path)
                && self.accepts(tree, &y, pronoun)
            {
                return Ok(Some(y));
            }

            let left = bfs(tree, &y, Branch::Left).find(|candidate| {
                candidate.is_left_of_path(&path)
                    && tree.node(candidate).map_or(false, is_np)
                    && self.accepts(tree, candidate, pronoun)
            });
            if left.is_some() {
                return Ok(left);
            }

            if !is_np(y_node) {
                if let Some(right) = self.scan_right(tree, &y, &path, pronoun) {
                    return Ok(Some(right));
                }
            }

            x = y;
        }

        Ok(None)
    }

    /// Right branch of a clause, right of `path`, up to the first NP or S.
    fn scan_right(
        &self,
        tree: &ParseTree,
        clause: &Position,
        path: &[Position],
        pronoun: &str,
    ) -> Option<Position> {
        for candidate in bfs(tree, clause, Branch::Right) {
            if !candidate.is_right_of_path(path) {
                continue;
            }
            let node = tree.node(&candidate)?;
            if is_np_or_s(node) {
                if is_np(node) && self.accepts(tree, &candidate, pronoun) {
                    return Some(candidate);
                }
                return None;
            }
        }
        None
    }

    fn search_prior<'d>(&self, prior: &'d [ParseTree], pronoun: &str) -> Option<Antecedent<'d>> {
        let limit = match self.prior_sentences {
            PriorSentenceSearch::Nearest => 1,
            PriorSentenceSearch::All => prior.len(),
        };

        for (sentence, tree) in prior.iter().enumerate().rev().take(limit) {
            log::debug!("searching previous sentence {} for {:?}", sentence, pronoun);
            let found = bfs(tree, &Position::root(), Branch::Whole).find(|candidate| {
                tree.node(candidate).map_or(false, is_np)
                    && self.accepts(tree, candidate, pronoun)
            });
            if let Some(position) = found {
                return Some(Antecedent {
                    sentence,
                    position,
                    tree,
                });
            }
        }

        None
    }
}

/// Resolve with an explicit name table and the default configuration.
pub fn hobbs<'d, G: GenderLookup>(
    discourse: &'d [ParseTree],
    pos: &Position,
    names: &G,
) -> HobbsResult<Option<Antecedent<'d>>> {
    HobbsResolver::new(names).resolve(discourse, pos)
}

/// Normalise a target to the pronoun's part-of-speech node.
fn pronoun_target(tree: &ParseTree, pos: &Position) -> HobbsResult<Position> {
    let invalid = || HobbsError::InvalidPosition {
        position: pos.clone(),
    };

    let target = if tree.leaf(pos).is_some() {
        pos.parent().ok_or_else(invalid)?
    } else {
        pos.clone()
    };

    if target.is_root() || tree.node(&target).is_none() {
        return Err(invalid());
    }
    Ok(target)
}

/// Did `path` reach `y` through one of its nominal children?
fn entered_through_nominal(tree: &ParseTree, y: &Position, path: &[Position]) -> bool {
    path.iter().any(|p| {
        p.parent().as_ref() == Some(y) && tree.node(p).map_or(false, is_nominal)
    })
}
