//! Resolution path for reflexive pronouns.
//!
//! A reflexive takes its antecedent from inside its own clause, to its left:
//!
//! ```text
//! (S (NP (NNP Mary)) (VP (VBD likes) (NP (PRP herself))))
//!     ╰────────────╯ proposed         ╰──────────────╯
//! ```
//!
//! The climb runs from the pronoun through any NP ancestors up to the nearest
//! S, and only the left branch of that S is searched.

use crate::agreement::{propose, GenderLookup};
use crate::bfs::{bfs, Branch};
use crate::climb::climb_to_node;
use crate::predicates::{is_np, is_s};
use crate::{HobbsResult, ParseTree, Position};

/// Find the antecedent of the reflexive `pronoun` at `pos` within its clause.
pub fn resolve_reflexive<G: GenderLookup + ?Sized>(
    tree: &ParseTree,
    pos: &Position,
    pronoun: &str,
    names: &G,
) -> HobbsResult<Option<Position>> {
    let mut climb = climb_to_node(tree, pos)?;
    while !tree.node(&climb.found).map_or(false, is_s) {
        let next = climb_to_node(tree, &climb.found)?;
        climb = climb.extend(next);
    }
    log::debug!("reflexive {:?} is scoped to clause {}", pronoun, climb.found);

    let found = bfs(tree, &climb.found, Branch::Left).find(|candidate| {
        tree.node(candidate).map_or(false, is_np)
            && candidate.is_left_of_path(&climb.path)
            && propose(tree, candidate, pronoun, names)
    });

    Ok(found)
}
