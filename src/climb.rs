//! Walking up from a node to the nearest dominating NP or S.

use crate::predicates::is_np_or_s;
use crate::{HobbsError, HobbsResult, ParseTree, Position};

/// Result of a climb: the node reached and every position visited on the
/// way, starting with the start position and ending with `found`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Climb {
    pub found: Position,
    pub path: Vec<Position>,
}

impl Climb {
    /// Continue this climb with `next`, which must start where this one ended.
    pub(crate) fn extend(mut self, next: Climb) -> Climb {
        debug_assert_eq!(next.path.first(), Some(&self.found));
        self.path.extend(next.path.into_iter().skip(1));
        self.found = next.found;
        self
    }
}

/// Take parents from `pos` until an NP or S node is reached.
///
/// `pos` itself is never a candidate, even if it is an NP or S. Reaching the
/// root without a match means the tree is not a sentence tree and is reported
/// as [`HobbsError::NoDominatingNode`].
pub fn climb_to_node(tree: &ParseTree, pos: &Position) -> HobbsResult<Climb> {
    let mut path = vec![pos.clone()];
    let mut current = pos.clone();

    while let Some(parent) = current.parent() {
        path.push(parent.clone());
        if tree.node(&parent).map_or(false, is_np_or_s) {
            return Ok(Climb {
                found: parent,
                path,
            });
        }
        current = parent;
    }

    Err(HobbsError::NoDominatingNode {
        position: pos.clone(),
    })
}
