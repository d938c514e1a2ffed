//! Addressing nodes inside a [`ParseTree`](crate::ParseTree).
//!
//! A [`Position`] is the sequence of child indices walked from the root to a
//! node; the empty sequence is the root itself.
//!
//! ```text
//! (S (NP (NNP Alex)) (VP (VBD is) (NP (PRP him))))
//!
//! ()          S
//! (0)         NP
//! (0, 0)      NNP
//! (1)         VP
//! (1, 1, 0)   PRP
//! ```
//!
//! Positions are pure coordinates. They are only meaningful against the tree
//! they were taken from, and comparing positions from two different sentences
//! is never done.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A path of child indices from the root of a tree to one of its nodes.
///
/// The derived `Ord` is lexicographic, which is pre-order: an ancestor sorts
/// before its descendants. For the strict "left of" relation used by the
/// resolver see [`Position::precedes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(Vec<usize>);

impl Position {
    /// The root position.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges between the root and this node.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// The position of the parent node, or `None` at the root.
    pub fn parent(&self) -> Option<Position> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// The position of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Position {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// True if `self` strictly dominates `other`.
    pub fn is_ancestor_of(&self, other: &Position) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }

    /// True iff this node occurs strictly before `other` in reading order.
    ///
    /// At the first depth where the two paths differ, the smaller index
    /// precedes. When one path is a prefix of the other the nodes stand in a
    /// dominance relation and neither precedes the other.
    pub fn precedes(&self, other: &Position) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .find(|(a, b)| a != b)
            .map_or(false, |(a, b)| a < b)
    }

    /// True iff this node precedes at least one position on `path`.
    pub fn is_left_of_path(&self, path: &[Position]) -> bool {
        path.iter().any(|p| self.precedes(p))
    }

    /// True iff at least one position on `path` precedes this node.
    pub fn is_right_of_path(&self, path: &[Position]) -> bool {
        path.iter().any(|p| p.precedes(self))
    }
}

impl From<Vec<usize>> for Position {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for Position {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Position {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", index)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos<const N: usize>(indices: [usize; N]) -> Position {
        Position::from(indices)
    }

    #[test]
    fn parent_and_child() {
        let p = pos([1, 1, 0]);
        assert_eq!(p.parent(), Some(pos([1, 1])));
        assert_eq!(pos([1, 1]).child(0), p);
        assert_eq!(Position::root().parent(), None);
        assert_eq!(pos([3]).parent(), Some(Position::root()));
    }

    #[test]
    fn precedes_at_first_difference() {
        assert!(pos([0]).precedes(&pos([1, 1, 0])));
        assert!(pos([1, 0, 5, 5]).precedes(&pos([1, 1])));
        assert!(!pos([1, 1]).precedes(&pos([1, 0, 5, 5])));
    }

    #[test]
    fn dominance_is_not_precedence() {
        let ancestor = pos([1]);
        let descendant = pos([1, 0, 2]);
        assert!(!ancestor.precedes(&descendant));
        assert!(!descendant.precedes(&ancestor));
        assert!(!ancestor.precedes(&ancestor));
        assert!(!Position::root().precedes(&pos([0])));
    }

    #[test]
    fn left_and_right_of_path() {
        let path = vec![pos([1, 1, 0]), pos([1, 1]), pos([1]), Position::root()];
        assert!(pos([0]).is_left_of_path(&path));
        assert!(pos([1, 0]).is_left_of_path(&path));
        assert!(!pos([1, 1, 0, 0]).is_left_of_path(&path));
        assert!(!pos([1, 2]).is_left_of_path(&path));
        assert!(pos([1, 2]).is_right_of_path(&path));
        assert!(!pos([0, 3]).is_right_of_path(&path));
    }

    #[test]
    fn ancestry() {
        assert!(Position::root().is_ancestor_of(&pos([0])));
        assert!(pos([1]).is_ancestor_of(&pos([1, 0, 0])));
        assert!(!pos([1]).is_ancestor_of(&pos([1])));
        assert!(!pos([1]).is_ancestor_of(&pos([2, 0])));
    }

    #[test]
    fn ordering_is_preorder() {
        let mut positions = vec![pos([1, 0]), pos([0, 0]), pos([1]), Position::root(), pos([0])];
        positions.sort();
        assert_eq!(
            positions,
            vec![Position::root(), pos([0]), pos([0, 0]), pos([1]), pos([1, 0])]
        );
    }

    #[test]
    fn display_as_tuple() {
        assert_eq!(pos([1, 1, 0]).to_string(), "(1, 1, 0)");
        assert_eq!(Position::root().to_string(), "()");
    }
}
