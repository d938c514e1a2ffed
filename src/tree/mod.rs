//! Constituency parse trees.
//!
//! A [`ParseTree`] is a labeled node with an ordered list of children, each
//! either another labeled node or a word. Trees are read from Penn Treebank
//! style bracketed notation with [`str::parse`]:
//!
//! ```
//! use layered_hobbs::{ParseTree, Position};
//!
//! let tree: ParseTree = "(S (NP (NNP Alex)) (VP (VBD is) (NP (PRP him))))".parse().unwrap();
//! assert_eq!(tree.node(&Position::from([1, 1, 0])).unwrap().label(), "PRP");
//! assert_eq!(tree.leaves(), vec!["Alex", "is", "him"]);
//! ```

mod bracketed;

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Position, TreeParseError};

/// A labeled internal node and everything below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseTree {
    label: String,
    children: Vec<Child>,
}

/// A child slot of a [`ParseTree`] node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Child {
    Tree(ParseTree),
    /// A terminal word.
    Leaf(String),
}

impl Child {
    pub fn as_tree(&self) -> Option<&ParseTree> {
        match self {
            Child::Tree(tree) => Some(tree),
            Child::Leaf(_) => None,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Child::Tree(tree) => tree.leaf_count(),
            Child::Leaf(_) => 1,
        }
    }
}

impl ParseTree {
    pub fn new(label: impl Into<String>, children: Vec<Child>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// A part-of-speech node over a single word, e.g. `(NNP John)`.
    pub fn preterminal(label: impl Into<String>, word: impl Into<String>) -> Self {
        Self::new(label, vec![Child::Leaf(word.into())])
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Children that are internal nodes, paired with their child index.
    pub fn subtrees(&self) -> impl Iterator<Item = (usize, &ParseTree)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| child.as_tree().map(|tree| (index, tree)))
    }

    /// The internal node at `pos`, or `None` if `pos` runs off the tree or
    /// ends on a word.
    pub fn node(&self, pos: &Position) -> Option<&ParseTree> {
        let mut current = self;
        for &index in pos.indices() {
            match current.children.get(index)? {
                Child::Tree(tree) => current = tree,
                Child::Leaf(_) => return None,
            }
        }
        Some(current)
    }

    /// The child slot at `pos`, node or word. The root is not a child.
    pub fn child(&self, pos: &Position) -> Option<&Child> {
        let (last, parent) = pos.indices().split_last()?;
        self.node(&Position::from(parent))?.children.get(*last)
    }

    /// The word at `pos`, if `pos` addresses a leaf.
    pub fn leaf(&self, pos: &Position) -> Option<&str> {
        match self.child(pos)? {
            Child::Leaf(word) => Some(word.as_str()),
            Child::Tree(_) => None,
        }
    }

    /// Mutable access to the word at `pos`.
    ///
    /// Meant for building trees (stripping markup from words) before any
    /// position into the tree is handed out.
    pub fn leaf_mut(&mut self, pos: &Position) -> Option<&mut String> {
        let (last, parent) = pos.indices().split_last()?;
        let mut current = self;
        for &index in parent {
            match current.children.get_mut(index)? {
                Child::Tree(tree) => current = tree,
                Child::Leaf(_) => return None,
            }
        }
        match current.children.get_mut(*last)? {
            Child::Leaf(word) => Some(word),
            Child::Tree(_) => None,
        }
    }

    /// All words under this node, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = Vec::with_capacity(self.leaf_count());
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a str>) {
        for child in &self.children {
            match child {
                Child::Tree(tree) => tree.collect_leaves(leaves),
                Child::Leaf(word) => leaves.push(word),
            }
        }
    }

    /// The leftmost word under this node.
    pub fn first_leaf(&self) -> Option<&str> {
        self.children.iter().find_map(|child| match child {
            Child::Tree(tree) => tree.first_leaf(),
            Child::Leaf(word) => Some(word.as_str()),
        })
    }

    pub fn leaf_count(&self) -> usize {
        self.children.iter().map(Child::leaf_count).sum()
    }

    /// Positions of every leaf, in reading order.
    pub fn leaf_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        self.collect_leaf_positions(Position::root(), &mut positions);
        positions
    }

    fn collect_leaf_positions(&self, at: Position, positions: &mut Vec<Position>) {
        for (index, child) in self.children.iter().enumerate() {
            match child {
                Child::Tree(tree) => tree.collect_leaf_positions(at.child(index), positions),
                Child::Leaf(_) => positions.push(at.child(index)),
            }
        }
    }

    /// Range of word indices (into [`ParseTree::leaves`]) covered by the node
    /// or leaf at `pos`.
    pub fn leaf_span(&self, pos: &Position) -> Option<Range<usize>> {
        let mut start = 0;
        let mut width = self.leaf_count();
        let mut current = self;
        let mut indices = pos.indices().iter().peekable();
        while let Some(&index) = indices.next() {
            let child = current.children.get(index)?;
            start += current.children[..index]
                .iter()
                .map(Child::leaf_count)
                .sum::<usize>();
            width = child.leaf_count();
            match child {
                Child::Tree(tree) => current = tree,
                Child::Leaf(_) if indices.peek().is_none() => {}
                Child::Leaf(_) => return None,
            }
        }
        Some(start..start + width)
    }
}

impl FromStr for ParseTree {
    type Err = TreeParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        bracketed::parse(input)
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.label)?;
        for child in &self.children {
            match child {
                Child::Tree(tree) => write!(f, " {}", tree)?,
                Child::Leaf(word) => write!(f, " {}", word)?,
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(input: &str) -> ParseTree {
        input.parse().unwrap()
    }

    #[test]
    fn node_and_leaf_lookup() {
        let t = tree("(S (NP (NNP Alex)) (VP (VBD is) (NP (PRP him))))");
        assert_eq!(t.node(&Position::root()).unwrap().label(), "S");
        assert_eq!(t.node(&Position::from([1, 1])).unwrap().label(), "NP");
        assert_eq!(t.leaf(&Position::from([1, 1, 0, 0])), Some("him"));
        assert!(t.node(&Position::from([1, 1, 0, 0])).is_none());
        assert!(t.node(&Position::from([2])).is_none());
        assert!(t.leaf(&Position::from([1])).is_none());
    }

    #[test]
    fn child_is_node_or_word() {
        let t = tree("(S (NP (NNP Alex)) (VP (VBD is)))");
        assert_eq!(t.child(&Position::root()), None);
        assert_eq!(
            t.child(&Position::from([0, 0, 0])),
            Some(&Child::Leaf("Alex".to_string()))
        );
        let vp = t.child(&Position::from([1])).and_then(Child::as_tree).unwrap();
        assert_eq!(vp.label(), "VP");
        assert_eq!(t.child(&Position::from([2])), None);
    }

    #[test]
    fn leaves_and_spans() {
        let t = tree("(S (NP (NNP John)) (VP (VBD saw) (NP (DT a) (JJ flashy) (NN hat))))");
        assert_eq!(t.leaves(), vec!["John", "saw", "a", "flashy", "hat"]);
        assert_eq!(t.leaf_span(&Position::root()), Some(0..5));
        assert_eq!(t.leaf_span(&Position::from([1, 1])), Some(2..5));
        assert_eq!(t.leaf_span(&Position::from([1, 1, 2, 0])), Some(4..5));
        assert_eq!(t.leaf_span(&Position::from([1, 1, 2, 0, 0])), None);
        assert_eq!(t.leaf_span(&Position::from([3])), None);
        assert_eq!(t.node(&Position::from([1, 1])).unwrap().first_leaf(), Some("a"));
    }

    #[test]
    fn leaf_positions_follow_reading_order() {
        let t = tree("(S (NP (NNP Alex)) (VP (VBD is) (NP (PRP him))))");
        let positions: Vec<String> = t.leaf_positions().iter().map(|p| p.to_string()).collect();
        assert_eq!(positions, vec!["(0, 0, 0)", "(1, 0, 0)", "(1, 1, 0, 0)"]);
    }

    #[test]
    fn leaf_mut_rewrites_word() {
        let mut t = tree("(S (NP (PRP <him>)))");
        let pos = Position::from([0, 0, 0]);
        *t.leaf_mut(&pos).unwrap() = "him".to_string();
        assert_eq!(t.to_string(), "(S (NP (PRP him)))");
        assert!(t.leaf_mut(&Position::from([0])).is_none());
    }

    #[test]
    fn subtrees_keep_child_indices() {
        let t = tree("(NP (DT the) extra (NN store))");
        let indices: Vec<usize> = t.subtrees().map(|(index, _)| index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn display_round_trips_notation() {
        insta::assert_snapshot!(
            tree("(S(NP (NNP John) )(VP (VBD left) ) )"),
            @"(S (NP (NNP John)) (VP (VBD left)))"
        );
    }
}
