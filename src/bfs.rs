//! Level-order enumeration of a subtree.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::{ParseTree, Position};

/// Which part of a node the search starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// The node itself.
    Whole,
    /// The node's first child (index 0).
    Left,
    /// The node's second child (index 1).
    Right,
}

impl Branch {
    fn child_index(self) -> Option<usize> {
        match self {
            Branch::Whole => None,
            Branch::Left => Some(0),
            Branch::Right => Some(1),
        }
    }
}

/// Breadth-first walk over internal nodes, left to right within a level.
///
/// Produced by [`bfs`]. Words are never yielded, but they keep their child
/// index, so yielded positions always address the real node.
#[derive(Debug, Clone)]
pub struct Bfs<'t> {
    tree: &'t ParseTree,
    queue: VecDeque<Position>,
}

/// Enumerate the internal nodes reachable from `pos`, shallowest first.
///
/// With [`Branch::Left`] or [`Branch::Right`] the walk starts at that child
/// of `pos` instead of `pos`. A start that is missing or is a word yields
/// nothing.
pub fn bfs<'t>(tree: &'t ParseTree, pos: &Position, branch: Branch) -> Bfs<'t> {
    let start = match branch.child_index() {
        Some(index) => pos.child(index),
        None => pos.clone(),
    };

    let mut queue = VecDeque::new();
    if tree.node(&start).is_some() {
        queue.push_back(start);
    }

    Bfs { tree, queue }
}

impl Iterator for Bfs<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.queue.pop_front()?;
        if let Some(node) = self.tree.node(&pos) {
            self.queue
                .extend(node.subtrees().map(|(index, _)| pos.child(index)));
        }
        Some(pos)
    }
}

impl FusedIterator for Bfs<'_> {}
