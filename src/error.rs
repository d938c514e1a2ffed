//! Error types for tree parsing and pronoun resolution.
//!
//! Failing to find an antecedent is not an error: resolution returns
//! `Ok(None)` in that case. Errors here mean the input could not be searched
//! at all.

use thiserror::Error;

use crate::Position;

/// Errors that stop a resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HobbsError {
    /// A climb reached the root without passing an NP or S node.
    #[error("no NP or S node dominates {position}")]
    NoDominatingNode { position: Position },

    /// The target does not address a node of the current sentence, or
    /// addresses its root.
    #[error("position {position} does not address a pronoun in the current sentence")]
    InvalidPosition { position: Position },

    /// The target node covers no words.
    #[error("node at {position} has no leaf to read a pronoun from")]
    MissingLeaf { position: Position },

    /// There is no sentence to resolve in.
    #[error("discourse contains no sentences")]
    EmptyDiscourse,
}

/// Result type for resolution operations.
pub type HobbsResult<T> = Result<T, HobbsError>;

/// Error reading a tree from bracketed notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bracketed tree at byte {offset}: {message}")]
pub struct TreeParseError {
    /// Byte offset into the input where the problem was found.
    pub offset: usize,
    pub message: String,
}

impl TreeParseError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}
