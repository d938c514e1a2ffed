#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Hobbs' syntactic pronoun resolution for layered-nlp.
//!
//! Given a discourse (the parse trees of the sentences read so far) and the
//! position of a pronoun in the last one, the resolver walks the tree in the
//! order Hobbs prescribes and proposes noun phrases until one agrees with the
//! pronoun in number and gender.
//!
//! ## Modules
//!
//! - [`Position`] - addressing and left-to-right ordering of tree nodes
//! - [`ParseTree`] - labeled trees, read from bracketed notation
//! - [`predicates`] - label classification (NP, S, nominal, reflexive)
//! - [`climb_to_node`] - walking up to the nearest NP or S
//! - [`bfs()`] - level-order enumeration of a subtree or one of its branches
//! - [`propose`] - number and gender agreement against injected name tables
//! - [`resolve_reflexive`] - clause-bound search for reflexives
//! - [`HobbsResolver`] - the full search order, including earlier sentences
//! - [`ResolutionDisplay`] - underlines an antecedent below its sentence
//!
//! ## Example
//!
//! ```
//! use layered_hobbs::{HobbsResolver, NameTable, ParseTree, Position};
//!
//! let discourse: Vec<ParseTree> = vec![
//!     "(S (NP (NNP Alex)) (VP (VBD is) (NP (PRP him))))".parse().unwrap(),
//! ];
//! let resolver = HobbsResolver::new(NameTable::new(["alex"], Vec::<String>::new()));
//!
//! let antecedent = resolver
//!     .resolve(&discourse, &Position::from([1, 1, 0]))
//!     .unwrap()
//!     .expect("Alex is proposed first");
//! assert_eq!(antecedent.position, Position::from([0]));
//! assert_eq!(antecedent.text(), "Alex");
//! ```

mod agreement;
mod bfs;
mod climb;
mod display;
mod error;
mod hobbs;
mod position;
pub mod predicates;
mod reflexive;
mod tree;

pub use agreement::{
    label_number, pronoun_gender, pronoun_number, propose, GenderLookup, NameGender, NameTable,
    Number, PronounGender,
};
pub use bfs::{bfs, Bfs, Branch};
pub use climb::{climb_to_node, Climb};
pub use display::ResolutionDisplay;
pub use error::{HobbsError, HobbsResult, TreeParseError};
pub use hobbs::{hobbs, Antecedent, HobbsResolver, PriorSentenceSearch};
pub use position::Position;
pub use reflexive::resolve_reflexive;
pub use tree::{Child, ParseTree};
