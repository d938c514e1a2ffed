#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven testing for layered-hobbs.
//!
//! Test cases are written in `.hobbs` files: bracketed parse trees, one per
//! line, with the pronoun to resolve wrapped in `<...>` and the expected
//! outcome on `>` lines below.
//!
//! ## Modules
//!
//! - [`parser`] - Parses `.hobbs` fixture files
//! - [`fixture`] - Fixture, case and assertion types
//! - [`loader`] - Fixture file loading
//! - [`names`] - JSON name tables
//! - [`config`] - Harness configuration via TOML
//! - [`matcher`] - Checking assertions against a resolution
//! - [`runner`] - Runs fixtures and classifies failures
//! - [`errors`] - Error types for the harness
//! - [`formatter`] - Failure reports with annotated sentences
//! - [`failures`] - Expected failures tracking via TOML

pub mod config;
pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod matcher;
pub mod names;
pub mod parser;
pub mod runner;

pub use config::HarnessConfig;
pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{
    Assertion, AssertionBody, AssertionKind, Case, CompareOp, FieldCheck, HobbsFixture,
};
pub use formatter::{annotate, format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use matcher::{check_assertion, resolve_case, AssertionOutcome, FieldMismatch, Resolution};
pub use names::{load_names, parse_names};
pub use parser::{format_position, parse_fixture};
pub use runner::{run_fixture, run_harness, CaseResult, HarnessReport};

#[cfg(test)]
mod tests;
