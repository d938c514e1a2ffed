//! Harness configuration.
//!
//! ```toml
//! names = "names.json"
//! prior_sentences = "all"
//! ```
//!
//! A relative `names` path is taken from the directory of the config file.

use std::fs;
use std::path::{Path, PathBuf};

use layered_hobbs::{HobbsResolver, NameTable, PriorSentenceSearch};
use serde::{Deserialize, Serialize};

use crate::errors::{SpecError, SpecResult};
use crate::names::load_names;

/// Configuration for the fixture harness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// JSON name table used for gender agreement. No table means gender
    /// never rejects a candidate.
    pub names: Option<PathBuf>,
    /// How far back to look when the pronoun's own sentence has no antecedent.
    pub prior_sentences: PriorSentenceSearch,
}

impl HarnessConfig {
    /// Load from a TOML file. A missing file gives the defaults.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::load(path, e))?;
        let mut config: Self = toml::from_str(&content).map_err(|e| SpecError::load(path, e))?;

        if let (Some(names), Some(dir)) = (config.names.as_mut(), path.parent()) {
            if names.is_relative() {
                *names = dir.join(&*names);
            }
        }

        Ok(config)
    }

    /// Build the resolver this configuration describes.
    pub fn resolver(&self) -> SpecResult<HobbsResolver> {
        let names = match &self.names {
            Some(path) => load_names(path)?,
            None => NameTable::empty(),
        };
        Ok(HobbsResolver::new(names).with_prior_sentences(self.prior_sentences))
    }
}
