//! Name tables stored as JSON.
//!
//! ```json
//! { "male": ["john", "bill"], "female": ["mary"] }
//! ```
//!
//! Either list may be omitted. Entries are lowercased by [`NameTable::new`].

use std::fs;
use std::path::Path;

use layered_hobbs::NameTable;
use serde::Deserialize;

use crate::errors::{SpecError, SpecResult};

#[derive(Debug, Default, Deserialize)]
struct NameLists {
    #[serde(default)]
    male: Vec<String>,
    #[serde(default)]
    female: Vec<String>,
}

/// Parse a name table from JSON text.
pub fn parse_names(json: &str) -> SpecResult<NameTable> {
    let lists: NameLists = serde_json::from_str(json).map_err(|e| SpecError::Parse {
        line: e.line(),
        message: e.to_string(),
    })?;
    Ok(NameTable::new(lists.male, lists.female))
}

/// Read a name table from a JSON file.
pub fn load_names(path: &Path) -> SpecResult<NameTable> {
    let content = fs::read_to_string(path).map_err(|e| SpecError::load(path, e))?;
    let table = parse_names(&content).map_err(|e| SpecError::load(path, e))?;
    log::info!(
        "loaded {} male and {} female names from {}",
        table.male_count(),
        table.female_count(),
        path.display()
    );
    Ok(table)
}
