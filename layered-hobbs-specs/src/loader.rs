//! Fixture file loading.

use crate::{parse_fixture, HobbsFixture, SpecError};
use std::fs;
use std::path::Path;

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> Result<HobbsFixture, SpecError> {
    let content = fs::read_to_string(path).map_err(|e| SpecError::load(path, e))?;
    // report parse errors against the file they came from
    parse_fixture(&content).map_err(|e| SpecError::load(path, e))
}

/// Load all fixtures from a directory (glob: **/*.hobbs), sorted by path.
pub fn load_all_fixtures(dir: &Path) -> Result<Vec<(String, HobbsFixture)>, SpecError> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, HobbsFixture)>,
) -> Result<(), SpecError> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| SpecError::load(dir, e))? {
        let entry = entry.map_err(|e| SpecError::load(dir, e))?;
        let path = entry.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "hobbs") {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            log::info!(
                "loaded {} ({} cases)",
                relative.display(),
                fixture.cases.len()
            );
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}
