use crate::contestant::Contestant;
use crate::error::TallyResult;
use std::fs;
use std::path::Path;

pub const DEFAULT_STORE_FILE: &str = "fiesta-contestants.json";

/// Loads the persisted contestant list. A missing or blank store reads as an
/// empty roster, not an error; malformed JSON is.
pub fn load<P: AsRef<Path>>(path: P) -> TallyResult<Vec<Contestant>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Writes the full contestant list back, pretty-printed.
pub fn save<P: AsRef<Path>>(path: P, contestants: &[Contestant]) -> TallyResult<()> {
    let json = serde_json::to_string_pretty(contestants)?;
    fs::write(path, json)?;
    Ok(())
}
