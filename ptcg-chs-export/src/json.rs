//! `sets.json` and `sets_min.json`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::ExportError;
use crate::record::SetRecord;

pub const PRETTY_FILE: &str = "sets.json";
pub const COMPACT_FILE: &str = "sets_min.json";

/// Four-space indented JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    // serde_json only ever writes UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// JSON with no whitespace.
pub fn to_json_compact<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Paths written by [`write_catalog`].
#[derive(Debug, Clone)]
pub struct CatalogFiles {
    pub pretty: PathBuf,
    pub compact: PathBuf,
}

/// Write both catalog files into `dir`, creating it if needed.
pub fn write_catalog(dir: &Path, sets: &[SetRecord]) -> Result<CatalogFiles, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;

    let pretty = dir.join(PRETTY_FILE);
    let compact = dir.join(COMPACT_FILE);
    write_json(&pretty, to_json_pretty(sets))?;
    write_json(&compact, to_json_compact(sets))?;

    log::info!(
        "Wrote {} sets to {} and {}",
        sets.len(),
        pretty.display(),
        compact.display()
    );
    Ok(CatalogFiles { pretty, compact })
}

pub(crate) fn write_json(
    path: &Path,
    rendered: Result<String, serde_json::Error>,
) -> Result<(), ExportError> {
    let text = rendered.map_err(|e| ExportError::json(path.display().to_string(), e))?;
    std::fs::write(path, text).map_err(|e| ExportError::io(path, e))
}

/// Parse either catalog file back into records.
pub fn read_sets(path: &Path) -> Result<Vec<SetRecord>, ExportError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| ExportError::json(path.display().to_string(), e))
}

#[cfg(test)]
#[path = "tests/json_tests.rs"]
mod tests;
