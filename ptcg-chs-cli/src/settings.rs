//! Persistent defaults in `~/.config/ptcg-chs/settings.toml`.
//!
//! ```toml
//! [paths]
//! data_root = "/data/PTCG-CHS-Datasets"
//! source = "/data/PTCG-CHS-Datasets/ptcg_chs_infos.json"
//! output_dir = "/data/output"
//!
//! [export]
//! image_workers = 8
//! ```
//!
//! Every value is resolved as: command-line flag, then this file, then the
//! built-in default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliError;

pub(crate) const DEFAULT_DATA_ROOT: &str = "../PTCG-CHS-Datasets";
pub(crate) const DEFAULT_SOURCE_FILE: &str = "ptcg_chs_infos.json";
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "../output";

/// Canonical path to the settings file: `~/.config/ptcg-chs/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("ptcg-chs").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub paths: PathSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct PathSettings {
    pub data_root: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ExportSettings {
    pub image_workers: Option<usize>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    pub data_root: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub image_workers: Option<usize>,
}

/// Effective settings after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub data_root: PathBuf,
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub image_workers: usize,
}

impl Settings {
    pub(crate) fn parse(contents: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(contents)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
    }

    /// Load the settings file. A missing file gives the defaults.
    pub(crate) fn load_from(path: &Path) -> Result<Self, CliError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(CliError::config(format!("{}: {}", path.display(), e))),
        }
    }

    pub(crate) fn load() -> Result<Self, CliError> {
        Self::load_from(&settings_path())
    }

    pub(crate) fn resolve(&self, overrides: Overrides) -> Resolved {
        let data_root = overrides
            .data_root
            .or_else(|| self.paths.data_root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_ROOT));
        let source = overrides
            .source
            .or_else(|| self.paths.source.clone())
            .unwrap_or_else(|| data_root.join(DEFAULT_SOURCE_FILE));
        let output_dir = overrides
            .output_dir
            .or_else(|| self.paths.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let image_workers = overrides
            .image_workers
            .or(self.export.image_workers)
            .unwrap_or_else(default_workers)
            .max(1);
        Resolved {
            data_root,
            source,
            output_dir,
            image_workers,
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
