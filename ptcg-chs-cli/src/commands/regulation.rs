use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ptcg_chs_export::{default_banned, derive_banned, load_banned, read_sets, write_regulation};

use crate::error::CliError;
use crate::settings::{Overrides, Settings};

/// Derive `exp_banned.json` from a previously written catalog.
pub(crate) fn run_regulation(
    sets: Option<PathBuf>,
    banned: Option<&Path>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let paths = Settings::load()?.resolve(Overrides {
        output_dir: output,
        ..Default::default()
    });
    let sets_path = sets.unwrap_or_else(|| paths.output_dir.join("sets_min.json"));

    let records = read_sets(&sets_path)?;
    let banned = match banned {
        Some(path) => load_banned(path)?,
        None => default_banned(),
    };
    let regulation = derive_banned(&records, &banned);
    let written = write_regulation(&paths.output_dir, &regulation)?;

    log::info!(
        "{} {} of {} banned cards resolved, written to {}",
        "Regulation:".if_supports_color(Stdout, |t| t.bold()),
        regulation.expanded.len(),
        banned.len(),
        written.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
