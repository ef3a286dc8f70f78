use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::{Overrides, Settings, settings_path};

/// Show the settings file status and the effective values.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = Settings::load()?;
    let resolved = settings.resolve(Overrides::default());

    log::info!(
        "{}",
        "ptcg-chs Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let source = |from_file: bool| {
        if from_file { "(settings)" } else { "(default)" }
    };
    log::info!(
        "  data_root:     {} {}",
        resolved.data_root.display(),
        source(settings.paths.data_root.is_some()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  source:        {} {}",
        resolved.source.display(),
        source(settings.paths.source.is_some()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  output_dir:    {} {}",
        resolved.output_dir.display(),
        source(settings.paths.output_dir.is_some()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  image_workers: {} {}",
        resolved.image_workers,
        source(settings.export.image_workers.is_some()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
