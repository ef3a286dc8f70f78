use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ptcg_chs_core::Catalog;
use ptcg_chs_export::{ImageReport, catalog_records, export_images, plan_images, write_catalog};
use ptcg_chs_import::{
    LogProgress, builtin_fixups, default_rules, import_document, load_document, load_fixups,
    reconcile,
};

use crate::error::CliError;
use crate::settings::{Overrides, Resolved, Settings};

pub(crate) struct BuildOptions {
    pub overrides: Overrides,
    pub fixups: Option<PathBuf>,
    pub images: bool,
}

/// Import, reconcile and write the published catalog.
pub(crate) fn run_build(options: BuildOptions) -> Result<(), CliError> {
    let paths = Settings::load()?.resolve(options.overrides);

    log::info!(
        "Reading {}",
        paths.source.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let doc = load_document(&paths.source)?;
    let (mut catalog, stats) = import_document(&doc, &LogProgress)?;

    let mut fixups = builtin_fixups();
    if let Some(path) = &options.fixups {
        let extra = load_fixups(path)?;
        log::info!("Loaded {} fix-ups from {}", extra.len(), path.display());
        fixups.extend(extra);
    }
    let report = reconcile(&mut catalog, &default_rules(), &fixups)?;

    let records = catalog_records(&catalog);
    let files = write_catalog(&paths.output_dir, &records)?;

    let images = if options.images {
        Some(copy_images(&catalog, &paths)?)
    } else {
        None
    };

    log::info!("");
    log::info!(
        "{}",
        "Build complete".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  Imported:   {} sets, {} cards ({} staff skipped, {} duplicates dropped)",
        stats.sets,
        stats.cards_kept,
        stats.staff_skipped,
        stats.duplicates_dropped,
    );
    log::info!(
        "  Published:  {} sets, {} cards",
        catalog.len().if_supports_color(Stdout, |t| t.green()),
        catalog.card_count().if_supports_color(Stdout, |t| t.green()),
    );
    if report.fixups_missed > 0 {
        log::info!(
            "  Fix-ups:    {} applied, {}",
            report.fixups_applied,
            format!("{} missed", report.fixups_missed).if_supports_color(Stdout, |t| t.yellow()),
        );
    } else {
        log::info!("  Fix-ups:    {} applied", report.fixups_applied);
    }
    log::info!(
        "  Written:    {}, {}",
        files.pretty.display().if_supports_color(Stdout, |t| t.cyan()),
        files.compact.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if let Some(images) = images {
        let problems = images.missing + images.failed;
        if problems > 0 {
            log::info!(
                "  Images:     {} copied, {}",
                images.copied,
                format!("{} missing, {} failed", images.missing, images.failed)
                    .if_supports_color(Stdout, |t| t.yellow()),
            );
        } else {
            log::info!("  Images:     {} copied", images.copied);
        }
    }
    Ok(())
}

fn copy_images(catalog: &Catalog, paths: &Resolved) -> Result<ImageReport, CliError> {
    let plan = plan_images(catalog, &paths.data_root, &paths.output_dir);
    log::info!(
        "Copying {} images with {} workers ({} shared, {} unnumbered)",
        plan.jobs.len(),
        paths.image_workers,
        plan.shared,
        plan.unnumbered,
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("failed to create tokio runtime: {e}")))?;

    let pb = ProgressBar::new(plan.jobs.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let report = rt.block_on(export_images(plan.jobs, paths.image_workers, |_| {
        pb.inc(1)
    }));
    pb.finish_and_clear();
    Ok(report)
}
