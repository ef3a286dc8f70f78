//! ptcg-chs CLI
//!
//! Builds the published simplified-Chinese card catalog from the vendor
//! dataset.

mod commands;
mod error;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::build::BuildOptions;
use crate::error::CliError;
use crate::settings::Overrides;

#[derive(Parser)]
#[command(name = "ptcg-chs")]
#[command(about = "Normalize the PTCG simplified-Chinese card dataset", long_about = None)]
struct Cli {
    /// Show per-rule and per-set detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import, reconcile and write sets.json, sets_min.json and images
    Build {
        /// Dataset checkout holding the source document and images
        #[arg(long)]
        data_root: Option<PathBuf>,

        /// Source document (defaults to ptcg_chs_infos.json in the data root)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extra fix-ups to apply after reconciliation (YAML)
        #[arg(long)]
        fixups: Option<PathBuf>,

        /// Skip copying card images
        #[arg(long)]
        no_images: bool,

        /// Number of image copy workers
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Derive exp_banned.json from a written catalog
    Regulation {
        /// Catalog to read (defaults to sets_min.json in the output directory)
        #[arg(long)]
        sets: Option<PathBuf>,

        /// Banned card list (YAML, replaces the built-in list)
        #[arg(long)]
        banned: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect persistent settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective settings and where they come from
    Show,

    /// Print the settings file path
    Path,
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Build {
            data_root,
            source,
            output,
            fixups,
            no_images,
            workers,
        } => commands::build::run_build(BuildOptions {
            overrides: Overrides {
                data_root,
                source,
                output_dir: output,
                image_workers: workers,
            },
            fixups,
            images: !no_images,
        }),
        Commands::Regulation {
            sets,
            banned,
            output,
        } => commands::regulation::run_regulation(sets, banned.as_deref(), output),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli.command) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
