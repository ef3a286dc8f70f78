//! Vendor document import and catalog reconciliation.
//!
//! This crate owns the whole normalization pipeline: the loose vendor
//! document model, code decoders, the card normalizer, per-set building,
//! the reconciliation rules and point fix-ups. [`import_document`] produces
//! the raw per-release catalog; [`reconcile`] folds it into the published one.

pub mod decode;
pub mod fixup;
pub mod heuristics;
pub mod normalize;
pub mod precedence;
pub mod progress;
pub mod raw;
pub mod reconcile;
pub mod set_builder;

use std::path::Path;

use ptcg_chs_core::{Catalog, PSet};
use thiserror::Error;

pub use decode::DecodeError;
pub use fixup::{
    Fixup, FixupError, FixupOutcome, FixupPatch, builtin_fixups, load_fixups, parse_fixups,
};
pub use normalize::{NormalizeError, SetContext, normalize_card, split_collection_number};
pub use precedence::SymbolPrecedence;
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use raw::RawDocument;
pub use reconcile::{
    MergePass, OwnNumbering, ReconcileError, ReconcileReport, Relabel, Rule, default_rules,
    reconcile,
};
pub use set_builder::{Pushed, SetBuilder};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("set {symbol}: {source}")]
    Series {
        symbol: String,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Statistics from one import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub sets: usize,
    pub cards_kept: usize,
    pub staff_skipped: usize,
    pub duplicates_dropped: usize,
}

/// Parse a vendor document from a JSON string. `path` only labels errors.
pub fn parse_document(json: &str, path: &str) -> Result<RawDocument, ImportError> {
    serde_json::from_str(json).map_err(|e| ImportError::Json {
        path: path.to_string(),
        source: e,
    })
}

pub fn load_document(path: &Path) -> Result<RawDocument, ImportError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ImportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_document(&contents, &path.display().to_string())
}

/// Build the per-release catalog, oldest set first.
///
/// Fails on the first unknown code or missing required field.
pub fn import_document(
    doc: &RawDocument,
    progress: &dyn ImportProgress,
) -> Result<(Catalog, ImportStats), ImportError> {
    let precedence = SymbolPrecedence::from_document(doc);
    let mut catalog = Catalog::new();
    let mut stats = ImportStats::default();
    let total = doc.collections.len();

    progress.on_phase(&format!("Normalizing {} sets", total));

    for (i, raw_set) in doc.collections.iter().rev().enumerate() {
        let symbol = raw_set.commodity_code.as_str();
        let series = decode::decode_series(raw_set.series.as_deref(), &raw_set.name).map_err(
            |source| ImportError::Series {
                symbol: symbol.to_string(),
                source,
            },
        )?;
        let ctx = SetContext { symbol, series };

        let mut builder = SetBuilder::new(PSet::new(
            raw_set.name.clone(),
            symbol,
            raw_set.sales_date.clone(),
            series,
        ));
        for raw_card in &raw_set.cards {
            let Some(card) = normalize_card(raw_card, ctx, &precedence)? else {
                stats.staff_skipped += 1;
                continue;
            };
            match builder.push(card) {
                Pushed::Kept => stats.cards_kept += 1,
                Pushed::Duplicate => stats.duplicates_dropped += 1,
            }
        }

        let set = builder.finish();
        progress.on_set(i + 1, total, &set.name, set.cards.len());
        catalog.insert(symbol, set);
    }
    stats.sets = catalog.len();

    progress.on_complete(&format!(
        "Imported {} sets, {} cards ({} staff variants skipped, {} duplicates dropped)",
        stats.sets, stats.cards_kept, stats.staff_skipped, stats.duplicates_dropped
    ));
    Ok((catalog, stats))
}
