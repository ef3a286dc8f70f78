//! Catalog reconciliation.
//!
//! The vendor document files every promotional drop, regional gift box and
//! re-released bundle as its own set. The published catalog folds them into a
//! few stable entries. This module applies an ordered list of [`Rule`]s that
//! performs that folding: renames, merges with synthetic numbering, deletes,
//! symbol collapsing, relabelling, the SMP overlap filter, display-name
//! trimming and the final sort. Point fix-ups run last.
//!
//! Rule order is significant. Numbering must happen before the overlap filter
//! and before sorting, and deletes must follow the merges that consume their
//! sets.

use log::{debug, info, warn};
use ptcg_chs_core::{Card, Catalog, card_no};
use thiserror::Error;

use crate::fixup::{Fixup, FixupOutcome};
use crate::heuristics;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("{rule} rule names missing set {key:?}")]
    MissingSet { rule: &'static str, key: String },
}

impl ReconcileError {
    fn missing(rule: &'static str, key: &str) -> Self {
        Self::MissingSet {
            rule,
            key: key.to_string(),
        }
    }
}

// ── Rules ───────────────────────────────────────────────────────────────────

/// When a merge target numbers its own unnumbered cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnNumbering {
    Skip,
    BeforeAppend,
    AfterAppend,
}

/// Append the cards of `sources` to `target`.
///
/// Appended cards are refiled under `file_under`. Each pass numbers cards
/// from its own counter starting at 1, so synthetic numbers never collide
/// within one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePass {
    pub target: String,
    pub sources: Vec<String>,
    pub file_under: String,
    pub number_appended: bool,
    pub own_numbering: OwnNumbering,
}

impl MergePass {
    /// A pass that files appended cards under the target key and numbers them.
    pub fn into_target(target: &str, sources: &[&str]) -> Self {
        Self {
            target: target.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
            file_under: target.to_string(),
            number_appended: true,
            own_numbering: OwnNumbering::Skip,
        }
    }

    pub fn file_under(mut self, symbol: &str) -> Self {
        self.file_under = symbol.to_string();
        self
    }

    pub fn number_appended(mut self, number: bool) -> Self {
        self.number_appended = number;
        self
    }

    pub fn own_numbering(mut self, own: OwnNumbering) -> Self {
        self.own_numbering = own;
        self
    }
}

/// New display name, symbol or release date for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relabel {
    pub key: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub clear_release_date: bool,
}

impl Relabel {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            name: None,
            symbol: None,
            clear_release_date: false,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn clear_release_date(mut self) -> Self {
        self.clear_release_date = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Move the entry under `from` to the key `to`.
    Rename { from: String, to: String },
    /// Store a copy of `from` under `to`.
    Duplicate { from: String, to: String },
    /// Empty an entry's card list.
    Clear(String),
    Merge(MergePass),
    Delete(Vec<String>),
    /// Sets whose symbol contains `PROMO` get the symbol `PROMO`, and their
    /// cards are refiled under the era's promo symbol.
    CollapsePromoSymbols,
    Relabel(Relabel),
    /// Drop cards still without a number from one entry.
    DropUnnumbered(String),
    /// Strip leading edition qualifiers from every display name.
    TrimDisplayNames,
    SortCards,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rename { .. } => "rename",
            Self::Duplicate { .. } => "duplicate",
            Self::Clear(_) => "clear",
            Self::Merge(_) => "merge",
            Self::Delete(_) => "delete",
            Self::CollapsePromoSymbols => "collapse-promo",
            Self::Relabel(_) => "relabel",
            Self::DropUnnumbered(_) => "drop-unnumbered",
            Self::TrimDisplayNames => "trim-names",
            Self::SortCards => "sort",
        }
    }
}

fn rename(from: &str, to: &str) -> Rule {
    Rule::Rename {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// The production rule list.
pub fn default_rules() -> Vec<Rule> {
    let mut rules = vec![
        rename("PROMO", "SMP"),
        rename("PROMO3", "SSP"),
        rename("PROMO5", "PROMO-MARNIE"),
        rename("PROMO7", "PROMO-Charizard"),
        rename("PROMO8", "PROMO-CharizardB"),
        rename("PROMO10", "PROMO-1st"),
        rename("PROMO11", "PROMO-1stB"),
        rename("PROMO12", "PROMO-PikaVU"),
        Rule::Duplicate {
            from: "CSFC1".into(),
            to: "CSFC".into(),
        },
        Rule::Merge(
            MergePass::into_target("SMP", &["PROMO1", "PROMO2"])
                .own_numbering(OwnNumbering::BeforeAppend),
        ),
        Rule::Merge(
            MergePass::into_target(
                "SSP",
                &[
                    "PROMO4",
                    "PROMO6",
                    "PROMO9",
                    "PROMO13",
                    "PROMO-Charizard",
                    "PROMO-CharizardB",
                    "PROMO-1st",
                    "PROMO-1stB",
                    "PROMO-PikaVU",
                ],
            )
            .own_numbering(OwnNumbering::AfterAppend),
        ),
        Rule::Merge(
            MergePass::into_target("PROMO-Charizard", &["PROMO-CharizardB"])
                .file_under("SSP")
                .number_appended(false),
        ),
        Rule::Merge(
            MergePass::into_target("PROMO-1st", &["PROMO-1stB"])
                .file_under("SSP")
                .number_appended(false),
        ),
        Rule::Merge(MergePass::into_target("CSEC", &["CSEC1", "CSEC2", "CSEC4"])),
        Rule::Clear("CSFC".into()),
        Rule::Merge(MergePass::into_target("CSFC", &["CSFC1"])),
        Rule::Merge(MergePass::into_target("CSHC", &["CSHC1", "CSHC2"])),
        Rule::Delete(
            [
                "PROMO1",
                "PROMO2",
                "PROMO4",
                "PROMO6",
                "PROMO9",
                "PROMO13",
                "PROMO-CharizardB",
                "PROMO-1stB",
                "CSEC1",
                "CSEC2",
                "CSEC4",
                "CSFC1",
                "CSFC2",
                "CSFC3",
                "CSFC4",
                "CS4.1C-1",
                "CS4.1C-2",
                "CS4.1C-3",
                "CSHC1",
                "CSHC2",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        ),
        Rule::CollapsePromoSymbols,
    ];

    rules.extend(
        [
            Relabel::new("SSP")
                .symbol("SSP")
                .name("剑&盾 特典卡")
                .clear_release_date(),
            Relabel::new("SMP")
                .symbol("SMP")
                .name("太阳&月亮 特典卡")
                .clear_release_date(),
            Relabel::new("PROMO-Charizard")
                .symbol("PROMO")
                .name("喷火龙VMAX套装礼盒"),
            Relabel::new("PROMO-1st").symbol("PROMO").name("一周年礼盒"),
            Relabel::new("CSEC").symbol("CSEC").name("四方联结系列礼盒"),
            Relabel::new("CSFC").symbol("CSFC").name("龙之再临系列礼盒"),
            Relabel::new("CS4.1C").name("辉耀能量 宝可梦艺术卡套礼盒"),
            Relabel::new("CSHC").symbol("CSHC").name("伊布进阶礼盒"),
        ]
        .into_iter()
        .map(Rule::Relabel),
    );

    rules.extend([
        Rule::DropUnnumbered("SMP".into()),
        Rule::TrimDisplayNames,
        Rule::SortCards,
    ]);
    rules
}

// ── Report ──────────────────────────────────────────────────────────────────

/// What a reconciliation run changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    pub sets_renamed: usize,
    pub sets_merged: usize,
    pub sets_deleted: usize,
    pub cards_appended: usize,
    pub synthetic_numbers: usize,
    pub promo_sets_collapsed: usize,
    pub overlap_dropped: usize,
    pub names_trimmed: usize,
    pub fixups_applied: usize,
    pub fixups_missed: usize,
}

// ── Engine ──────────────────────────────────────────────────────────────────

/// Apply `rules` in order, then `fixups`, then recompute every card count.
///
/// Fails on the first rule that names a set the catalog does not hold; the
/// catalog is left partially reconciled in that case and should be dropped.
pub fn reconcile(
    catalog: &mut Catalog,
    rules: &[Rule],
    fixups: &[Fixup],
) -> Result<ReconcileReport, ReconcileError> {
    let mut report = ReconcileReport::default();

    for rule in rules {
        debug!("Applying {} rule", rule.name());
        apply_rule(catalog, rule, &mut report)?;
    }

    for fixup in fixups {
        match fixup.apply(catalog) {
            FixupOutcome::Applied => {
                debug!("Applied fix-up {fixup}");
                report.fixups_applied += 1;
            }
            outcome => {
                warn!("Fix-up {fixup} not applied: {outcome}");
                report.fixups_missed += 1;
            }
        }
    }

    for set in catalog.sets_mut() {
        set.refresh_count();
    }

    info!(
        "Reconciled {} sets ({} renamed, {} merged, {} deleted, {} synthetic numbers)",
        catalog.len(),
        report.sets_renamed,
        report.sets_merged,
        report.sets_deleted,
        report.synthetic_numbers,
    );
    Ok(report)
}

fn apply_rule(
    catalog: &mut Catalog,
    rule: &Rule,
    report: &mut ReconcileReport,
) -> Result<(), ReconcileError> {
    let name = rule.name();
    match rule {
        Rule::Rename { from, to } => {
            if !catalog.rename(from, to) {
                return Err(ReconcileError::missing(name, from));
            }
            debug!("  {from} -> {to}");
            report.sets_renamed += 1;
        }
        Rule::Duplicate { from, to } => {
            let copy = catalog
                .get(from)
                .cloned()
                .ok_or_else(|| ReconcileError::missing(name, from))?;
            catalog.insert(to.clone(), copy);
        }
        Rule::Clear(key) => {
            catalog
                .get_mut(key)
                .ok_or_else(|| ReconcileError::missing(name, key))?
                .cards
                .clear();
        }
        Rule::Merge(pass) => apply_merge(catalog, pass, report)?,
        Rule::Delete(keys) => {
            for key in keys {
                catalog
                    .remove(key)
                    .ok_or_else(|| ReconcileError::missing(name, key))?;
                report.sets_deleted += 1;
            }
        }
        Rule::CollapsePromoSymbols => collapse_promo_symbols(catalog, report),
        Rule::Relabel(relabel) => {
            let set = catalog
                .get_mut(&relabel.key)
                .ok_or_else(|| ReconcileError::missing(name, &relabel.key))?;
            if let Some(new_name) = &relabel.name {
                set.name = new_name.clone();
            }
            if let Some(symbol) = &relabel.symbol {
                set.symbol = symbol.clone();
            }
            if relabel.clear_release_date {
                set.release_date = None;
            }
        }
        Rule::DropUnnumbered(key) => {
            let set = catalog
                .get_mut(key)
                .ok_or_else(|| ReconcileError::missing(name, key))?;
            let before = set.cards.len();
            set.cards.retain(|c| c.card_no().is_some());
            let dropped = before - set.cards.len();
            debug!("  dropped {dropped} unnumbered cards from {key}");
            report.overlap_dropped += dropped;
        }
        Rule::TrimDisplayNames => {
            for set in catalog.sets_mut() {
                if let Some(trimmed) = heuristics::trim_edition_prefix(&set.name) {
                    set.name = trimmed;
                    report.names_trimmed += 1;
                }
            }
        }
        Rule::SortCards => {
            for set in catalog.sets_mut() {
                set.sort_cards();
            }
        }
    }
    Ok(())
}

/// Give `card` the next synthetic number if it has none.
fn number_card(card: &mut Card, counter: &mut u32, report: &mut ReconcileReport) {
    if card.collection.card_no.is_none() {
        *counter += 1;
        card.collection.card_no = Some(card_no::synthetic(*counter));
        report.synthetic_numbers += 1;
    }
}

fn apply_merge(
    catalog: &mut Catalog,
    pass: &MergePass,
    report: &mut ReconcileReport,
) -> Result<(), ReconcileError> {
    if !catalog.contains(&pass.target) {
        return Err(ReconcileError::missing("merge", &pass.target));
    }
    if let Some(missing) = pass.sources.iter().find(|s| !catalog.contains(s)) {
        return Err(ReconcileError::missing("merge", missing));
    }

    let mut counter = 0;

    if pass.own_numbering == OwnNumbering::BeforeAppend {
        if let Some(target) = catalog.get_mut(&pass.target) {
            for card in &mut target.cards {
                number_card(card, &mut counter, report);
            }
        }
    }

    for source in &pass.sources {
        let Some(set) = catalog.get_mut(source) else {
            continue;
        };
        // Source cards keep the refiling and numbering.
        for card in &mut set.cards {
            card.collection.set_symbol = pass.file_under.clone();
            if pass.number_appended {
                number_card(card, &mut counter, report);
            }
        }
        let appended = set.cards.clone();
        debug!("  {} cards {} -> {}", appended.len(), source, pass.target);
        report.cards_appended += appended.len();
        report.sets_merged += 1;
        if let Some(target) = catalog.get_mut(&pass.target) {
            target.cards.extend(appended);
        }
    }

    if pass.own_numbering == OwnNumbering::AfterAppend {
        if let Some(target) = catalog.get_mut(&pass.target) {
            for card in &mut target.cards {
                number_card(card, &mut counter, report);
            }
        }
    }
    Ok(())
}

fn collapse_promo_symbols(catalog: &mut Catalog, report: &mut ReconcileReport) {
    for set in catalog.sets_mut() {
        if !set.symbol.contains("PROMO") {
            continue;
        }
        set.symbol = "PROMO".to_string();
        report.promo_sets_collapsed += 1;
        match set.series.promo_symbol() {
            Some(symbol) => {
                for card in &mut set.cards {
                    card.collection.set_symbol = symbol.to_string();
                }
            }
            None => warn!(
                "{} promo set {:?} has no era promo symbol; cards keep their symbols",
                set.series, set.name
            ),
        }
    }
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
