//! Import progress reporting.

/// Trait for receiving import progress updates.
pub trait ImportProgress {
    /// Called after each set is built.
    fn on_set(&self, current: usize, total: usize, name: &str, cards: usize);

    /// Called when a phase starts (e.g., "Normalizing 212 sets").
    fn on_phase(&self, message: &str);

    /// Called when the import is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_set(&self, _current: usize, _total: usize, _name: &str, _cards: usize) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_set(&self, current: usize, total: usize, name: &str, cards: usize) {
        log::debug!("  [{}/{}] {} ({} cards)", current, total, name, cards);
        if current.is_multiple_of(50) || current == total {
            log::info!("  [{}/{}] sets normalized", current, total);
        }
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
