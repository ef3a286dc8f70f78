use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Reading or normalizing the vendor document failed
    #[error("Import error: {0}")]
    Import(#[from] ptcg_chs_import::ImportError),

    /// A reconciliation rule could not be applied
    #[error("Reconcile error: {0}")]
    Reconcile(#[from] ptcg_chs_import::ReconcileError),

    /// Fix-up file could not be loaded
    #[error("Fix-up error: {0}")]
    Fixup(#[from] ptcg_chs_import::FixupError),

    /// Writing or reading output files failed
    #[error("Export error: {0}")]
    Export(#[from] ptcg_chs_export::ExportError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
