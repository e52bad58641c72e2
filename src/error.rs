//! Error types for the account work queue and its collaborators.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or using the template engine
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("word bank '{0}' is empty")]
    EmptyBank(String),

    #[error("template references unknown word bank '{placeholder}': {template}")]
    UnknownBank { placeholder: String, template: String },

    #[error("template set has no templates")]
    NoTemplates,
}

/// Errors raised by the remote ledger client boundary.
///
/// The message text is the only information the remote client exposes for
/// rejected operations; classification into transient/permanent categories
/// happens in [`crate::ledger::classify_ledger_error`].
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    #[error("broadcast rejected: {0}")]
    Rejected(String),

    #[error("ledger transport error: {0}")]
    Transport(String),
}

impl LedgerError {
    /// The raw remote message, regardless of variant.
    pub fn message(&self) -> &str {
        match self {
            LedgerError::Rejected(msg) | LedgerError::Transport(msg) => msg,
        }
    }
}

/// Errors raised by the external content-generation API
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content endpoint returned HTTP {0}")]
    Status(u16),

    #[error("content endpoint returned empty text")]
    Empty,

    #[error("content request failed: {0}")]
    Request(String),

    #[error("content generation gave up after {0} attempts")]
    Exhausted(u32),
}

/// Errors raised by a single account action attempt
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("no recent post found for @{0}")]
    NoTargetPost(String),
}

/// Errors raised by queue orchestration itself.
///
/// Per-file failures never surface here; they are classified, logged, and
/// counted into the run summary. Only problems with the run as a whole
/// (unreadable directory, invalid configuration) propagate.
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("failed to list account directory {path:?}: {source}")]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("worker task panicked: {0}")]
    WorkerPanic(String),
}
