use std::fmt;

use thiserror::Error;

/// Which mirror a missing cell belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorKind {
    Header,
    Column,
}

impl fmt::Display for MirrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MirrorKind::Header => write!(f, "header"),
            MirrorKind::Column => write!(f, "column"),
        }
    }
}

/// Failures inside a synchronization step.
///
/// None of these reach the host: the controller logs them and skips the
/// affected step, leaving the sticky regions as they were.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// The root container is not part of the rendered tree.
    #[error("sticky table root '{0}' is not mounted")]
    MissingMount(String),

    /// The table was mounted before it was rendered.
    #[error("sticky table has not been rendered")]
    NotRendered,

    /// A body cell expected for measurement is absent.
    #[error("no body cell at row {row}, column {column}")]
    MissingCell { row: usize, column: usize },

    /// A mirrored cell expected for a write is absent.
    #[error("no {kind} mirror cell at index {index}")]
    MissingMirror { kind: MirrorKind, index: usize },
}
