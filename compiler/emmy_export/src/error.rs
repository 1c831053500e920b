//! Export errors.
//!
//! Two categories:
//! - [`ExportError`]: fatal, aborts the run (I/O, model loading, configuration)
//! - [`DeclarationError`]: one declaration could not be rendered; the run continues

use std::io;
use std::path::PathBuf;

use emmy_fmt::RenderError;
use emmy_model::DeclKind;

/// A failure that aborts the whole export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create output directory `{}`: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A declaration whose rendering was abandoned.
///
/// Whatever text was appended before the failure stays in the output.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("error dumping {kind} '{name}': {source}")]
pub struct DeclarationError {
    /// Qualified host name of the declaration (`A.B.Foo`).
    pub name: String,
    pub kind: DeclKind,
    pub source: RenderError,
}
