//! Export Driver
//!
//! Turns a declaration list into numbered chunk files plus the fallback alias
//! file. A run has three passes over the (generic-normalized) list:
//!
//! 1. **Seed**: register every declaration with the reference tracker and its
//!    namespace chain with the namespace registry.
//! 2. **Emit**: render each declaration into the chunk buffer, flushing a
//!    chunk whenever the buffer grows past the threshold.
//! 3. **Fallback**: write aliases for referenced but unexported types.
//!
//! A declaration that fails to render is logged and skipped; I/O failures
//! abort the run.

mod chunks;
mod xlua;

pub use chunks::ChunkWriter;
pub use xlua::{NamespaceEntry, XLuaDumper};

use std::path::PathBuf;

use emmy_model::TypeDeclaration;

use crate::config::ExportConfig;
use crate::error::{DeclarationError, ExportError};

/// Text every chunk file starts with.
///
/// Declares the file as a definition file, bootstraps the root table and
/// stubs the XLua `typeof` helper.
pub const PREAMBLE: &str = "---@meta\n\
\n\
CS = CS or {}\n\
\n\
---XLua typeof function, returns the host type object\n\
---@param type any\n\
---@return System.Type\n\
function typeof(type) end\n\
\n";

/// An exporter for one binding convention.
pub trait Dumper {
    /// Display name, used in logs.
    fn name(&self) -> &'static str;

    /// Export `declarations` into `config.output_dir`.
    ///
    /// Every call starts from fresh state.
    fn dump(
        &self,
        declarations: Vec<TypeDeclaration>,
        config: &ExportConfig,
    ) -> Result<ExportSummary, ExportError>;
}

/// What a run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Chunk files in the order they were written.
    pub files: Vec<PathBuf>,
    /// The fallback alias file, if any type was referenced but not exported.
    pub fallback_file: Option<PathBuf>,
    /// Number of aliases in the fallback file.
    pub unexported: usize,
    /// Declarations rendered without error.
    pub exported_declarations: usize,
    pub failures: Vec<DeclarationError>,
    /// Distinct namespace paths registered in the seed pass.
    pub namespaces: usize,
}

impl ExportSummary {
    /// Whether every declaration rendered cleanly.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
