//! Export configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dumper::PREAMBLE;
use crate::error::ExportError;

/// Chunk size above which the buffer is written out (500 KiB).
pub const DEFAULT_CHUNK_THRESHOLD: usize = 500 * 1024;

/// Configuration for one export run.
///
/// Can be built in code or read from a JSON file with [`load_config`];
/// every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    /// Directory the chunk files and the fallback file are written to.
    pub output_dir: PathBuf,
    /// A chunk is flushed once the buffer grows past this many bytes.
    pub chunk_threshold: usize,
    /// Chunk files are named `<prefix><n>.lua`, starting at 0.
    pub chunk_prefix: String,
    /// File name of the alias file for referenced but unexported types.
    pub fallback_file: String,
    /// Collapse closed generic instantiations before exporting.
    pub merge_generics: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            output_dir: PathBuf::from("."),
            chunk_threshold: DEFAULT_CHUNK_THRESHOLD,
            chunk_prefix: "xlua_dump_".to_owned(),
            fallback_file: "xlua_noexport_types.lua".to_owned(),
            merge_generics: true,
        }
    }
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ExportConfig {
            output_dir: output_dir.into(),
            ..ExportConfig::default()
        }
    }

    #[must_use]
    pub fn with_chunk_threshold(mut self, bytes: usize) -> Self {
        self.chunk_threshold = bytes;
        self
    }

    #[must_use]
    pub fn with_merge_generics(mut self, merge: bool) -> Self {
        self.merge_generics = merge;
        self
    }

    /// Path of the chunk with the given index.
    pub fn chunk_path(&self, index: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}{index}.lua", self.chunk_prefix))
    }

    pub fn fallback_path(&self) -> PathBuf {
        self.output_dir.join(&self.fallback_file)
    }

    /// Check the settings before anything is written.
    ///
    /// The threshold must leave room for declarations after the preamble,
    /// otherwise every declaration would get its own chunk.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.chunk_threshold <= PREAMBLE.len() {
            return Err(ExportError::InvalidConfig(format!(
                "chunk threshold {} must be larger than the {}-byte preamble",
                self.chunk_threshold,
                PREAMBLE.len()
            )));
        }
        if self.chunk_prefix.is_empty() {
            return Err(ExportError::InvalidConfig(
                "chunk prefix must not be empty".to_owned(),
            ));
        }
        if self.fallback_file.is_empty() {
            return Err(ExportError::InvalidConfig(
                "fallback file name must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Read an [`ExportConfig`] from a JSON file.
pub fn load_config(path: &Path) -> Result<ExportConfig, ExportError> {
    let text = fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ExportError::Parse {
        path: path.to_owned(),
        source,
    })
}
