//! Size-bounded chunk output.

use std::fs;
use std::path::PathBuf;

use emmy_fmt::{Emitter, StringEmitter};

use super::PREAMBLE;
use crate::config::ExportConfig;
use crate::error::ExportError;

/// Buffer that is written out as a numbered file once it passes the
/// configured threshold.
///
/// The buffer always starts with [`PREAMBLE`], so every chunk file is
/// self-contained. Declarations are never split: a chunk can overflow the
/// threshold by at most one declaration.
pub struct ChunkWriter<'c> {
    config: &'c ExportConfig,
    buffer: StringEmitter,
    /// Buffer length when the current declaration started.
    mark: usize,
    files: Vec<PathBuf>,
}

impl<'c> ChunkWriter<'c> {
    pub fn new(config: &'c ExportConfig) -> Self {
        let mut buffer = StringEmitter::new();
        buffer.emit(PREAMBLE);
        ChunkWriter {
            config,
            buffer,
            mark: PREAMBLE.len(),
            files: Vec::new(),
        }
    }

    /// The buffer declarations are rendered into.
    pub fn buffer(&mut self) -> &mut StringEmitter {
        &mut self.buffer
    }

    /// Whether the buffer holds nothing but the preamble.
    pub fn is_empty(&self) -> bool {
        self.buffer.len() <= PREAMBLE.len()
    }

    /// Remember where the next declaration starts.
    pub fn begin_declaration(&mut self) {
        self.mark = self.buffer.len();
    }

    /// Close the current declaration.
    ///
    /// If it appended anything, a blank separator line follows and the chunk
    /// is flushed when the buffer has grown past the threshold.
    pub fn end_declaration(&mut self) -> Result<(), ExportError> {
        if self.buffer.len() == self.mark {
            return Ok(());
        }
        self.buffer.emit_newline();
        if self.buffer.len() > self.config.chunk_threshold {
            self.flush()?;
        }
        Ok(())
    }

    /// Write the last partial chunk, if it holds any declaration text.
    pub fn finish(mut self) -> Result<Vec<PathBuf>, ExportError> {
        if !self.is_empty() {
            self.flush()?;
        }
        Ok(self.files)
    }

    fn flush(&mut self) -> Result<(), ExportError> {
        let path = self.config.chunk_path(self.files.len());
        fs::write(&path, self.buffer.as_str()).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(
            bytes = self.buffer.len(),
            path = %path.display(),
            "wrote chunk"
        );

        self.files.push(path);
        self.buffer.clear();
        self.buffer.emit(PREAMBLE);
        self.mark = self.buffer.len();
        Ok(())
    }
}
