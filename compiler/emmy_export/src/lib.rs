//! Emmy Export - EmmyLua Annotation Export for XLua
//!
//! Takes a host type model and writes EmmyLua definition files that a Lua
//! language server loads to complete and check scripts calling into the host
//! through XLua's `CS.*` tables.
//!
//! # Pipeline
//!
//! Type model -> [`generics`] normalization -> [`tracker`] seeding ->
//! per-declaration rendering into size-bounded chunks ([`dumper`]) ->
//! fallback aliases for types that are referenced but never exported.
//!
//! # Debug Environment Variables
//!
//! - `RUST_LOG=emmy_export=debug`: log every exported declaration and chunk.
//! - `RUST_LOG=emmy_export=trace`: also log every unexported reference.

use std::fs;
use std::path::Path;
use std::sync::Once;

pub mod config;
pub mod dumper;
pub mod error;
pub mod generics;
pub mod tracker;

pub use config::{load_config, ExportConfig, DEFAULT_CHUNK_THRESHOLD};
pub use dumper::{Dumper, ExportSummary, XLuaDumper, PREAMBLE};
pub use error::{DeclarationError, ExportError};
pub use generics::{GenericNormalizer, MergeInstantiations, Passthrough};
pub use tracker::ReferenceTracker;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// Load a JSON type model from `model_path` and export it with [`XLuaDumper`].
pub fn export_model_file(
    model_path: &Path,
    config: &ExportConfig,
) -> Result<ExportSummary, ExportError> {
    let json = fs::read_to_string(model_path).map_err(|source| ExportError::Read {
        path: model_path.to_owned(),
        source,
    })?;
    let declarations = emmy_model::load_model(&json).map_err(|source| ExportError::Parse {
        path: model_path.to_owned(),
        source,
    })?;

    tracing::debug!(
        declarations = declarations.len(),
        path = %model_path.display(),
        "loaded type model"
    );
    XLuaDumper.dump(declarations, config)
}
