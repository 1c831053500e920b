//! Emmy Formatter
//!
//! Renders exported type declarations as EmmyLua annotations for the XLua
//! binding convention (every host type lives under the `CS` table).
//!
//! # Modules
//!
//! - [`emitter`]: append-only output abstraction
//! - [`names`]: host type name to annotation type name mapping
//! - [`annotations`]: per-fragment rendering (headers, members, methods, delegates)
//! - [`namespaces`]: create-if-absent namespace table statements

pub mod annotations;
pub mod emitter;
pub mod names;
pub mod namespaces;

pub use annotations::RenderError;
pub use emitter::{Emitter, StringEmitter, INDENT_WIDTH};
pub use names::{map_type_name, qualify, TypeScope, ROOT_TABLE};
pub use namespaces::{ensure_namespace, namespace_chain};
