//! Type Reference Tracking
//!
//! Every name written into a signature must resolve to something for the
//! language server. The tracker records which names are exported as full
//! declarations and which are only referenced; the latter are written to a
//! fallback file as aliases of `any`.
//!
//! Invariants:
//! - `exported` and `unexported` never share a name
//! - `unexported` only grows
//! - unexported names are stored in the same qualified form the mapper prints

use std::fs;
use std::io;
use std::path::Path;

use emmy_fmt::names::{
    container_kind, declaration_name, generic_parts, split_generic_args, strip_array_suffix,
    Container,
};
use emmy_fmt::{qualify, TypeScope};
use emmy_model::TypeDeclaration;
use rustc_hash::FxHashSet;

/// Names that are always resolvable without a declaration.
pub const BUILTIN_TYPES: [&str; 42] = [
    "void",
    "bool",
    "byte",
    "sbyte",
    "short",
    "ushort",
    "int",
    "uint",
    "long",
    "ulong",
    "float",
    "double",
    "decimal",
    "char",
    "string",
    "object",
    "System.Void",
    "System.Boolean",
    "System.Byte",
    "System.SByte",
    "System.Int16",
    "System.UInt16",
    "System.Int32",
    "System.UInt32",
    "System.Int64",
    "System.UInt64",
    "System.Single",
    "System.Double",
    "System.Decimal",
    "System.Char",
    "System.String",
    "System.Object",
    "boolean",
    "integer",
    "number",
    "any",
    "table",
    "nil",
    "function",
    "userdata",
    "thread",
    "lightuserdata",
];

const FALLBACK_HEADER: &str = "---@meta\n\n\
--- Unexported types referenced in exported types\n\
--- These types are defined as aliases to 'any' for type safety\n\n";

/// Registry of exported and merely referenced type names.
#[derive(Debug, Default)]
pub struct ReferenceTracker {
    exported: FxHashSet<String>,
    unexported: FxHashSet<String>,
}

impl ReferenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every declaration and the built-in vocabulary as exported.
    ///
    /// Must run before the first [`check`](Self::check).
    pub fn seed(&mut self, declarations: &[TypeDeclaration]) {
        debug_assert!(
            self.unexported.is_empty(),
            "seed must run before any reference is checked"
        );

        for decl in declarations {
            let info = decl.info();
            // `Cache<int>` is referenced as `Cache`
            let name = generic_parts(&info.name).map_or(info.name.as_str(), |(outer, _)| outer.trim());
            let qualified = if info.namespace.is_empty() {
                name.to_owned()
            } else {
                format!("{}.{name}", info.namespace)
            };

            self.exported.insert(declaration_name(&info.namespace, name));
            self.exported.insert(qualified);
            self.exported.insert(name.to_owned());
        }
        self.exported
            .extend(BUILTIN_TYPES.iter().map(|&name| name.to_owned()));

        tracing::debug!(exported = self.exported.len(), "seeded reference tracker");
    }

    /// Record a referenced type name.
    pub fn check(&mut self, type_name: &str) {
        self.check_scoped(type_name, &TypeScope::EMPTY);
    }

    /// Record a referenced type name, treating the scope's generic
    /// parameters as resolvable.
    ///
    /// Generic arguments are checked recursively; the outer name is recorded
    /// unless the mapper collapses it into a Lua shape (`T[]`, `table`).
    pub fn check_scoped(&mut self, type_name: &str, scope: &TypeScope<'_>) {
        let name = strip_array_suffix(type_name.trim());
        if name.is_empty() {
            return;
        }

        let bare = match generic_parts(name) {
            Some((outer, args)) => {
                let args = split_generic_args(args);
                for arg in &args {
                    self.check_scoped(arg, scope);
                }
                let collapsed = match container_kind(outer) {
                    Some(Container::List) => args.len() == 1,
                    Some(Container::Map) => true,
                    None => false,
                };
                if collapsed {
                    return;
                }
                outer.trim()
            }
            None => name,
        };

        if bare.is_empty() || scope.contains(bare) || self.exported.contains(bare) {
            return;
        }

        let canonical = qualify(bare);
        if self.exported.contains(&canonical) || self.unexported.contains(&canonical) {
            return;
        }

        tracing::trace!(name = %canonical, "unexported reference");
        self.unexported.insert(canonical);
    }

    /// Whether `name` was registered by [`seed`](Self::seed).
    pub fn is_exported(&self, name: &str) -> bool {
        self.exported.contains(name)
    }

    pub fn unexported_count(&self) -> usize {
        self.unexported.len()
    }

    /// Unexported names in lexicographic order.
    pub fn unexported(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.unexported.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Render the fallback alias file, or `None` when nothing is unexported.
    pub fn render_fallback(&self) -> Option<String> {
        if self.unexported.is_empty() {
            return None;
        }

        let mut text = String::from(FALLBACK_HEADER);
        for name in self.unexported() {
            text.push_str("---@alias ");
            text.push_str(name);
            text.push_str(" any\n");
        }
        Some(text)
    }

    /// Write the fallback alias file in one piece.
    ///
    /// Returns `false` without touching the file system when nothing is
    /// unexported.
    pub fn write_fallback_file(&self, path: &Path) -> io::Result<bool> {
        let Some(text) = self.render_fallback() else {
            return Ok(false);
        };
        fs::write(path, text)?;
        tracing::info!(
            aliases = self.unexported.len(),
            path = %path.display(),
            "wrote unexported type aliases"
        );
        Ok(true)
    }
}
