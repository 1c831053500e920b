//! Type headers, local tables and qualified-path bindings.

use crate::emitter::Emitter;
use crate::names::{index_path, qualify, root_path};

/// Write `---@<tag> <full_name>[<G...>][: S1, S2]`.
///
/// Every supertype goes through [`qualify`]; empty entries are skipped.
pub fn write_type_header<E: Emitter>(
    out: &mut E,
    tag: &str,
    full_name: &str,
    generics: &[String],
    supertypes: &[&str],
) {
    out.emit("---@");
    out.emit(tag);
    out.emit(" ");
    out.emit(full_name);

    if !generics.is_empty() {
        out.emit("<");
        out.emit(&generics.join(", "));
        out.emit(">");
    }

    let inherited: Vec<String> = supertypes
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(qualify)
        .collect();
    if !inherited.is_empty() {
        out.emit(": ");
        out.emit(&inherited.join(", "));
    }

    out.emit_newline();
}

/// Open a local table that members are assigned into: `local Foo = {}`.
pub fn write_local_table<E: Emitter>(out: &mut E, local: &str) {
    out.emit_line(&format!("local {local} = {{}}"));
}

/// Bind the local table to its qualified path: `CS.A.B.Foo = Foo`.
///
/// Keyword segments are indexed with brackets (`CS.A["end"] = _end`). The
/// namespace tables must already exist.
pub fn write_binding<E: Emitter>(out: &mut E, namespace: &str, name: &str, local: &str) {
    let path = index_path(&root_path(namespace), name);
    out.emit_line(&format!("{path} = {local}"));
}
