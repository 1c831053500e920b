//! Comment and source-location blocks.

use crate::emitter::Emitter;

/// URI scheme that the language server can jump to.
const SOURCE_SCHEME: &str = "file://";

/// Write a doc comment followed by a `---@source` directive.
///
/// Every comment line gets its own `---` prefix at the given indent level.
/// The location is only written for `file://` URIs; double quotes inside it
/// become single quotes.
pub fn write_comment_and_location<E: Emitter>(
    out: &mut E,
    comment: &str,
    location: &str,
    indent: usize,
) {
    if !comment.trim().is_empty() {
        for line in comment.lines() {
            out.emit_indent(indent);
            out.emit("---");
            out.emit_line(line);
        }
    }

    if location.starts_with(SOURCE_SCHEME) {
        let escaped = location.replace('"', "'");
        out.emit_indent(indent);
        out.emit_line(&format!("---@source \"{escaped}\""));
    }
}
