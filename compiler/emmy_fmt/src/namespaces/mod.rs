//! Namespace Materialization
//!
//! Before a type is bound to `CS.A.B.Foo`, every table on the path must
//! exist. Each level is created with `CS.A = CS.A or {}`, which is a no-op
//! when the table is already there, so emitting the chain again for a
//! sibling type or in a later chunk is harmless.

use crate::annotations::RenderError;
use crate::emitter::Emitter;
use crate::names::root_path;

/// Cumulative prefixes of a dotted namespace: `A.B.C` -> `A`, `A.B`, `A.B.C`.
///
/// Fails on empty segments (`A..B`, `.A`, `A.`).
pub fn namespace_chain(namespace: &str) -> Result<Vec<&str>, RenderError> {
    if namespace.is_empty() {
        return Ok(Vec::new());
    }

    let mut chain = Vec::new();
    let mut end = 0;
    for segment in namespace.split('.') {
        if segment.trim().is_empty() {
            return Err(RenderError::InvalidNamespace {
                namespace: namespace.to_owned(),
            });
        }
        if end > 0 {
            // the dot before this segment
            end += 1;
        }
        end += segment.len();
        chain.push(&namespace[..end]);
    }
    Ok(chain)
}

/// Emit the create-if-absent statements for every level of `namespace`.
///
/// No-op for the global namespace. Keyword segments are indexed with brackets
/// (`CS.Game["end"]`). A trailing blank line separates the block from the
/// binding that follows.
pub fn ensure_namespace<E: Emitter>(out: &mut E, namespace: &str) -> Result<(), RenderError> {
    let chain = namespace_chain(namespace)?;
    if chain.is_empty() {
        return Ok(());
    }

    for prefix in chain {
        let path = root_path(prefix);
        out.emit_line(&format!("{path} = {path} or {{}}"));
    }
    out.emit_newline();
    Ok(())
}

#[cfg(test)]
mod tests;
