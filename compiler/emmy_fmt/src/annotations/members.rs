//! Fields, events and enum entries.

use emmy_model::{EnumField, Member};

use super::comments::write_comment_and_location;
use super::RenderError;
use crate::emitter::Emitter;
use crate::names::{index_path, table_key, TypeScope};

/// Write `---@type <T>` and a `nil` placeholder assignment for a field.
pub fn write_field<E: Emitter>(
    out: &mut E,
    owner: &str,
    field: &Member,
    scope: &TypeScope<'_>,
) -> Result<(), RenderError> {
    write_slot(out, owner, field, scope)
}

/// Write an event slot.
///
/// XLua exposes events as delegate-typed members combined with `+`/`-`, so
/// the annotation is the same as a field's.
pub fn write_event<E: Emitter>(
    out: &mut E,
    owner: &str,
    event: &Member,
    scope: &TypeScope<'_>,
) -> Result<(), RenderError> {
    write_slot(out, owner, event, scope)
}

fn write_slot<E: Emitter>(
    out: &mut E,
    owner: &str,
    member: &Member,
    scope: &TypeScope<'_>,
) -> Result<(), RenderError> {
    if member.name.is_empty() {
        return Err(RenderError::EmptyMemberName {
            owner: owner.to_owned(),
        });
    }

    out.emit("---@type ");
    out.emit_line(&scope.map(&member.type_name));
    out.emit_line(&format!("{} = nil", index_path(owner, &member.name)));
    out.emit_newline();
    Ok(())
}

/// Write one `Name = value,` entry of an enum table, indented one level.
pub fn write_enum_entry<E: Emitter>(
    out: &mut E,
    owner: &str,
    field: &EnumField,
) -> Result<(), RenderError> {
    if field.name.is_empty() {
        return Err(RenderError::EmptyMemberName {
            owner: owner.to_owned(),
        });
    }

    write_comment_and_location(out, &field.comment, &field.source_location, 1);
    let value = field.constant_value.unwrap_or_default();
    out.emit_indent(1);
    out.emit_line(&format!("{} = {value},", table_key(&field.name)));
    out.emit_newline();
    Ok(())
}
