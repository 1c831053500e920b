//! Method annotations: parameters, returns, stubs and constructor overloads.

use emmy_model::{Method, Parameter};

use super::{check_parameter_names, RenderError};
use crate::emitter::Emitter;
use crate::names::{index_path, is_lua_keyword, lua_identifier, TypeScope};

/// Write a `---@param` line for every parameter except `Out` ones.
///
/// Returns the parameters that come back as extra return values (`Out` and
/// `Ref`), in declaration order, for [`write_return`].
pub fn write_parameters<'m, E: Emitter>(
    out: &mut E,
    method: &'m Method,
    scope: &TypeScope<'_>,
) -> Result<Vec<&'m Parameter>, RenderError> {
    check_parameter_names(method)?;

    for param in method.input_parameters() {
        out.emit("---@param ");
        out.emit(&lua_identifier(&param.name));
        out.emit(" ");
        out.emit(&scope.map(&param.type_name));
        if !param.comment.is_empty() {
            out.emit(" ");
            out.emit(&param.comment.lines().collect::<Vec<_>>().join("\n---"));
        }
        out.emit_newline();
    }

    Ok(method.returned_parameters().collect())
}

/// Write `---@return <T>[, <extra>...]`.
pub fn write_return<E: Emitter>(
    out: &mut E,
    return_type: &str,
    extra: &[&Parameter],
    scope: &TypeScope<'_>,
) {
    out.emit("---@return ");
    out.emit(&scope.map(return_type));
    for param in extra {
        out.emit(", ");
        out.emit(&scope.map(&param.type_name));
    }
    out.emit_newline();
}

/// Write an empty function stub.
///
/// Instance methods use the implicit receiver form `function Foo:Bar(a)`,
/// static methods the plain form `function Foo.Bar(a)`. A keyword name
/// cannot follow `:` or `.`, so it is assigned through brackets instead:
/// `Foo["end"] = function(self, a)`.
pub fn write_method_stub<E: Emitter>(
    out: &mut E,
    owner: &str,
    method: &Method,
) -> Result<(), RenderError> {
    if method.name.is_empty() {
        return Err(RenderError::EmptyMemberName {
            owner: owner.to_owned(),
        });
    }
    check_parameter_names(method)?;

    let mut params: Vec<_> = method
        .input_parameters()
        .map(|p| lua_identifier(&p.name))
        .collect();

    if is_lua_keyword(&method.name) {
        if !method.is_static {
            params.insert(0, "self".into());
        }
        out.emit_line(&format!(
            "{} = function({})",
            index_path(owner, &method.name),
            params.join(", ")
        ));
    } else {
        let separator = if method.is_static { "." } else { ":" };
        out.emit_line(&format!(
            "function {owner}{separator}{}({})",
            method.name,
            params.join(", ")
        ));
    }
    out.emit_line("end");
    out.emit_newline();
    Ok(())
}

/// Write `---@overload fun(a: A, ...): <full_name>` for one constructor.
pub fn write_constructor_overload<E: Emitter>(
    out: &mut E,
    ctor: &Method,
    full_name: &str,
    scope: &TypeScope<'_>,
) -> Result<(), RenderError> {
    check_parameter_names(ctor)?;

    let params: Vec<String> = ctor
        .input_parameters()
        .map(|p| format!("{}: {}", lua_identifier(&p.name), scope.map(&p.type_name)))
        .collect();
    out.emit_line(&format!(
        "---@overload fun({}): {full_name}",
        params.join(", ")
    ));
    Ok(())
}

/// Write the zero-argument overload used when a type declares no constructors.
pub fn write_default_constructor<E: Emitter>(out: &mut E, full_name: &str) {
    out.emit_line(&format!("---@overload fun(): {full_name}"));
}
