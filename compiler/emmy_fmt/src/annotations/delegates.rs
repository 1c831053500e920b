//! Delegate function-type aliases.

use emmy_model::Method;

use super::{check_parameter_names, RenderError};
use crate::emitter::Emitter;
use crate::names::{lua_identifier, TypeScope};

/// Write `---@alias <full_name> fun(<params>): <returns>`.
///
/// `Out` parameters move to the return list; `Ref` parameters stay in the
/// parameter list and are also returned. Nullable parameters are optional
/// (`name?: T`). A `void` return is dropped, and an empty return list
/// renders as `void`.
pub fn write_delegate_alias<E: Emitter>(
    out: &mut E,
    full_name: &str,
    invoke: &Method,
    scope: &TypeScope<'_>,
) -> Result<(), RenderError> {
    check_parameter_names(invoke)?;

    let params: Vec<String> = invoke
        .input_parameters()
        .map(|p| {
            let optional = if p.nullable { "?" } else { "" };
            format!(
                "{}{optional}: {}",
                lua_identifier(&p.name),
                scope.map(&p.type_name)
            )
        })
        .collect();

    let mut returns = Vec::new();
    let primary = scope.map(&invoke.return_type);
    if primary != "void" {
        returns.push(primary);
    }
    returns.extend(
        invoke
            .returned_parameters()
            .map(|p| scope.map(&p.type_name)),
    );

    let returns = if returns.is_empty() {
        "void".to_owned()
    } else {
        returns.join(", ")
    };

    out.emit_line(&format!(
        "---@alias {full_name} fun({}): {returns}",
        params.join(", ")
    ));
    Ok(())
}
