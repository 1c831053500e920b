//! Annotation Rendering
//!
//! Stateless functions that append EmmyLua annotation fragments for one
//! declaration to an [`Emitter`](crate::Emitter).
//!
//! # Design
//!
//! Each function renders one fragment and knows nothing about chunking or
//! reference tracking; the exporter decides the order of fragments and what to
//! track. Functions that need a non-empty identifier return [`RenderError`]
//! when the model breaks that invariant. Text emitted before the error stays
//! in the output.
//!
//! # Modules
//!
//! - [`comments`]: comment and `---@source` blocks
//! - [`headers`]: `---@class`/`---@enum`/`---@interface` headers, local tables, bindings
//! - [`members`]: fields, events, enum entries
//! - [`methods`]: parameters, returns, stubs, constructor overloads
//! - [`delegates`]: function-type aliases

mod comments;
mod delegates;
mod headers;
mod members;
mod methods;

pub use comments::write_comment_and_location;
pub use delegates::write_delegate_alias;
pub use headers::{write_binding, write_local_table, write_type_header};
pub use members::{write_enum_entry, write_event, write_field};
pub use methods::{
    write_constructor_overload, write_default_constructor, write_method_stub, write_parameters,
    write_return,
};

use emmy_model::{DeclKind, Method};

/// An error that abandons the rendering of one declaration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("{kind} declaration has an empty name")]
    EmptyName { kind: DeclKind },

    #[error("member of `{owner}` has an empty name")]
    EmptyMemberName { owner: String },

    #[error("parameter of `{method}` has an empty name")]
    EmptyParameterName { method: String },

    #[error("invalid namespace `{namespace}`")]
    InvalidNamespace { namespace: String },
}

/// Reject a method whose parameters break the non-empty name invariant.
fn check_parameter_names(method: &Method) -> Result<(), RenderError> {
    if method.parameters.iter().any(|p| p.name.is_empty()) {
        return Err(RenderError::EmptyParameterName {
            method: method.name.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
