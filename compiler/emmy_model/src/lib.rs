//! Emmy Model - Exportable Type Declarations
//!
//! This crate contains the read-only type model handed to the exporter by a
//! symbol-table provider:
//! - [`TypeDeclaration`]: closed set of declaration kinds (class, interface, enum, delegate)
//! - [`Member`], [`Method`], [`Parameter`]: the members hanging off a declaration
//! - [`load_model`]: JSON front door for providers that run out of process
//!
//! # Design Philosophy
//!
//! - **Closed Kinds**: declaration kinds are an enum, so every consumer matches exhaustively
//! - **Absent Means Default**: missing comments, locations and constants deserialize to empty values

mod decl;
mod member;

pub use decl::{
    ClassType, DeclKind, DelegateType, EnumField, EnumType, EnumValue, InterfaceType,
    TypeDeclaration, TypeInfo,
};
pub use member::{Member, Method, Parameter, PassingMode, CONSTRUCTOR_NAME};

/// Parse a JSON type model.
///
/// The document is an array of declarations tagged by `"kind"`
/// (`class`, `interface`, `enum`, `delegate`) with camelCase fields.
pub fn load_model(json: &str) -> Result<Vec<TypeDeclaration>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests;
