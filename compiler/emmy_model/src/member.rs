//! Members of a declaration: fields, events, methods and their parameters.

use serde::{Deserialize, Serialize};

/// Method name reserved for constructors.
pub const CONSTRUCTOR_NAME: &str = ".ctor";

/// A field or event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    pub name: String,
    pub type_name: String,
    pub comment: String,
    pub source_location: String,
    /// Events render like fields but are kept apart so listener operators can be added later.
    pub is_event: bool,
}

impl Member {
    /// Create a plain field.
    pub fn field(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Member {
            name: name.into(),
            type_name: type_name.into(),
            ..Member::default()
        }
    }

    /// Create an event.
    pub fn event(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Member {
            is_event: true,
            ..Member::field(name, type_name)
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// How an argument is passed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassingMode {
    #[default]
    Normal,
    Ref,
    Out,
}

/// A method or delegate parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
    pub mode: PassingMode,
    pub nullable: bool,
    pub comment: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            type_name: type_name.into(),
            ..Parameter::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: PassingMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// `Out` parameters never appear in a parameter list.
    #[inline]
    pub fn is_out(&self) -> bool {
        self.mode == PassingMode::Out
    }

    /// Whether the parameter contributes an extra return value (`Out` or `Ref`).
    #[inline]
    pub fn returns_value(&self) -> bool {
        matches!(self.mode, PassingMode::Out | PassingMode::Ref)
    }
}

/// A method, constructor, or delegate invoke signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Method {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: String,
    pub is_static: bool,
    pub comment: String,
    pub source_location: String,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Method {
            name: name.into(),
            return_type: return_type.into(),
            ..Method::default()
        }
    }

    /// Create a constructor (`.ctor`) with the given parameters.
    pub fn constructor(parameters: Vec<Parameter>) -> Self {
        Method {
            name: CONSTRUCTOR_NAME.to_owned(),
            parameters,
            return_type: "void".to_owned(),
            ..Method::default()
        }
    }

    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    #[inline]
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }

    /// Parameters passed by the caller (everything except `Out`).
    pub fn input_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| !p.is_out())
    }

    /// Parameters that come back as extra return values, in declaration order.
    pub fn returned_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.returns_value())
    }
}
