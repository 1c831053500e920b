//! Type declarations.
//!
//! A declaration is one exportable type-level unit. The set of kinds is closed:
//! adding a kind means touching every `match` on [`TypeDeclaration`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::member::{Member, Method};

/// Attributes shared by every declaration kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeInfo {
    /// Simple identifier, never qualified.
    pub name: String,
    /// Dotted namespace path, empty for the global namespace.
    pub namespace: String,
    pub comment: String,
    /// URI-like location (`file:///...`), may be empty.
    pub source_location: String,
    pub generic_parameters: Vec<String>,
}

impl TypeInfo {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeInfo {
            name: name.into(),
            namespace: namespace.into(),
            ..TypeInfo::default()
        }
    }

    /// `A.B.Foo`, or `Foo` in the global namespace.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassType {
    #[serde(flatten)]
    pub info: TypeInfo,
    /// Base class name, empty when the class has none.
    pub base_type: String,
    pub interfaces: Vec<String>,
    pub is_static: bool,
    pub fields: Vec<Member>,
    pub methods: Vec<Method>,
}

impl ClassType {
    pub fn new(info: TypeInfo) -> Self {
        ClassType {
            info,
            ..ClassType::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterfaceType {
    #[serde(flatten)]
    pub info: TypeInfo,
    pub interfaces: Vec<String>,
    pub fields: Vec<Member>,
    pub methods: Vec<Method>,
}

impl InterfaceType {
    pub fn new(info: TypeInfo) -> Self {
        InterfaceType {
            info,
            ..InterfaceType::default()
        }
    }
}

/// Integral value of an enum constant.
///
/// Host enums may be backed by any integer type up to `ulong`, so the value
/// is kept signed when it fits in `i64` and unsigned above that.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Signed(i64),
    Unsigned(u64),
}

impl Default for EnumValue {
    fn default() -> Self {
        EnumValue::Signed(0)
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        EnumValue::Signed(value)
    }
}

impl From<u64> for EnumValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(signed) => EnumValue::Signed(signed),
            Err(_) => EnumValue::Unsigned(value),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Signed(value) => write!(f, "{value}"),
            EnumValue::Unsigned(value) => write!(f, "{value}"),
        }
    }
}

/// An enum constant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumField {
    pub name: String,
    pub comment: String,
    pub source_location: String,
    /// Rendered verbatim; `None` renders as `0`.
    pub constant_value: Option<EnumValue>,
}

impl EnumField {
    pub fn new(name: impl Into<String>) -> Self {
        EnumField {
            name: name.into(),
            ..EnumField::default()
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<EnumValue>) -> Self {
        self.constant_value = Some(value.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumType {
    #[serde(flatten)]
    pub info: TypeInfo,
    pub fields: Vec<EnumField>,
}

impl EnumType {
    pub fn new(info: TypeInfo, fields: Vec<EnumField>) -> Self {
        EnumType { info, fields }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DelegateType {
    #[serde(flatten)]
    pub info: TypeInfo,
    /// The `Invoke` signature: parameters and return type.
    pub invoke: Method,
}

impl DelegateType {
    pub fn new(info: TypeInfo, invoke: Method) -> Self {
        DelegateType { info, invoke }
    }
}

/// Declaration kind tag, used for logging and error reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
    Delegate,
}

impl DeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
            DeclKind::Delegate => "delegate",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exportable type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDeclaration {
    Class(ClassType),
    Interface(InterfaceType),
    Enum(EnumType),
    Delegate(DelegateType),
}

impl TypeDeclaration {
    pub fn info(&self) -> &TypeInfo {
        match self {
            TypeDeclaration::Class(c) => &c.info,
            TypeDeclaration::Interface(i) => &i.info,
            TypeDeclaration::Enum(e) => &e.info,
            TypeDeclaration::Delegate(d) => &d.info,
        }
    }

    pub fn info_mut(&mut self) -> &mut TypeInfo {
        match self {
            TypeDeclaration::Class(c) => &mut c.info,
            TypeDeclaration::Interface(i) => &mut i.info,
            TypeDeclaration::Enum(e) => &mut e.info,
            TypeDeclaration::Delegate(d) => &mut d.info,
        }
    }

    pub fn kind(&self) -> DeclKind {
        match self {
            TypeDeclaration::Class(_) => DeclKind::Class,
            TypeDeclaration::Interface(_) => DeclKind::Interface,
            TypeDeclaration::Enum(_) => DeclKind::Enum,
            TypeDeclaration::Delegate(_) => DeclKind::Delegate,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.info().name
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.info().namespace
    }

    pub fn qualified_name(&self) -> String {
        self.info().qualified_name()
    }
}

impl From<ClassType> for TypeDeclaration {
    fn from(class: ClassType) -> Self {
        TypeDeclaration::Class(class)
    }
}

impl From<InterfaceType> for TypeDeclaration {
    fn from(interface: InterfaceType) -> Self {
        TypeDeclaration::Interface(interface)
    }
}

impl From<EnumType> for TypeDeclaration {
    fn from(enum_type: EnumType) -> Self {
        TypeDeclaration::Enum(enum_type)
    }
}

impl From<DelegateType> for TypeDeclaration {
    fn from(delegate: DelegateType) -> Self {
        TypeDeclaration::Delegate(delegate)
    }
}
