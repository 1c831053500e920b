//! Type Name Mapping
//!
//! Maps host type names (`System.Int32`, `List<Foo>`, `A.B.Bar`) to the names
//! used in EmmyLua annotations (`integer`, `CS.Foo[]`, `CS.A.B.Bar`).
//!
//! Mapping is a pure function of the name and, optionally, the generic
//! parameters in scope. It is idempotent on its own output.

use std::borrow::Cow;

/// Root table under which every exported host type lives.
pub const ROOT_TABLE: &str = "CS";

/// Prefix prepended to custom type names.
const ROOT_PREFIX: &str = "CS.";

/// Prefixes that mark a name as already qualified.
const QUALIFIED_PREFIXES: [&str; 2] = [ROOT_PREFIX, "System."];

/// Look up the Lua annotation type for a host primitive.
pub fn primitive_lua_type(type_name: &str) -> Option<&'static str> {
    let lua = match type_name {
        "System.Int32" | "System.Int64" | "System.Int16" | "System.Byte" | "System.SByte"
        | "System.UInt32" | "System.UInt64" | "System.UInt16" | "System.Char" | "int"
        | "long" | "short" | "byte" | "sbyte" | "uint" | "ulong" | "ushort" | "char" => {
            "integer"
        }
        "System.Single" | "System.Double" | "System.Decimal" | "float" | "double" | "decimal" => {
            "number"
        }
        "System.Boolean" | "bool" => "boolean",
        "System.String" | "string" => "string",
        "System.Object" | "object" => "any",
        "System.Void" | "void" => "void",
        _ => return None,
    };
    Some(lua)
}

/// Whether `name` is a Lua annotation type token, optionally an array of one.
pub fn is_lua_type(name: &str) -> bool {
    matches!(
        strip_array_suffix(name),
        "boolean" | "integer" | "number" | "string" | "any" | "void" | "table" | "nil"
    )
}

/// Whether `name` already carries a qualification prefix.
pub fn is_qualified(name: &str) -> bool {
    QUALIFIED_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Prefix a custom type name with the root table.
///
/// Lua type tokens and already qualified names are returned unchanged.
pub fn qualify(name: &str) -> String {
    if is_lua_type(name) || is_qualified(name) {
        name.to_owned()
    } else {
        format!("{ROOT_PREFIX}{name}")
    }
}

/// Fully qualified annotation name of a declaration: `CS.A.B.Foo` or `CS.Foo`.
pub fn declaration_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        format!("{ROOT_PREFIX}{name}")
    } else {
        format!("{ROOT_PREFIX}{namespace}.{name}")
    }
}

/// Remove every trailing array bracket: `Foo[][]` -> `Foo`.
pub fn strip_array_suffix(name: &str) -> &str {
    name.trim_end_matches(['[', ']'])
}

/// Split `Outer<Args>` into the outer name and the raw argument text.
///
/// Returns `None` when the name has no argument list. A missing closing
/// bracket takes the rest of the string as arguments.
pub fn generic_parts(name: &str) -> Option<(&str, &str)> {
    let open = name.find('<')?;
    let args = match name.rfind('>') {
        Some(close) if close > open => &name[open + 1..close],
        _ => &name[open + 1..],
    };
    Some((&name[..open], args))
}

/// Split a generic argument list on top-level commas.
///
/// Commas nested inside angle brackets do not split:
/// `"int, Dictionary<string, Foo>"` yields two arguments.
pub fn split_generic_args(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in args.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                push_arg(&mut parts, &args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_arg(&mut parts, &args[start..]);

    parts
}

fn push_arg<'a>(parts: &mut Vec<&'a str>, arg: &'a str) {
    let arg = arg.trim();
    if !arg.is_empty() {
        parts.push(arg);
    }
}

/// Generic containers that the mapper collapses into Lua shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Container {
    /// Single-argument sequence, rendered as `T[]`.
    List,
    /// Key/value container, rendered as `table`.
    Map,
}

/// Classify the outer name of a generic instantiation.
pub fn container_kind(outer: &str) -> Option<Container> {
    let short = outer
        .strip_prefix("System.Collections.Generic.")
        .unwrap_or(outer);
    match short {
        "List" | "IList" => Some(Container::List),
        "Dictionary" | "IDictionary" => Some(Container::Map),
        _ => None,
    }
}

/// Generic parameters visible while rendering one declaration.
///
/// Inside `Foo<T>`, a member of type `T` maps to `T`, not `CS.T`.
#[derive(Copy, Clone, Debug, Default)]
pub struct TypeScope<'a> {
    generic_params: &'a [String],
}

impl TypeScope<'static> {
    /// Scope with no generic parameters.
    pub const EMPTY: Self = TypeScope { generic_params: &[] };
}

impl<'a> TypeScope<'a> {
    pub fn new(generic_params: &'a [String]) -> Self {
        TypeScope { generic_params }
    }

    /// Whether `name` is one of the generic parameters in scope.
    pub fn contains(&self, name: &str) -> bool {
        self.generic_params.iter().any(|p| p == name)
    }

    /// Map a host type name to its annotation name.
    pub fn map(&self, type_name: &str) -> String {
        let name = type_name.trim();
        if name.is_empty() {
            return "any".to_owned();
        }
        if let Some(lua) = primitive_lua_type(name) {
            return lua.to_owned();
        }
        if let Some(element) = name.strip_suffix("[]") {
            return format!("{}[]", self.map(element));
        }
        if let Some((outer, args)) = generic_parts(name) {
            return self.map_generic(name, outer, args);
        }
        if self.contains(name) {
            return name.to_owned();
        }
        qualify(name)
    }

    fn map_generic(&self, name: &str, outer: &str, args: &str) -> String {
        let args = split_generic_args(args);
        match container_kind(outer) {
            Some(Container::List) if args.len() == 1 => format!("{}[]", self.map(args[0])),
            Some(Container::Map) => "table".to_owned(),
            // Arguments stay verbatim; only the outer name is qualified.
            _ => qualify(name),
        }
    }
}

/// Map a host type name with no generic parameters in scope.
pub fn map_type_name(type_name: &str) -> String {
    TypeScope::EMPTY.map(type_name)
}

/// Whether `name` is a reserved Lua keyword.
pub fn is_lua_keyword(name: &str) -> bool {
    matches!(
        name,
        "and"
            | "break"
            | "do"
            | "else"
            | "elseif"
            | "end"
            | "false"
            | "for"
            | "function"
            | "goto"
            | "if"
            | "in"
            | "local"
            | "nil"
            | "not"
            | "or"
            | "repeat"
            | "return"
            | "then"
            | "true"
            | "until"
            | "while"
    )
}

/// Make a local or parameter name usable as Lua code by escaping keywords
/// with `_`.
pub fn lua_identifier(name: &str) -> Cow<'_, str> {
    if is_lua_keyword(name) {
        Cow::Owned(format!("_{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Index `table` with `key`: `table.key`, or `table["key"]` when the key is
/// a Lua keyword and cannot follow a dot.
pub fn index_path(table: &str, key: &str) -> String {
    if is_lua_keyword(key) {
        format!("{table}[\"{key}\"]")
    } else {
        format!("{table}.{key}")
    }
}

/// Key of a table constructor entry: `key`, or `["key"]` for keywords.
pub fn table_key(key: &str) -> Cow<'_, str> {
    if is_lua_keyword(key) {
        Cow::Owned(format!("[\"{key}\"]"))
    } else {
        Cow::Borrowed(key)
    }
}

/// Lua path of a dotted namespace under the root table: `A.end` ->
/// `CS.A["end"]`. The global namespace is the root table itself.
pub fn root_path(namespace: &str) -> String {
    if namespace.is_empty() {
        return ROOT_TABLE.to_owned();
    }
    namespace
        .split('.')
        .fold(ROOT_TABLE.to_owned(), |path, segment| index_path(&path, segment))
}
