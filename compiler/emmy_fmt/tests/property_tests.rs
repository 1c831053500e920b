//! Property-based tests for type name mapping.
//!
//! These tests use proptest to generate host type names and verify:
//! 1. Idempotence: map(map(name)) == map(name)
//! 2. Stability: primitives map to the same value regardless of call order
//! 3. Qualification: custom names always end up under the root table

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use emmy_fmt::names::{is_lua_type, primitive_lua_type};
use emmy_fmt::{map_type_name, qualify};
use proptest::prelude::*;

const PRIMITIVES: [&str; 16] = [
    "int",
    "long",
    "short",
    "byte",
    "uint",
    "float",
    "double",
    "decimal",
    "bool",
    "string",
    "object",
    "void",
    "System.Int32",
    "System.Single",
    "System.Boolean",
    "System.String",
];

// -- Name Generation Strategies --

/// Generate a host type identifier (starts with uppercase).
fn type_identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,12}").expect("valid regex")
}

/// Generate a dotted, possibly empty, namespace.
fn namespace_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(type_identifier_strategy(), 0..3).prop_map(|parts| parts.join("."))
}

/// Generate a simple (non-generic) host type name.
fn simple_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(PRIMITIVES.to_vec()).prop_map(str::to_owned),
        (namespace_strategy(), type_identifier_strategy()).prop_map(|(ns, name)| {
            if ns.is_empty() {
                name
            } else {
                format!("{ns}.{name}")
            }
        }),
    ]
}

/// Generate host type names including arrays and generic instantiations.
fn type_name_strategy() -> impl Strategy<Value = String> {
    simple_type_strategy().prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|t| format!("{t}[]")),
            inner.clone().prop_map(|t| format!("List<{t}>")),
            inner
                .clone()
                .prop_map(|t| format!("System.Collections.Generic.List<{t}>")),
            (inner.clone(), inner.clone()).prop_map(|(k, v)| format!("Dictionary<{k}, {v}>")),
            (type_identifier_strategy(), inner.clone(), inner)
                .prop_map(|(outer, a, b)| format!("{outer}<{a}, {b}>")),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn mapping_is_idempotent(name in type_name_strategy()) {
        let once = map_type_name(&name);
        let twice = map_type_name(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn mapping_never_returns_empty(name in type_name_strategy()) {
        prop_assert!(!map_type_name(&name).is_empty());
    }

    #[test]
    fn primitives_are_stable(names in prop::collection::vec(prop::sample::select(PRIMITIVES.to_vec()), 1..8)) {
        for name in names {
            let expected = primitive_lua_type(name).unwrap();
            prop_assert_eq!(map_type_name(name), expected);
        }
    }

    #[test]
    fn custom_names_are_qualified(ns in namespace_strategy(), name in type_identifier_strategy()) {
        let full = if ns.is_empty() { name } else { format!("{ns}.{name}") };
        let mapped = map_type_name(&full);
        prop_assert!(mapped.starts_with("CS.") || mapped.starts_with("System.") || is_lua_type(&mapped));
        prop_assert_eq!(qualify(&mapped), mapped.clone());
    }
}
