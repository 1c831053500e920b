#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn qualified_name_joins_namespace() {
    assert_eq!(TypeInfo::new("A.B", "Foo").qualified_name(), "A.B.Foo");
    assert_eq!(TypeInfo::new("", "Foo").qualified_name(), "Foo");
}

#[test]
fn constructor_sentinel() {
    let ctor = Method::constructor(vec![Parameter::new("x", "int")]);
    assert!(ctor.is_constructor());
    assert!(!Method::new("Run", "void").is_constructor());
}

#[test]
fn input_and_returned_parameters_split_by_mode() {
    let method = Method::new("TryGet", "bool")
        .with_param(Parameter::new("key", "string"))
        .with_param(Parameter::new("value", "int").with_mode(PassingMode::Out))
        .with_param(Parameter::new("hint", "int").with_mode(PassingMode::Ref));

    let inputs: Vec<&str> = method.input_parameters().map(|p| p.name.as_str()).collect();
    let returned: Vec<&str> = method
        .returned_parameters()
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(inputs, vec!["key", "hint"]);
    assert_eq!(returned, vec!["value", "hint"]);
}

#[test]
fn load_model_reads_tagged_declarations() {
    let json = r#"[
        {
            "kind": "class",
            "name": "Foo",
            "namespace": "A.B",
            "baseType": "A.Base",
            "fields": [{ "name": "x", "typeName": "int" }],
            "methods": [
                {
                    "name": "Get",
                    "returnType": "string",
                    "parameters": [{ "name": "v", "typeName": "int", "mode": "out" }]
                }
            ]
        },
        { "kind": "enum", "name": "Color", "fields": [{ "name": "Red", "constantValue": 5 }, { "name": "Blue" }] },
        { "kind": "delegate", "name": "Callback", "invoke": { "name": "Invoke", "returnType": "void" } },
        { "kind": "interface", "name": "IThing", "interfaces": ["IOther"] }
    ]"#;

    let model = load_model(json).unwrap();
    assert_eq!(model.len(), 4);

    let TypeDeclaration::Class(class) = &model[0] else {
        panic!("expected class, got {:?}", model[0].kind());
    };
    assert_eq!(class.info.qualified_name(), "A.B.Foo");
    assert_eq!(class.base_type, "A.Base");
    assert_eq!(class.fields[0], Member::field("x", "int"));
    assert_eq!(class.methods[0].parameters[0].mode, PassingMode::Out);
    assert!(class.info.comment.is_empty());

    let TypeDeclaration::Enum(color) = &model[1] else {
        panic!("expected enum");
    };
    assert_eq!(color.fields[0].constant_value, Some(EnumValue::Signed(5)));
    assert_eq!(color.fields[1].constant_value, None);

    assert_eq!(model[2].kind(), DeclKind::Delegate);
    assert_eq!(model[3].kind(), DeclKind::Interface);
    assert_eq!(model[3].namespace(), "");
}

#[test]
fn load_model_rejects_unknown_kind() {
    assert!(load_model(r#"[{ "kind": "struct", "name": "S" }]"#).is_err());
}

#[test]
fn enum_constants_cover_the_full_integer_range() {
    let json = r#"[{
        "kind": "enum",
        "name": "Flags",
        "fields": [
            { "name": "All", "constantValue": 18446744073709551615 },
            { "name": "Low", "constantValue": -9223372036854775808 },
            { "name": "One", "constantValue": 1 }
        ]
    }]"#;

    let model = load_model(json).unwrap();
    let TypeDeclaration::Enum(flags) = &model[0] else {
        panic!("expected enum");
    };
    let values: Vec<String> = flags
        .fields
        .iter()
        .map(|f| f.constant_value.unwrap().to_string())
        .collect();
    assert_eq!(
        values,
        vec!["18446744073709551615", "-9223372036854775808", "1"]
    );
    assert_eq!(flags.fields[0].constant_value, Some(EnumValue::Unsigned(u64::MAX)));
    assert_eq!(flags.fields[2].constant_value, Some(EnumValue::Signed(1)));
}

#[test]
fn small_unsigned_values_are_stored_signed() {
    assert_eq!(EnumValue::from(7_u64), EnumValue::Signed(7));
    assert_eq!(EnumValue::from(u64::MAX), EnumValue::Unsigned(u64::MAX));
    assert_eq!(EnumValue::default().to_string(), "0");
}
