#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::emitter::StringEmitter;
use crate::names::TypeScope;
use emmy_model::{EnumField, Member, Method, Parameter, PassingMode};
use pretty_assertions::assert_eq;

fn render(f: impl FnOnce(&mut StringEmitter)) -> String {
    let mut out = StringEmitter::new();
    f(&mut out);
    out.output()
}

// -- Comments --

#[test]
fn comment_lines_are_prefixed() {
    let text = render(|out| write_comment_and_location(out, "first\nsecond", "", 0));
    assert_eq!(text, "---first\n---second\n");
}

#[test]
fn comment_respects_indent() {
    let text = render(|out| write_comment_and_location(out, "a\nb", "", 1));
    assert_eq!(text, "    ---a\n    ---b\n");
}

#[test]
fn source_location_is_escaped() {
    let text = render(|out| {
        write_comment_and_location(out, "", "file:///src/\"Foo\".cs#L3", 0);
    });
    assert_eq!(text, "---@source \"file:///src/'Foo'.cs#L3\"\n");
}

#[test]
fn non_file_locations_are_dropped() {
    let text = render(|out| write_comment_and_location(out, "", "http://example.com", 0));
    assert!(text.is_empty());
}

// -- Headers --

#[test]
fn header_lists_base_then_interfaces() {
    let text = render(|out| {
        write_type_header(
            out,
            "class",
            "CS.A.Foo",
            &[],
            &["A.Base", "System.IDisposable", "CS.A.IThing"],
        );
    });
    assert_eq!(
        text,
        "---@class CS.A.Foo: CS.A.Base, System.IDisposable, CS.A.IThing\n"
    );
}

#[test]
fn header_with_generics_and_no_supertypes() {
    let generics = vec!["TKey".to_owned(), "TValue".to_owned()];
    let text = render(|out| write_type_header(out, "class", "CS.Map", &generics, &["", ""]));
    assert_eq!(text, "---@class CS.Map<TKey, TValue>\n");
}

#[test]
fn binding_targets_qualified_path() {
    let text = render(|out| {
        write_local_table(out, "Foo");
        write_binding(out, "A.B", "Foo", "Foo");
        write_binding(out, "", "Bar", "Bar");
    });
    assert_eq!(text, "local Foo = {}\nCS.A.B.Foo = Foo\nCS.Bar = Bar\n");
}

#[test]
fn binding_brackets_keyword_segments() {
    let text = render(|out| {
        write_binding(out, "Game.end", "Box", "Box");
        write_binding(out, "A", "end", "_end");
    });
    assert_eq!(text, "CS.Game[\"end\"].Box = Box\nCS.A[\"end\"] = _end\n");
}

// -- Members --

#[test]
fn field_renders_type_and_placeholder() {
    let text = render(|out| {
        write_field(out, "Foo", &Member::field("x", "A.B.Bar"), &TypeScope::EMPTY).unwrap();
    });
    assert_eq!(text, "---@type CS.A.B.Bar\nFoo.x = nil\n\n");
}

#[test]
fn event_renders_like_field() {
    let field = render(|out| {
        write_field(out, "Foo", &Member::field("Changed", "System.Action"), &TypeScope::EMPTY)
            .unwrap();
    });
    let event = render(|out| {
        write_event(out, "Foo", &Member::event("Changed", "System.Action"), &TypeScope::EMPTY)
            .unwrap();
    });
    assert_eq!(field, event);
}

#[test]
fn field_with_keyword_name_uses_bracket_slot() {
    let text = render(|out| {
        write_field(out, "Box", &Member::field("repeat", "int"), &TypeScope::EMPTY).unwrap();
    });
    assert_eq!(text, "---@type integer\nBox[\"repeat\"] = nil\n\n");
}

#[test]
fn empty_field_name_is_an_error() {
    let mut out = StringEmitter::new();
    let err = write_field(&mut out, "Foo", &Member::field("", "int"), &TypeScope::EMPTY);
    assert_eq!(
        err,
        Err(RenderError::EmptyMemberName {
            owner: "Foo".to_owned()
        })
    );
}

#[test]
fn enum_entries_default_to_zero() {
    let text = render(|out| {
        write_enum_entry(out, "Color", &EnumField::new("Red").with_value(5_i64)).unwrap();
        write_enum_entry(out, "Color", &EnumField::new("Blue")).unwrap();
    });
    assert_eq!(text, "    Red = 5,\n\n    Blue = 0,\n\n");
}

#[test]
fn enum_entries_keep_unsigned_values_and_bracket_keywords() {
    let text = render(|out| {
        write_enum_entry(out, "Flags", &EnumField::new("All").with_value(u64::MAX)).unwrap();
        write_enum_entry(out, "Flags", &EnumField::new("end").with_value(-1_i64)).unwrap();
    });
    assert_eq!(
        text,
        "    All = 18446744073709551615,\n\n    [\"end\"] = -1,\n\n"
    );
}

// -- Methods --

fn try_get() -> Method {
    Method::new("TryGet", "bool")
        .with_param(Parameter::new("key", "string").with_comment("lookup key"))
        .with_param(Parameter::new("value", "A.Item").with_mode(PassingMode::Out))
        .with_param(Parameter::new("hint", "int").with_mode(PassingMode::Ref))
}

#[test]
fn out_parameters_are_not_rendered_as_params() {
    let method = try_get();
    let mut out = StringEmitter::new();
    let extra = write_parameters(&mut out, &method, &TypeScope::EMPTY).unwrap();

    assert_eq!(
        out.output(),
        "---@param key string lookup key\n---@param hint integer\n"
    );
    let names: Vec<&str> = extra.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["value", "hint"]);
}

#[test]
fn return_lists_out_and_ref_after_primary() {
    let method = try_get();
    let extra: Vec<&Parameter> = method.returned_parameters().collect();
    let text = render(|out| write_return(out, &method.return_type, &extra, &TypeScope::EMPTY));
    assert_eq!(text, "---@return boolean, CS.A.Item, integer\n");
}

#[test]
fn method_stub_distinguishes_static() {
    let instance = render(|out| write_method_stub(out, "Foo", &try_get()).unwrap());
    let stat = render(|out| {
        write_method_stub(out, "Foo", &Method::new("Create", "Foo").with_static(true)).unwrap();
    });
    assert_eq!(instance, "function Foo:TryGet(key, hint)\nend\n\n");
    assert_eq!(stat, "function Foo.Create()\nend\n\n");
}

#[test]
fn method_stub_escapes_keyword_parameters() {
    let method = Method::new("Loop", "void").with_param(Parameter::new("end", "int"));
    let text = render(|out| write_method_stub(out, "Foo", &method).unwrap());
    assert_eq!(text, "function Foo:Loop(_end)\nend\n\n");
}

#[test]
fn keyword_method_is_assigned_through_brackets() {
    let instance = Method::new("end", "void").with_param(Parameter::new("until", "int"));
    let stat = Method::new("repeat", "void")
        .with_param(Parameter::new("count", "int"))
        .with_static(true);
    let text = render(|out| {
        write_method_stub(out, "Foo", &instance).unwrap();
        write_method_stub(out, "Foo", &stat).unwrap();
    });
    assert_eq!(
        text,
        "Foo[\"end\"] = function(self, _until)\nend\n\n\
Foo[\"repeat\"] = function(count)\nend\n\n"
    );
}

#[test]
fn parameter_comment_handles_crlf() {
    let method = Method::new("Run", "void")
        .with_param(Parameter::new("mode", "int").with_comment("first\r\nsecond\nthird"));
    let mut out = StringEmitter::new();
    write_parameters(&mut out, &method, &TypeScope::EMPTY).unwrap();
    assert_eq!(
        out.output(),
        "---@param mode integer first\n---second\n---third\n"
    );
}

#[test]
fn empty_parameter_name_is_an_error() {
    let method = Method::new("Broken", "void").with_param(Parameter::new("", "int"));
    let mut out = StringEmitter::new();
    assert_eq!(
        write_parameters(&mut out, &method, &TypeScope::EMPTY),
        Err(RenderError::EmptyParameterName {
            method: "Broken".to_owned()
        })
    );
}

#[test]
fn constructor_overloads() {
    let ctor = Method::constructor(vec![
        Parameter::new("name", "string"),
        Parameter::new("id", "int").with_mode(PassingMode::Out),
    ]);
    let text = render(|out| {
        write_constructor_overload(out, &ctor, "CS.A.Foo", &TypeScope::EMPTY).unwrap();
        write_default_constructor(out, "CS.A.Foo");
    });
    assert_eq!(
        text,
        "---@overload fun(name: string): CS.A.Foo\n---@overload fun(): CS.A.Foo\n"
    );
}

// -- Delegates --

#[test]
fn delegate_void_with_single_out_returns_out_type() {
    let invoke = Method::new("Invoke", "void")
        .with_param(Parameter::new("result", "int").with_mode(PassingMode::Out));
    let text = render(|out| {
        write_delegate_alias(out, "CS.A.Producer", &invoke, &TypeScope::EMPTY).unwrap();
    });
    assert_eq!(text, "---@alias CS.A.Producer fun(): integer\n");
}

#[test]
fn delegate_without_returns_is_void() {
    let invoke = Method::new("Invoke", "System.Void").with_param(Parameter::new("x", "float"));
    let text = render(|out| {
        write_delegate_alias(out, "CS.Callback", &invoke, &TypeScope::EMPTY).unwrap();
    });
    assert_eq!(text, "---@alias CS.Callback fun(x: number): void\n");
}

#[test]
fn delegate_marks_nullable_and_keeps_ref() {
    let invoke = Method::new("Invoke", "string")
        .with_param(Parameter::new("target", "A.Node").nullable())
        .with_param(Parameter::new("count", "int").with_mode(PassingMode::Ref))
        .with_param(Parameter::new("ok", "bool").with_mode(PassingMode::Out));
    let text = render(|out| {
        write_delegate_alias(out, "CS.A.Visit", &invoke, &TypeScope::EMPTY).unwrap();
    });
    assert_eq!(
        text,
        "---@alias CS.A.Visit fun(target?: CS.A.Node, count: integer): string, integer, boolean\n"
    );
}

#[test]
fn delegate_uses_generic_scope() {
    let generics = vec!["T".to_owned()];
    let invoke = Method::new("Invoke", "T").with_param(Parameter::new("arg", "T"));
    let text = render(|out| {
        write_delegate_alias(out, "CS.Func", &invoke, &TypeScope::new(&generics)).unwrap();
    });
    assert_eq!(text, "---@alias CS.Func fun(arg: T): T\n");
}
