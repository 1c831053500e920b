#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::emitter::StringEmitter;
use pretty_assertions::assert_eq;

#[test]
fn chain_lists_every_prefix() {
    assert_eq!(namespace_chain("A.B.C"), Ok(vec!["A", "A.B", "A.B.C"]));
    assert_eq!(namespace_chain("UnityEngine"), Ok(vec!["UnityEngine"]));
    assert_eq!(namespace_chain(""), Ok(vec![]));
}

#[test]
fn chain_rejects_empty_segments() {
    for bad in ["A..B", ".A", "A."] {
        assert_eq!(
            namespace_chain(bad),
            Err(RenderError::InvalidNamespace {
                namespace: bad.to_owned()
            })
        );
    }
}

#[test]
fn ensure_emits_one_statement_per_level() {
    let mut out = StringEmitter::new();
    ensure_namespace(&mut out, "A.B").unwrap();
    assert_eq!(
        out.output(),
        "CS.A = CS.A or {}\nCS.A.B = CS.A.B or {}\n\n"
    );
}

#[test]
fn ensure_is_noop_for_global_namespace() {
    let mut out = StringEmitter::new();
    ensure_namespace(&mut out, "").unwrap();
    assert!(out.is_empty());
}

#[test]
fn ensure_repeats_for_siblings() {
    let mut out = StringEmitter::new();
    ensure_namespace(&mut out, "A").unwrap();
    ensure_namespace(&mut out, "A").unwrap();
    assert_eq!(out.output(), "CS.A = CS.A or {}\n\nCS.A = CS.A or {}\n\n");
}

#[test]
fn ensure_brackets_keyword_segments() {
    let mut out = StringEmitter::new();
    ensure_namespace(&mut out, "Game.end.Items").unwrap();
    assert_eq!(
        out.output(),
        "CS.Game = CS.Game or {}\n\
CS.Game[\"end\"] = CS.Game[\"end\"] or {}\n\
CS.Game[\"end\"].Items = CS.Game[\"end\"].Items or {}\n\n"
    );
}
