#![allow(clippy::unwrap_used)]
use serde_json::json;

use super::rec;
use crate::graph::DocModel;
use crate::model::SymbolRef;
use crate::record::RawRecord;

fn class(longname: &str, augments: &[&str]) -> RawRecord {
    rec(json!({
        "kind": "class",
        "longname": longname,
        "name": longname.rsplit('.').next().unwrap(),
        "augments": augments
    }))
}

fn property(container: &str, name: &str, help: &str) -> RawRecord {
    rec(json!({
        "kind": "member",
        "longname": format!("{container}.{name}"),
        "name": name,
        "memberof": container,
        "description": help
    }))
}

#[test]
fn test_transitive_closure_through_chain() {
    let model = DocModel::from_records(&[
        class("T1", &["T2"]),
        class("T2", &["T3"]),
        class("T3", &[]),
        property("T3", "base", "from T3"),
        property("T2", "mid", "from T2"),
    ]);

    let t1 = model.get_type("T1").unwrap();
    assert!(t1.members().contains_key("base"));
    assert!(t1.members().contains_key("mid"));

    // inherited entries share the single member instance
    let in_t1 = *t1.members().get("base").unwrap();
    let in_t3 = *model.get_type("T3").unwrap().members().get("base").unwrap();
    assert_eq!(in_t1, in_t3);
}

#[test]
fn test_direct_declaration_never_overwritten() {
    let model = DocModel::from_records(&[
        class("Sub", &["Base"]),
        class("Base", &[]),
        property("Sub", "x", "sub help"),
        property("Base", "x", "base help"),
    ]);

    let sub = model.get_type("Sub").unwrap();
    let Some(&SymbolRef::Member(id)) = sub.members().get("x") else {
        panic!("member missing");
    };
    assert_eq!(model.member_by_id(id).unwrap().help(), "sub help");
    assert_eq!(model.member_help("Sub.x"), "sub help");
}

#[test]
fn test_earlier_superclass_wins_in_diamond() {
    let model = DocModel::from_records(&[
        class("D", &["B", "C"]),
        class("B", &["A"]),
        class("C", &["A"]),
        class("A", &[]),
        property("A", "root", "from A"),
        property("B", "pick", "from B"),
        property("C", "pick", "from C"),
    ]);

    let d = model.get_type("D").unwrap();
    assert!(d.members().contains_key("root"));

    let Some(&SymbolRef::Member(id)) = d.members().get("pick") else {
        panic!("member missing");
    };
    assert_eq!(model.member_by_id(id).unwrap().help(), "from B");
}

#[test]
fn test_cycle_terminates_with_union_of_direct_members() {
    let model = DocModel::from_records(&[
        class("T1", &["T2"]),
        class("T2", &["T1"]),
        property("T1", "one", "from T1"),
        property("T2", "two", "from T2"),
    ]);

    let t1 = model.get_type("T1").unwrap();
    let t2 = model.get_type("T2").unwrap();

    // both end up with the union; the guard just stops re-descent
    assert!(t1.members().contains_key("one"));
    assert!(t1.members().contains_key("two"));
    assert!(t2.members().contains_key("one"));
    assert!(t2.members().contains_key("two"));
}

#[test]
fn test_unresolved_supertype_is_ignored() {
    let model = DocModel::from_records(&[
        class("Sub", &["HostEnvironmentBase", "Base"]),
        class("Base", &[]),
        property("Base", "y", "from Base"),
    ]);

    let sub = model.get_type("Sub").unwrap();
    assert!(sub.members().contains_key("y"));
}

#[test]
fn test_namespace_supertype_is_skipped() {
    let model = DocModel::from_records(&[
        rec(json!({ "kind": "namespace", "longname": "NS", "name": "NS" })),
        class("Sub", &["NS"]),
        property("NS", "loose", "namespace member"),
    ]);

    // a namespace cannot contribute inherited members
    let sub = model.get_type("Sub").unwrap();
    assert!(!sub.members().contains_key("loose"));
}
