#![allow(clippy::unwrap_used)]
use std::path::PathBuf;

use serde_json::json;

use super::rec;
use crate::graph::{DocModel, NO_HELP};

fn sample_model() -> DocModel {
    DocModel::from_records(&[
        rec(json!({
            "kind": "namespace",
            "longname": "Engine",
            "name": "Engine",
            "description": "root namespace",
            "meta": {
                "path": "/repo/engine/src",
                "filename": "Engine.js",
                "lineno": 1
            }
        })),
        rec(json!({
            "kind": "class",
            "longname": "Engine.Sprite",
            "name": "Sprite",
            "memberof": "Engine",
            "description": "a sprite",
            "params": [
                { "name": "x", "type": { "names": ["number"] }, "description": "x position" }
            ],
            "meta": {
                "path": "/repo/engine/src/gameobjects",
                "filename": "Sprite.js",
                "lineno": 20,
                "range": [512, 1024]
            }
        })),
        rec(json!({
            "kind": "function",
            "longname": "Engine.Sprite.move",
            "name": "move",
            "memberof": "Engine.Sprite",
            "description": "move the sprite",
            "params": [
                { "name": "dx", "type": { "names": ["number"] }, "description": "delta x" }
            ],
            "meta": {
                "path": "/repo/engine/src/gameobjects",
                "filename": "Sprite.js",
                "lineno": 88
            }
        })),
    ])
}

#[test]
fn test_member_help_miss_returns_sentinel() {
    let model = sample_model();
    assert_eq!(model.member_help("Engine.NoSuchThing"), NO_HELP);
    assert_eq!(model.member_help(""), NO_HELP);
}

#[test]
fn test_member_help_hits_members_and_containers() {
    let model = sample_model();
    assert_eq!(model.member_help("Engine"), "root namespace");
    assert_eq!(model.member_help("Engine.Sprite"), "a sprite");
    assert_eq!(model.member_help("Engine.Sprite.move"), "move the sprite");
}

#[test]
fn test_argument_help_for_method() {
    let model = sample_model();
    assert_eq!(model.argument_help("Engine.Sprite.move", "dx"), "delta x");
    assert_eq!(model.argument_help("Engine.Sprite.move", "dy"), NO_HELP);
}

#[test]
fn test_argument_help_for_constructor() {
    let model = sample_model();
    assert_eq!(model.argument_help("Engine.Sprite", "x"), "x position");
}

#[test]
fn test_argument_help_misses_return_sentinel() {
    let model = sample_model();
    // namespaces have no arguments at all
    assert_eq!(model.argument_help("Engine", "x"), NO_HELP);
    assert_eq!(model.argument_help("Nope", "x"), NO_HELP);
}

#[test]
fn test_get_type_rejects_namespaces() {
    let model = sample_model();
    assert!(model.get_type("Engine").is_none());
    assert!(model.get_type("Engine.Sprite").is_some());
    assert!(model.container("Engine").is_some());
    assert!(model.container("Nope").is_none());
}

#[test]
fn test_member_source_location() {
    let model = sample_model();

    let location = model.member_source_location("Engine.Sprite").unwrap();
    assert_eq!(location.file, PathBuf::from("gameobjects/Sprite.js"));
    assert_eq!(location.line, 20);
    assert_eq!(location.offset, 512);

    // no range in the input means line-only navigation
    let location = model.member_source_location("Engine.Sprite.move").unwrap();
    assert_eq!(location.offset, -1);
    assert_eq!(location.line, 88);

    // top-level entry file degenerates to the bare filename
    let location = model.member_source_location("Engine").unwrap();
    assert_eq!(location.file, PathBuf::from("Engine.js"));

    assert!(model.member_source_location("Nope").is_none());
}

#[test]
fn test_member_path_resolves_against_src_folder() {
    let model = sample_model().with_src_folder("/checkout/engine/src");
    let location = model.member_source_location("Engine.Sprite").unwrap();
    assert_eq!(
        model.member_path(&location).unwrap(),
        PathBuf::from("/checkout/engine/src/gameobjects/Sprite.js")
    );
}

#[test]
fn test_member_path_without_src_folder() {
    let model = sample_model();
    let location = model.member_source_location("Engine.Sprite").unwrap();
    assert!(model.member_path(&location).is_none());
}
