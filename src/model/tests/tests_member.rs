#![allow(clippy::unwrap_used)]
use rustc_hash::FxHashMap;
use serde_json::json;

use crate::model::{ANY_ARG_NAME, Argument, Member, OBJECT_TYPE, SourceMeta};
use crate::record::{MetaRecord, ParamRecord};

fn param(value: serde_json::Value) -> ParamRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_argument_from_full_param() {
    let arg = Argument::from_param(&param(json!({
        "name": "width",
        "type": { "names": ["number"] },
        "optional": true,
        "defaultvalue": 800,
        "description": "canvas width"
    })));

    assert_eq!(arg.name, "width");
    assert_eq!(arg.types, vec!["number".to_string()]);
    assert!(arg.optional);
    assert_eq!(arg.default_value, Some(json!(800)));
    assert_eq!(arg.help, "canvas width");
}

#[test]
fn test_argument_sentinels_for_missing_fields() {
    let arg = Argument::from_param(&param(json!({})));

    assert_eq!(arg.name, ANY_ARG_NAME);
    assert_eq!(arg.types, vec![OBJECT_TYPE.to_string()]);
    assert!(!arg.optional);
    assert!(arg.default_value.is_none());
    assert_eq!(arg.help, "");
}

#[test]
fn test_source_meta_defaults() {
    let meta = SourceMeta::from_record(None);
    assert_eq!(meta.path, "");
    assert_eq!(meta.filename, "");
    assert_eq!(meta.line, 0);
    assert_eq!(meta.offset, -1);
}

#[test]
fn test_source_meta_normalizes_backslashes_and_reads_range() {
    let raw: MetaRecord = serde_json::from_value(json!({
        "path": "C:\\repo\\engine\\src\\gameobjects",
        "filename": "Sprite.js",
        "lineno": 42,
        "range": [1200, 1350]
    }))
    .unwrap();

    let meta = SourceMeta::from_record(Some(&raw));
    assert_eq!(meta.path, "C:/repo/engine/src/gameobjects");
    assert_eq!(meta.filename, "Sprite.js");
    assert_eq!(meta.line, 42);
    assert_eq!(meta.offset, 1200);
}

#[test]
fn test_source_meta_missing_range_means_line_only() {
    let raw: MetaRecord = serde_json::from_value(json!({
        "path": "/repo/src",
        "filename": "Engine.js",
        "lineno": 7
    }))
    .unwrap();

    let meta = SourceMeta::from_record(Some(&raw));
    assert_eq!(meta.offset, -1);
}

#[test]
fn test_method_arg_by_name_last_write_wins() {
    let args = vec![
        Argument {
            name: "value".to_string(),
            types: vec!["number".to_string()],
            optional: false,
            default_value: None,
            help: "first".to_string(),
        },
        Argument {
            name: "value".to_string(),
            types: vec!["string".to_string()],
            optional: false,
            default_value: None,
            help: "second".to_string(),
        },
    ];
    let mut args_by_name = FxHashMap::default();
    for (position, arg) in args.iter().enumerate() {
        args_by_name.insert(arg.name.clone(), position);
    }

    let method = Member::Method {
        name: "set".to_string(),
        help: String::new(),
        is_static: false,
        args,
        args_by_name,
        return_types: Vec::new(),
        return_help: String::new(),
        owner: None,
        meta: SourceMeta::default(),
    };

    let arg = method.arg_by_name("value").unwrap();
    assert_eq!(arg.help, "second");
    assert_eq!(method.args().len(), 2);
}

#[test]
fn test_member_kind_predicates() {
    let constant = Member::Constant {
        name: "MAX".to_string(),
        help: String::new(),
        types: vec!["number".to_string()],
        is_static: true,
        default_value: None,
        owner: None,
        meta: SourceMeta::default(),
    };
    assert!(constant.is_constant());
    assert!(!constant.is_property());
    assert!(!constant.is_method());
    assert!(constant.is_static());
    assert_eq!(constant.types(), ["number".to_string()]);
}
