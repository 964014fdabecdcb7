use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::record::{MetaRecord, ParamRecord};

use super::container::ContainerId;
use super::{ANY_ARG_NAME, OBJECT_TYPE};

/// Unique identifier for a member in the arena.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(pub u32);

impl MemberId {
    /// Create a new MemberId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Reference to anything addressable as a member: a plain member, or a
/// container playing the member role in its parent's map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolRef {
    Container(ContainerId),
    Member(MemberId),
}

/// Source-navigation metadata carried by every documented element.
///
/// `offset` is `-1` when the input provided no byte range, signaling
/// line-only navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMeta {
    pub path: String,
    pub filename: String,
    pub line: u32,
    pub offset: i64,
}

impl Default for SourceMeta {
    fn default() -> Self {
        Self {
            path: String::new(),
            filename: String::new(),
            line: 0,
            offset: -1,
        }
    }
}

impl SourceMeta {
    /// Build from the raw `meta` record. Backslashes are normalized to
    /// forward slashes so marker stripping works on any platform's dump.
    pub fn from_record(meta: Option<&MetaRecord>) -> Self {
        let Some(meta) = meta else {
            return Self::default();
        };
        Self {
            path: meta.path.as_deref().unwrap_or("").replace('\\', "/"),
            filename: meta.filename.clone().unwrap_or_default(),
            line: meta.lineno.unwrap_or(0),
            offset: meta
                .range
                .as_ref()
                .and_then(|r| r.first().copied())
                .unwrap_or(-1),
        }
    }
}

/// A parsed parameter description attached to a method or to a type's
/// constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub types: Vec<String>,
    pub optional: bool,
    pub default_value: Option<Value>,
    pub help: String,
}

impl Argument {
    /// Build from a raw parameter record, applying the `_any` / `Object`
    /// sentinels for missing names and types.
    pub fn from_param(param: &ParamRecord) -> Self {
        let types = match &param.type_info {
            Some(info) => info.names.clone(),
            None => vec![OBJECT_TYPE.to_string()],
        };
        Self {
            name: param
                .name
                .clone()
                .unwrap_or_else(|| ANY_ARG_NAME.to_string()),
            types,
            optional: param.optional.unwrap_or(false),
            default_value: param.defaultvalue.clone(),
            help: param.description.clone().unwrap_or_default(),
        }
    }
}

/// Parse a raw `params` array into arguments. Absent array yields an empty
/// list.
pub(crate) fn parse_args(params: Option<&[ParamRecord]>) -> Vec<Argument> {
    params
        .unwrap_or(&[])
        .iter()
        .map(Argument::from_param)
        .collect()
}

/// A named, typed unit of documentation owned by exactly one container.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Constant {
        name: String,
        help: String,
        types: Vec<String>,
        is_static: bool,
        default_value: Option<Value>,
        owner: Option<ContainerId>,
        meta: SourceMeta,
    },
    Property {
        name: String,
        help: String,
        types: Vec<String>,
        is_static: bool,
        default_value: Option<Value>,
        read_only: bool,
        owner: Option<ContainerId>,
        meta: SourceMeta,
    },
    Method {
        name: String,
        help: String,
        is_static: bool,
        /// Declared order, as listed in the source record.
        args: Vec<Argument>,
        /// Name-keyed view over `args`; duplicate names collapse to one
        /// entry, last write wins within a single method.
        args_by_name: FxHashMap<String, usize>,
        /// May hold a free-text fallback when the source lacks structured
        /// return type data. Empty when the record had no `returns`.
        return_types: Vec<String>,
        return_help: String,
        owner: Option<ContainerId>,
        meta: SourceMeta,
    },
}

impl Member {
    /// Returns the short name of this member
    pub fn name(&self) -> &str {
        match self {
            Member::Constant { name, .. }
            | Member::Property { name, .. }
            | Member::Method { name, .. } => name,
        }
    }

    /// Returns the help text of this member
    pub fn help(&self) -> &str {
        match self {
            Member::Constant { help, .. }
            | Member::Property { help, .. }
            | Member::Method { help, .. } => help,
        }
    }

    /// Declared type names; for methods this is the return type list.
    pub fn types(&self) -> &[String] {
        match self {
            Member::Constant { types, .. } | Member::Property { types, .. } => types,
            Member::Method { return_types, .. } => return_types,
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            Member::Constant { is_static, .. }
            | Member::Property { is_static, .. }
            | Member::Method { is_static, .. } => *is_static,
        }
    }

    /// Back-reference to the declaring container, when one was resolved.
    pub fn owner(&self) -> Option<ContainerId> {
        match self {
            Member::Constant { owner, .. }
            | Member::Property { owner, .. }
            | Member::Method { owner, .. } => *owner,
        }
    }

    pub fn meta(&self) -> &SourceMeta {
        match self {
            Member::Constant { meta, .. }
            | Member::Property { meta, .. }
            | Member::Method { meta, .. } => meta,
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        match self {
            Member::Constant { default_value, .. } | Member::Property { default_value, .. } => {
                default_value.as_ref()
            }
            Member::Method { .. } => None,
        }
    }

    /// Ordered argument list; empty for non-methods.
    pub fn args(&self) -> &[Argument] {
        match self {
            Member::Method { args, .. } => args,
            _ => &[],
        }
    }

    /// Look up a method argument by name (last write wins on duplicates).
    pub fn arg_by_name(&self, name: &str) -> Option<&Argument> {
        match self {
            Member::Method {
                args, args_by_name, ..
            } => args_by_name.get(name).and_then(|&i| args.get(i)),
            _ => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Member::Constant { .. })
    }

    pub fn is_property(&self) -> bool {
        matches!(self, Member::Property { .. })
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Member::Method { .. })
    }
}
