//! Raw doc records.
//!
//! A [`RawRecord`] is a read-only projection of one JSON object from the
//! documentation dump. Every field is optional at the serde level: shape
//! mismatches are tolerated field-by-field rather than validated up front.
//! Accessor methods apply the defaulting rules the rest of the pipeline
//! relies on (empty string for missing text, etc.).

use serde::Deserialize;
use serde_json::Value;

/// Marker substring identifying inner/private longnames, which are excluded
/// from the graph (e.g. `Engine.Game~privateThing`).
pub const INNER_MARKER: char = '~';

/// Top-level shape of a documentation dump: `{ "docs": [ ... ] }`.
///
/// Elements are kept as raw values so one malformed record can be skipped
/// without aborting the whole build.
#[derive(Debug, Deserialize)]
pub struct DocDump {
    pub docs: Vec<Value>,
}

/// Declared type annotation: `{ "names": ["number", "string"] }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TypeInfo {
    #[serde(default)]
    pub names: Vec<String>,
}

/// One parameter record attached to a function or class constructor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParamRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    pub defaultvalue: Option<Value>,
    pub optional: Option<bool>,
    #[serde(rename = "type")]
    pub type_info: Option<TypeInfo>,
}

/// One `returns` entry of a function record. Only the first entry is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReturnRecord {
    #[serde(rename = "type")]
    pub type_info: Option<TypeInfo>,
    pub description: Option<String>,
}

/// Source metadata carried by a record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetaRecord {
    pub path: Option<String>,
    pub filename: Option<String>,
    pub lineno: Option<u32>,
    /// Byte range `[start, end]`; absent when the generator had no offsets.
    pub range: Option<Vec<i64>>,
}

/// Read-only projection of one JSON object describing a documented element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub kind: Option<String>,
    pub longname: Option<String>,
    pub name: Option<String>,
    pub memberof: Option<String>,
    pub scope: Option<String>,
    pub access: Option<String>,
    pub description: Option<String>,
    pub classdesc: Option<String>,
    #[serde(rename = "type")]
    pub type_info: Option<TypeInfo>,
    pub defaultvalue: Option<Value>,
    pub readonly: Option<bool>,
    #[serde(rename = "isEnum")]
    pub is_enum: Option<bool>,
    pub augments: Option<Vec<String>>,
    pub params: Option<Vec<ParamRecord>>,
    pub returns: Option<Vec<ReturnRecord>>,
    pub meta: Option<MetaRecord>,
}

impl RawRecord {
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    pub fn longname(&self) -> &str {
        self.longname.as_deref().unwrap_or("")
    }

    /// Short name of the element. Falls back to the last dotted segment of
    /// the longname when the record carries no `name` field.
    pub fn name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => short_name(self.longname()),
        }
    }

    /// Declared parent-container reference. `None` when absent or empty.
    pub fn memberof(&self) -> Option<&str> {
        self.memberof.as_deref().filter(|m| !m.is_empty())
    }

    pub fn help(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Class help text: `description` falling back to `classdesc`.
    pub fn class_help(&self) -> &str {
        self.description
            .as_deref()
            .or(self.classdesc.as_deref())
            .unwrap_or("")
    }

    /// Explicitly declared type names, when the record has a `type` field.
    pub fn type_names(&self) -> Option<&[String]> {
        self.type_info.as_ref().map(|t| t.names.as_slice())
    }

    pub fn is_static_scope(&self) -> bool {
        self.scope.as_deref() == Some("static")
    }

    /// True when visibility is explicitly private.
    pub fn is_private(&self) -> bool {
        self.access.as_deref() == Some("private")
    }

    /// True when the longname carries the inner/private marker.
    pub fn is_inner(&self) -> bool {
        self.longname().contains(INNER_MARKER)
    }

    pub fn is_enum(&self) -> bool {
        self.is_enum.unwrap_or(false)
    }
}

/// Last dotted segment of a longname (`"Engine.Game"` → `"Game"`).
pub fn short_name(longname: &str) -> &str {
    longname.rsplit('.').next().unwrap_or(longname)
}
