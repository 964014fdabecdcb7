//! The finished documentation model and its query facade.
//!
//! Everything here is read-only: the model is fully constructed before it
//! is handed out, and lookup misses are routine (speculative hover queries,
//! unknown names), so they surface as sentinels or `None`, never as errors.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::model::{Container, ContainerId, Member, MemberId, SourceMeta, SymbolRef};

/// Sentinel returned by help lookups when the name is unknown.
pub const NO_HELP: &str = "<No help available>";

/// Root-directory marker segment stripped from stored metadata paths.
const SRC_MARKER: &str = "src";

/// Resolved source position of a documented element.
///
/// `offset` is `-1` when the input provided no byte range, signaling
/// line-only navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: u32,
    pub offset: i64,
}

/// The cross-linked symbol graph: containers by longname and members by
/// fully-qualified name. Built once, immutable afterwards.
#[derive(Debug, Default)]
pub struct DocModel {
    containers: Vec<Container>,
    members: Vec<Member>,
    container_index: FxHashMap<String, ContainerId>,
    member_index: FxHashMap<String, SymbolRef>,
    /// Optional source-tree root that [`DocModel::member_path`] resolves
    /// stripped paths against.
    src_folder: Option<PathBuf>,
}

impl DocModel {
    pub(crate) fn new(
        containers: Vec<Container>,
        members: Vec<Member>,
        container_index: FxHashMap<String, ContainerId>,
        member_index: FxHashMap<String, SymbolRef>,
    ) -> Self {
        Self {
            containers,
            members,
            container_index,
            member_index,
            src_folder: None,
        }
    }

    /// Attach the root of the documented source tree, enabling
    /// [`DocModel::member_path`].
    pub fn with_src_folder(mut self, src_folder: impl Into<PathBuf>) -> Self {
        self.src_folder = Some(src_folder.into());
        self
    }

    pub fn src_folder(&self) -> Option<&Path> {
        self.src_folder.as_deref()
    }

    // ============================================================
    // Container lookups
    // ============================================================

    /// Fetch a container by longname. Absence is a normal result.
    pub fn container(&self, longname: &str) -> Option<&Container> {
        let id = self.container_index.get(longname)?;
        self.containers.get(id.index())
    }

    /// Fetch a container by longname, only when it is a Type.
    pub fn get_type(&self, longname: &str) -> Option<&Container> {
        self.container(longname).filter(|c| c.is_type())
    }

    pub fn container_by_id(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.index())
    }

    /// Iterate over every container in the graph.
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    // ============================================================
    // Member lookups
    // ============================================================

    /// Resolve a fully-qualified name in the global member index. The index
    /// also holds namespaces and types, which are addressable as members of
    /// their parents.
    pub fn lookup(&self, fq_name: &str) -> Option<SymbolRef> {
        self.member_index.get(fq_name).copied()
    }

    pub fn member_by_id(&self, id: MemberId) -> Option<&Member> {
        self.members.get(id.index())
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Help text of any addressable symbol.
    pub fn symbol_help(&self, symbol: SymbolRef) -> Option<&str> {
        match symbol {
            SymbolRef::Container(id) => self.container_by_id(id).map(Container::help),
            SymbolRef::Member(id) => self.member_by_id(id).map(Member::help),
        }
    }

    /// Help text for a fully-qualified member name. Unknown names yield the
    /// [`NO_HELP`] sentinel; misses are expected during interactive use and
    /// must never propagate as errors.
    pub fn member_help(&self, fq_name: &str) -> &str {
        self.lookup(fq_name)
            .and_then(|symbol| self.symbol_help(symbol))
            .unwrap_or(NO_HELP)
    }

    /// Help text for one argument of a method, or of a type's constructor.
    /// Any miss (unknown name, wrong symbol kind, unknown argument) yields
    /// the [`NO_HELP`] sentinel.
    pub fn argument_help(&self, fq_name: &str, arg_name: &str) -> &str {
        let args = match self.lookup(fq_name) {
            Some(SymbolRef::Member(id)) => match self.member_by_id(id) {
                Some(member @ Member::Method { .. }) => member.args(),
                _ => &[],
            },
            Some(SymbolRef::Container(id)) => match self.container_by_id(id) {
                Some(container) if container.is_type() => container.constructor_args(),
                _ => &[],
            },
            None => &[],
        };

        args.iter()
            .find(|arg| arg.name == arg_name)
            .map(|arg| arg.help.as_str())
            .unwrap_or(NO_HELP)
    }

    // ============================================================
    // Source navigation
    // ============================================================

    /// Source location of any addressable symbol.
    pub fn source_location(&self, symbol: SymbolRef) -> Option<SourceLocation> {
        let meta = match symbol {
            SymbolRef::Container(id) => self.container_by_id(id)?.meta(),
            SymbolRef::Member(id) => self.member_by_id(id)?.meta(),
        };
        Some(resolve_source_location(meta))
    }

    /// Source location for a fully-qualified member name.
    pub fn member_source_location(&self, fq_name: &str) -> Option<SourceLocation> {
        self.source_location(self.lookup(fq_name)?)
    }

    /// Absolute path of a member's source file, resolved against the
    /// configured source folder.
    pub fn member_path(&self, location: &SourceLocation) -> Option<PathBuf> {
        Some(self.src_folder.as_ref()?.join(&location.file))
    }
}

/// Derive the navigable file path from stored metadata: strip everything up
/// through the `src` marker segment and re-join with the filename. When the
/// stripped path would be degenerate (the tree's own top-level entry file),
/// fall back to the bare filename.
fn resolve_source_location(meta: &SourceMeta) -> SourceLocation {
    let file = match meta.path.find(SRC_MARKER) {
        Some(index) => {
            let begin = index + SRC_MARKER.len() + 1;
            // begin may run off the end or land inside a multibyte
            // character when the marker is not followed by a separator
            if begin >= meta.path.len() || !meta.path.is_char_boundary(begin) {
                PathBuf::from(&meta.filename)
            } else {
                let dir = &meta.path[begin..];
                PathBuf::from(format!("{}/{}", dir, meta.filename))
            }
        }
        None => PathBuf::from(&meta.filename),
    };
    SourceLocation {
        file,
        line: meta.line,
        offset: meta.offset,
    }
}
