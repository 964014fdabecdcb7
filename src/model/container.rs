use indexmap::IndexMap;

use super::member::{Argument, MemberId, SourceMeta, SymbolRef};

/// Unique identifier for a container in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub u32);

impl ContainerId {
    /// Create a new ContainerId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-kind ordered member lists, materialized by the finalize pass once
/// the member map (including inherited entries) is complete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberLists {
    pub constants: Vec<MemberId>,
    pub properties: Vec<MemberId>,
    pub methods: Vec<MemberId>,
}

/// A named, documented grouping of members.
///
/// The member map is keyed by short member name. An entry for a given name
/// is only ever set once directly (first writer wins); inheritance
/// resolution may later extend the map but never overwrites a
/// directly-declared member.
#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    Namespace {
        longname: String,
        name: String,
        help: String,
        memberof: Option<String>,
        meta: SourceMeta,
        members: IndexMap<String, SymbolRef>,
        lists: MemberLists,
    },
    Type {
        longname: String,
        name: String,
        help: String,
        memberof: Option<String>,
        meta: SourceMeta,
        members: IndexMap<String, SymbolRef>,
        lists: MemberLists,
        /// Declared superclass longnames, in order. May reference unknown
        /// or external names, which inheritance resolution ignores.
        super_names: Vec<String>,
        constructor_args: Vec<Argument>,
        is_enum: bool,
        /// Element types applied to enum constants that omit their own.
        enum_element_types: Vec<String>,
    },
}

impl Container {
    /// Returns the globally unique longname of this container
    pub fn longname(&self) -> &str {
        match self {
            Container::Namespace { longname, .. } | Container::Type { longname, .. } => longname,
        }
    }

    /// Returns the short name of this container
    pub fn name(&self) -> &str {
        match self {
            Container::Namespace { name, .. } | Container::Type { name, .. } => name,
        }
    }

    pub fn help(&self) -> &str {
        match self {
            Container::Namespace { help, .. } | Container::Type { help, .. } => help,
        }
    }

    /// Declared parent-container longname from the raw record, if any.
    pub fn memberof(&self) -> Option<&str> {
        match self {
            Container::Namespace { memberof, .. } | Container::Type { memberof, .. } => {
                memberof.as_deref()
            }
        }
    }

    pub fn meta(&self) -> &SourceMeta {
        match self {
            Container::Namespace { meta, .. } | Container::Type { meta, .. } => meta,
        }
    }

    /// Member map keyed by short member name
    pub fn members(&self) -> &IndexMap<String, SymbolRef> {
        match self {
            Container::Namespace { members, .. } | Container::Type { members, .. } => members,
        }
    }

    pub(crate) fn members_mut(&mut self) -> &mut IndexMap<String, SymbolRef> {
        match self {
            Container::Namespace { members, .. } | Container::Type { members, .. } => members,
        }
    }

    /// Finalized per-kind member lists
    pub fn lists(&self) -> &MemberLists {
        match self {
            Container::Namespace { lists, .. } | Container::Type { lists, .. } => lists,
        }
    }

    pub(crate) fn set_lists(&mut self, new_lists: MemberLists) {
        match self {
            Container::Namespace { lists, .. } | Container::Type { lists, .. } => {
                *lists = new_lists
            }
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Container::Type { .. })
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Container::Type { is_enum: true, .. })
    }

    /// Declared superclass longnames; empty for namespaces.
    pub fn super_names(&self) -> &[String] {
        match self {
            Container::Type { super_names, .. } => super_names,
            Container::Namespace { .. } => &[],
        }
    }

    /// Constructor arguments; empty for namespaces.
    pub fn constructor_args(&self) -> &[Argument] {
        match self {
            Container::Type {
                constructor_args, ..
            } => constructor_args,
            Container::Namespace { .. } => &[],
        }
    }

    /// Element types used when an enum constant omits its own type.
    pub fn enum_element_types(&self) -> &[String] {
        match self {
            Container::Type {
                enum_element_types, ..
            } => enum_element_types,
            Container::Namespace { .. } => &[],
        }
    }
}
