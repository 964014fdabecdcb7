//! # Data Model
//!
//! Sum types for the finished symbol graph: containers (namespaces and
//! types) and the members they own (constants, properties, methods).
//!
//! Storage is arena-based: containers and members live in flat vectors
//! owned by the graph, and everything else holds compact [`ContainerId`] /
//! [`MemberId`] handles. A [`SymbolRef`] addresses either, because a
//! namespace or type is itself addressable as a member of its parent.

mod container;
mod member;

pub use container::{Container, ContainerId, MemberLists};
pub use member::{Argument, Member, MemberId, SourceMeta, SymbolRef};

pub(crate) use member::parse_args;

/// Sentinel type name used when the input omits type information.
pub const OBJECT_TYPE: &str = "Object";

/// Sentinel argument name used when a parameter record omits its name.
pub const ANY_ARG_NAME: &str = "_any";

#[cfg(test)]
mod tests;
