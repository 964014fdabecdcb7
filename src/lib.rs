//! # docgraph
//!
//! In-memory, cross-linked symbol graph built from scripting-language API
//! documentation dumps.
//!
//! A documentation dump is a single JSON document with a top-level `docs`
//! array, each element describing one documented element (namespace, class,
//! property, constant, method, enum type). The graph builder ingests the
//! whole array once, resolves forward references, merges members into their
//! declaring containers, computes transitive inheritance closure, and
//! publishes an immutable [`graph::DocModel`] that is safe for concurrent
//! read access.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! graph     → Multi-pass builder, inheritance resolver, query facade
//!   ↓
//! model     → Container/Member/Argument sum types, arena IDs
//!   ↓
//! record    → Serde projection of raw JSON doc records
//!   ↓
//! error     → DocError / DocResult
//! ```

/// Error types: DocError, DocResult
pub mod error;

/// Graph construction and queries: builder passes, inheritance, facade
pub mod graph;

/// Data model: Container, Member, Argument, arena IDs
pub mod model;

/// Raw doc records: serde projection of one JSON object
pub mod record;

// Re-export the externally consumed surface
pub use error::{DocError, DocResult};
pub use graph::{DocModel, DocModelCell, NO_HELP, SourceLocation};
pub use model::{
    Argument, Container, ContainerId, Member, MemberId, MemberLists, SourceMeta, SymbolRef,
};
pub use record::{DocDump, RawRecord};
