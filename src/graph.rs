//! # Graph Construction and Queries
//!
//! Turns a flat sequence of raw doc records into the cross-linked symbol
//! graph, then serves read-only lookups over it.
//!
//! Construction is single-threaded and runs to completion before any query
//! is served; the finished [`DocModel`] is immutable and safe for
//! concurrent reads. [`DocModelCell`] gives callers a build-once handle so
//! concurrent first-callers coordinate on a single build.

mod builder;
mod inheritance;
mod loader;
mod model;

pub use loader::DocModelCell;
pub use model::{DocModel, NO_HELP, SourceLocation};
