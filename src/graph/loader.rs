//! Construction entry points and the build-once cell.
//!
//! The whole pipeline runs once per process lifetime: JSON input → builder
//! passes → inheritance resolution → finalized indexes. An absent input
//! file yields an empty (but valid) model, since absence of documentation
//! data is a valid operating mode for the rest of the system.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::DocResult;
use crate::record::{DocDump, RawRecord};

use super::builder;
use super::model::DocModel;

impl DocModel {
    /// Build the model from an already-deserialized record sequence.
    pub fn from_records(records: &[RawRecord]) -> Self {
        let started = Instant::now();
        let model = builder::build(records);
        debug!("documentation graph built in {:?}", started.elapsed());
        model
    }

    /// Build the model from the JSON text of a documentation dump.
    ///
    /// The document must carry a top-level `docs` array; anything else is a
    /// fatal construction error. Individual records that fail to
    /// deserialize are skipped with a warning.
    pub fn from_json_str(text: &str) -> DocResult<Self> {
        let dump: DocDump = serde_json::from_str(text)?;

        let records: Vec<RawRecord> = dump
            .docs
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(error) => {
                    warn!("skipping malformed doc record: {error}");
                    None
                }
            })
            .collect();

        Ok(Self::from_records(&records))
    }

    /// Build the model from a documentation dump on disk.
    ///
    /// A missing file is not an error: it yields an empty model. A file
    /// that exists but cannot be read or parsed aborts construction.
    pub fn from_file(path: &Path) -> DocResult<Self> {
        if !path.exists() {
            debug!("documentation dump not found at {}", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Externally-owned build-once handle for a shared [`DocModel`].
///
/// Concurrent first-callers coordinate on a single build; every later call
/// reuses the cached result. The caller controls the cell's lifetime, there
/// is no process-wide hidden state.
#[derive(Debug, Default)]
pub struct DocModelCell {
    cell: OnceCell<Arc<DocModel>>,
}

impl DocModelCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Get the cached model, building it from `path` on first call.
    ///
    /// A failed build leaves the cell empty, so a later call may retry.
    pub fn get_or_load(&self, path: &Path) -> DocResult<Arc<DocModel>> {
        self.cell
            .get_or_try_init(|| DocModel::from_file(path).map(Arc::new))
            .cloned()
    }

    /// Get the cached model, building it with `build` on first call.
    pub fn get_or_build<F>(&self, build: F) -> DocResult<Arc<DocModel>>
    where
        F: FnOnce() -> DocResult<DocModel>,
    {
        self.cell
            .get_or_try_init(|| build().map(Arc::new))
            .cloned()
    }

    /// The cached model, if one has been built.
    pub fn get(&self) -> Option<&Arc<DocModel>> {
        self.cell.get()
    }
}
