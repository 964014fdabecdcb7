//! Inheritance resolver.
//!
//! Copies ancestor members into descendant types, respecting shadowing:
//! direct declarations and earlier superclasses always win over later
//! superclasses (first-applicable-ancestor-wins, mirroring the resolution
//! order of the scripting languages these dumps describe).
//!
//! Traversal is depth-first with a global visited set keyed by container
//! identity, so every type is processed at most once regardless of how many
//! subclasses reference it. A cycle in the super-type graph simply means
//! traversal does not re-descend into an already-visited node.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::model::{Container, ContainerId, SymbolRef};

/// Resolve inheritance for every Type container, mutating member maps in
/// place. Superclass names that do not resolve to any known container are
/// silently ignored (external base types with no documentation entry).
pub(crate) fn resolve(
    containers: &mut [Container],
    container_index: &FxHashMap<String, ContainerId>,
) {
    let mut visited = FxHashSet::default();

    for index in 0..containers.len() {
        if containers[index].is_type() {
            resolve_type(containers, container_index, &mut visited, ContainerId::new(index));
        }
    }
}

fn resolve_type(
    containers: &mut [Container],
    container_index: &FxHashMap<String, ContainerId>,
    visited: &mut FxHashSet<ContainerId>,
    id: ContainerId,
) {
    if !visited.insert(id) {
        return;
    }

    // Declared order matters: earlier superclasses shadow later ones.
    let super_names = containers[id.index()].super_names().to_vec();

    for super_name in super_names {
        let Some(&super_id) = container_index.get(&super_name) else {
            trace!(
                "ignoring unresolved supertype '{}' of '{}'",
                super_name,
                containers[id.index()].longname()
            );
            continue;
        };
        if !containers[super_id.index()].is_type() {
            continue;
        }

        // The superclass must be fully resolved before its members are
        // copied down, so the subclass sees the whole transitive closure.
        resolve_type(containers, container_index, visited, super_id);

        let inherited: Vec<(String, SymbolRef)> = containers[super_id.index()]
            .members()
            .iter()
            .map(|(name, symbol)| (name.clone(), *symbol))
            .collect();

        let sub_members = containers[id.index()].members_mut();
        for (name, symbol) in inherited {
            sub_members.entry(name).or_insert(symbol);
        }
    }
}
