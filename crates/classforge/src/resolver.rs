//! Inheritance resolution
//!
//! Derives a single-parent mapping from the generalization relationships
//! of a model. Every emitter resolves through this module, so the targets
//! always agree on which class extends which.

use std::collections::BTreeMap;

use tracing::{debug, span, trace, warn, Level};

use crate::model::ClassModel;

/// A generalization that lost to an earlier one for the same child
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentConflict {
    pub child: String,
    pub kept: String,
    pub rejected: String,
}

/// Child class name to parent class name
///
/// The child is the `from` end of a generalization and the parent is the
/// `to` end. When a child has several generalizations the first one in
/// relationship order wins and the rest are recorded as conflicts.
/// Cycles are accepted as written; emitters only follow one hop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InheritanceMap {
    parents: BTreeMap<String, String>,
    conflicts: Vec<ParentConflict>,
}

impl InheritanceMap {
    pub fn resolve(model: &ClassModel) -> Self {
        let resolve_span = span!(
            Level::DEBUG,
            "resolve_inheritance",
            relationships = model.relationship_count()
        );
        let _enter = resolve_span.enter();

        let mut map = Self::default();

        for rel in model.relationships() {
            if !rel.kind.is_generalization() {
                continue;
            }
            let Some((child, parent)) = model.endpoints(rel) else {
                trace!(from = rel.from, to = rel.to, "Skipping dangling generalization");
                continue;
            };

            match map.parents.get(&child.name) {
                Some(kept) if kept != &parent.name => {
                    warn!(
                        child = %child.name,
                        kept = %kept,
                        rejected = %parent.name,
                        "Class has more than one parent; keeping the first"
                    );
                    map.conflicts.push(ParentConflict {
                        child: child.name.clone(),
                        kept: kept.clone(),
                        rejected: parent.name.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    trace!(child = %child.name, parent = %parent.name, "Resolved parent");
                    map.parents.insert(child.name.clone(), parent.name.clone());
                }
            }
        }

        debug!(
            parents = map.parents.len(),
            conflicts = map.conflicts.len(),
            "Inheritance resolved"
        );
        map
    }

    /// The resolved parent of `child`, if any
    pub fn parent_of(&self, child: &str) -> Option<&str> {
        self.parents.get(child).map(String::as_str)
    }

    /// (child, parent) pairs ordered by child name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parents.iter().map(|(c, p)| (c.as_str(), p.as_str()))
    }

    pub fn conflicts(&self) -> &[ParentConflict] {
        &self.conflicts
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
