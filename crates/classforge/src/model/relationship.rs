//! Relationships between classes

use serde::{Deserialize, Serialize};

use super::ClassKey;
use crate::core::RelationshipKind;

/// A directed relationship between two classes, referenced by key
///
/// For generalization, `from` is the child and `to` is the parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDef {
    pub from: ClassKey,
    pub to: ClassKey,
    #[serde(rename = "type", default)]
    pub kind: RelationshipKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<String>,
}

impl RelationshipDef {
    pub fn new(from: ClassKey, to: ClassKey, kind: impl Into<RelationshipKind>) -> Self {
        Self {
            from,
            to,
            kind: kind.into(),
            label: None,
            multiplicity: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_multiplicity(mut self, multiplicity: impl Into<String>) -> Self {
        self.multiplicity = Some(multiplicity.into());
        self
    }

    /// The multiplicity text, if present and non-empty
    pub fn multiplicity(&self) -> Option<&str> {
        self.multiplicity.as_deref().filter(|m| !m.is_empty())
    }
}
