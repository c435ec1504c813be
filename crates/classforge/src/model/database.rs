//! Class model storage
//!
//! Stores classes and relationships in insertion order.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{ClassDef, ClassKey, RelationshipDef};
use crate::core::GenerateError;

/// Class model: the sole input of a generation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
    #[serde(default)]
    classes: Vec<ClassDef>,
    #[serde(default)]
    relationships: Vec<RelationshipDef>,
}

impl ClassModel {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn from_parts(classes: Vec<ClassDef>, relationships: Vec<RelationshipDef>) -> Self {
        Self {
            classes,
            relationships,
        }
    }

    /// Decode the `{ "classes": [...], "relationships": [...] }` document
    pub fn from_json(input: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, GenerateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn add_class(&mut self, class: ClassDef) {
        self.classes.push(class);
    }

    pub fn add_relationship(&mut self, rel: RelationshipDef) {
        self.relationships.push(rel);
    }

    pub fn with_class(mut self, class: ClassDef) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_relationship(mut self, rel: RelationshipDef) -> Self {
        self.add_relationship(rel);
        self
    }

    pub fn classes(&self) -> &[ClassDef] {
        &self.classes
    }

    pub fn relationships(&self) -> &[RelationshipDef] {
        &self.relationships
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.relationships.is_empty()
    }

    /// Look up a class by key; the first match wins
    pub fn get_class(&self, key: ClassKey) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.key == key)
    }

    pub fn get_class_by_name(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Resolve both endpoints of a relationship, or None if either dangles
    pub fn endpoints(&self, rel: &RelationshipDef) -> Option<(&ClassDef, &ClassDef)> {
        Some((self.get_class(rel.from)?, self.get_class(rel.to)?))
    }

    /// Relationships whose endpoints both exist, in input order
    pub fn resolved_relationships(
        &self,
    ) -> impl Iterator<Item = (&RelationshipDef, &ClassDef, &ClassDef)> {
        self.relationships
            .iter()
            .filter_map(move |rel| self.endpoints(rel).map(|(from, to)| (rel, from, to)))
    }

    /// Relationships referencing at least one missing key, in input order
    pub fn dangling_relationships(&self) -> impl Iterator<Item = &RelationshipDef> {
        self.relationships
            .iter()
            .filter(move |rel| self.endpoints(rel).is_none())
    }

    /// Check the identity invariants the emitters rely on
    ///
    /// Keys must be unique, names must be non-empty and unique. Dangling
    /// relationships are not an error here; emitters skip them.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let mut keys: HashSet<ClassKey> = HashSet::with_capacity(self.classes.len());
        let mut names: HashMap<&str, ClassKey> = HashMap::with_capacity(self.classes.len());

        for class in &self.classes {
            if !keys.insert(class.key) {
                return Err(GenerateError::duplicate_class_key(class.key));
            }
            if class.name.trim().is_empty() {
                return Err(GenerateError::empty_class_name(class.key));
            }
            if let Some(first_key) = names.insert(class.name.as_str(), class.key) {
                return Err(GenerateError::duplicate_class_name(
                    class.name.clone(),
                    first_key,
                    class.key,
                ));
            }
        }

        Ok(())
    }
}
