//! Class model consumed by the emitters
//!
//! The model mirrors the JSON document an editing surface persists:
//! an ordered list of classes plus an ordered list of relationships
//! referring to classes by key.

mod class;
mod database;
mod relationship;

pub use class::{ClassDef, ClassKey, MethodDef, ParameterDef, PropertyDef};
pub use database::ClassModel;
pub use relationship::RelationshipDef;
