//! Classforge - Generate source code skeletons from class models
//!
//! A library for turning a UML-style class model (classes, properties,
//! methods and relationships) into Java, PHP or Python source.
//!
//! # Quick Start
//!
//! ```rust
//! use classforge::{generate_json, Target};
//!
//! let json = r#"{
//!     "classes": [
//!         { "key": 1, "name": "Animal",
//!           "properties": [ { "name": "name", "type": "string", "visibility": "private" } ] },
//!         { "key": 2, "name": "Dog" }
//!     ],
//!     "relationships": [ { "from": 2, "to": 1, "type": "generalization" } ]
//! }"#;
//!
//! let java = generate_json(json, Target::Java).unwrap();
//! assert!(java.contains("public class Dog extends Animal {"));
//! assert!(java.contains("private String name;"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, build the model and pick an emitter yourself:
//!
//! ```rust
//! use classforge::prelude::*;
//!
//! let model = ClassModel::new()
//!     .with_class(ClassDef::new(1, "Dog").with_method(MethodDef::new("bark")));
//!
//! let config = EmitConfig::new().with_doc_comments(false);
//! let python = PythonEmitter::with_config(config).emit(&model);
//! assert!(python.contains("def bark(self) -> None:"));
//! ```

pub mod annotator;
pub mod core;
pub mod model;
pub mod plugins;
pub mod resolver;
pub mod type_map;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        EmitConfig, Emitter, GenerateError, RelationshipKind, Target, TypeName, TypeToken, Visibility,
    };
    pub use crate::model::{
        ClassDef, ClassKey, ClassModel, MethodDef, ParameterDef, PropertyDef, RelationshipDef,
    };
    pub use crate::plugins::generator::{Generator, ModelReport};
    pub use crate::plugins::java::JavaEmitter;
    pub use crate::plugins::php::PhpEmitter;
    pub use crate::plugins::python::PythonEmitter;
    pub use crate::resolver::{InheritanceMap, ParentConflict};
}

/// Generate source code for `target` with the default configuration
///
/// The model is validated first; duplicate or empty class names and
/// duplicate keys are rejected.
///
/// # Example
/// ```rust
/// use classforge::generate;
/// use classforge::model::{ClassDef, ClassModel};
/// use classforge::Target;
///
/// let model = ClassModel::new().with_class(ClassDef::new(1, "Point"));
/// let php = generate(&model, Target::Php).unwrap();
/// assert!(php.starts_with("<?php"));
/// ```
pub fn generate(model: &model::ClassModel, target: Target) -> Result<String, GenerateError> {
    generate_with_config(model, target, EmitConfig::default())
}

/// Generate source code with an explicit [`EmitConfig`]
///
/// # Example
/// ```rust
/// use classforge::{generate_with_config, EmitConfig, Target};
/// use classforge::model::{ClassDef, ClassModel};
///
/// let model = ClassModel::new().with_class(ClassDef::new(1, "Point"));
/// let config = EmitConfig::new().with_relationship_trailer(false);
/// let java = generate_with_config(&model, Target::Java, config).unwrap();
/// assert!(!java.contains("Relationships:"));
/// ```
pub fn generate_with_config(
    model: &model::ClassModel,
    target: Target,
    config: EmitConfig,
) -> Result<String, GenerateError> {
    plugins::generator::Generator::with_config(config).generate(model, target)
}

/// Decode a JSON model document and generate source code for `target`
pub fn generate_json(input: &str, target: Target) -> Result<String, GenerateError> {
    plugins::generator::Generator::new().generate_json(input, target)
}

/// Decode a JSON model document without generating anything
///
/// # Example
/// ```rust
/// use classforge::parse_model;
///
/// let model = parse_model(r#"{ "classes": [ { "key": 1, "name": "A" } ] }"#).unwrap();
/// assert_eq!(model.class_count(), 1);
/// assert_eq!(model.relationship_count(), 0);
/// ```
pub fn parse_model(input: &str) -> Result<model::ClassModel, GenerateError> {
    model::ClassModel::from_json(input)
}
