//! Core emitter trait for source generation
//!
//! This trait defines the interface every target language implements to
//! turn a [`ClassModel`] into a complete source document.

use super::Target;
use crate::model::ClassModel;

/// Core trait for code emitters
///
/// An emitter is a pure function of the model: it never mutates its input,
/// keeps no state between calls and never fails. Dangling relationships and
/// unknown tokens degrade to fallbacks instead of errors.
///
/// # Example
/// ```
/// use classforge::core::Emitter;
/// use classforge::model::{ClassDef, ClassModel};
/// use classforge::plugins::java::JavaEmitter;
///
/// let mut model = ClassModel::new();
/// model.add_class(ClassDef::new(1, "Animal"));
///
/// let code = JavaEmitter::new().emit(&model);
/// assert!(code.contains("public class Animal {"));
/// ```
pub trait Emitter: Send + Sync {
    /// Render the whole model into one source document
    fn emit(&self, model: &ClassModel) -> String;

    /// The language this emitter produces
    fn target(&self) -> Target;

    /// Get the name of this emitter
    fn name(&self) -> &'static str;
}
