//! Python target plugin
//!
//! Emits a module with a `typing` import, one class per model class with a
//! keyword-argument constructor, method stubs with type hints and a
//! `__str__` override for subclasses.

mod emitter;
mod syntax;

pub use emitter::PythonEmitter;
pub use syntax::{optional, str_template};
