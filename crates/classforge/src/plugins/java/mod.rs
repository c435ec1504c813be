//! Java target plugin
//!
//! Emits one public class per model class with fields, a no-argument
//! constructor, accessors, method stubs and a `toString` override for
//! subclasses.

mod emitter;
mod syntax;

pub use emitter::JavaEmitter;
pub use syntax::{field_modifier, method_modifier};
