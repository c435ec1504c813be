//! PHP target plugin
//!
//! Emits a `<?php` document with docblocked classes, a constructor taking
//! one optional argument per property and method stubs.

mod emitter;
mod syntax;

pub use emitter::PhpEmitter;
pub use syntax::{method_visibility, nullable, property_visibility, value_type};
