//! Target language plugins
//!
//! Each plugin implements [`Emitter`](crate::core::Emitter) for one
//! language. The generator picks the right one for a [`Target`](crate::core::Target).

pub mod generator;
pub mod java;
pub mod php;
pub mod python;

pub use generator::*;
pub use java::*;
pub use php::*;
pub use python::*;
