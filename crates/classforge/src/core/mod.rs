//! Core abstractions for code generation
//!
//! This module defines the emitter trait, the shared token vocabulary,
//! configuration, errors and logging used by every target plugin.

mod config;
mod emitter;
mod error;
pub mod logging;
mod text;
mod types;
mod writer;

pub use config::*;
pub use emitter::*;
pub use error::*;
pub use logging::*;
pub use text::*;
pub use types::*;
pub use writer::*;
