//! Core error types for code generation
//!
//! Emitters themselves never fail. These errors only surface at the edges:
//! model validation, target selection, JSON decoding and file access.

use thiserror::Error;

/// Core error types for code generation
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Duplicate class name: {name} (keys {first_key} and {second_key})")]
    DuplicateClassName {
        name: String,
        first_key: i64,
        second_key: i64,
    },

    #[error("Duplicate class key: {key}")]
    DuplicateClassKey { key: i64 },

    #[error("Empty class name for key {key}")]
    EmptyClassName { key: i64 },

    #[error("Unknown target language: {target}")]
    UnknownTarget { target: String },

    #[error("Model format error: {source}")]
    ModelFormat {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Create a new duplicate class name error
    pub fn duplicate_class_name(name: String, first_key: i64, second_key: i64) -> Self {
        Self::DuplicateClassName {
            name,
            first_key,
            second_key,
        }
    }

    /// Create a new duplicate class key error
    pub fn duplicate_class_key(key: i64) -> Self {
        Self::DuplicateClassKey { key }
    }

    /// Create a new empty class name error
    pub fn empty_class_name(key: i64) -> Self {
        Self::EmptyClassName { key }
    }

    /// Create a new unknown target error
    pub fn unknown_target(target: impl Into<String>) -> Self {
        Self::UnknownTarget {
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_class_name() {
        let error = GenerateError::duplicate_class_name("Dog".to_string(), 1, 7);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Duplicate class name"));
        assert!(error_msg.contains("Dog"));
        assert!(error_msg.contains("keys 1 and 7"));
    }

    #[test]
    fn test_duplicate_class_key() {
        let error = GenerateError::duplicate_class_key(3);
        assert_eq!(error.to_string(), "Duplicate class key: 3");
    }

    #[test]
    fn test_empty_class_name() {
        let error = GenerateError::empty_class_name(42);
        assert!(error.to_string().contains("key 42"));
    }

    #[test]
    fn test_unknown_target() {
        let error = GenerateError::unknown_target("cobol");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Unknown target language"));
        assert!(error_msg.contains("cobol"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: GenerateError = json_err.into();
        assert!(error.to_string().contains("Model format error"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: GenerateError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
