//! Per-target type mapping
//!
//! Maps a language-agnostic [`TypeToken`] to a target type name. The
//! mapping is total: unknown tokens fall back to each target's dynamic type
//! and the result is never empty.

use crate::core::{Target, TypeToken};

/// Java fallback when a custom token is blank
pub const JAVA_FALLBACK: &str = "Object";
pub const PHP_FALLBACK: &str = "mixed";
pub const PYTHON_FALLBACK: &str = "Any";

/// Map a type token to its spelling in `target`
///
/// # Example
/// ```
/// use classforge::core::{Target, TypeToken};
/// use classforge::type_map::map_type;
///
/// assert_eq!(map_type(&TypeToken::from("string"), Target::Java), "String");
/// assert_eq!(map_type(&TypeToken::from("Dog"), Target::Php), "mixed");
/// assert_eq!(map_type(&TypeToken::from("void"), Target::Python), "None");
/// ```
pub fn map_type(token: &TypeToken, target: Target) -> String {
    match target {
        Target::Java => java_type(token),
        Target::Php => php_type(token).to_string(),
        Target::Python => python_type(token).to_string(),
    }
}

/// Map a raw type string, parsing it into a [`TypeToken`] first
pub fn map_type_str(token: &str, target: Target) -> String {
    map_type(&TypeToken::from(token), target)
}

fn java_type(token: &TypeToken) -> String {
    match token {
        TypeToken::String => "String".to_string(),
        TypeToken::Int => "int".to_string(),
        TypeToken::Double => "double".to_string(),
        TypeToken::Float => "float".to_string(),
        TypeToken::Boolean => "boolean".to_string(),
        TypeToken::Void => "void".to_string(),
        // Custom names pass through, so `Dog` stays `Dog`
        TypeToken::Custom(raw) if raw.trim().is_empty() => JAVA_FALLBACK.to_string(),
        TypeToken::Custom(raw) => raw.clone(),
    }
}

fn php_type(token: &TypeToken) -> &'static str {
    match token {
        TypeToken::String => "string",
        TypeToken::Int => "int",
        TypeToken::Double | TypeToken::Float => "float",
        TypeToken::Boolean => "bool",
        TypeToken::Void => "void",
        TypeToken::Custom(_) => PHP_FALLBACK,
    }
}

fn python_type(token: &TypeToken) -> &'static str {
    match token {
        TypeToken::String => "str",
        TypeToken::Int => "int",
        TypeToken::Double | TypeToken::Float => "float",
        TypeToken::Boolean => "bool",
        TypeToken::Void => "None",
        TypeToken::Custom(_) => PYTHON_FALLBACK,
    }
}
