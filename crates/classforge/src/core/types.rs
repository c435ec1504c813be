//! Core type definitions for code generation
//!
//! This module contains the vocabulary shared by the model and every
//! emitter: target languages, member visibility, type tokens and
//! relationship kinds.
//!
//! Every token type deserializes from a plain string or `null` and never
//! rejects its input. Unrecognized strings land in an explicit catch-all
//! variant so the fallback paths stay visible in the type system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::GenerateError;

/// Target language for generated source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Java-style classes with getters, setters and `toString`
    #[default]
    Java,
    /// PHP classes with docblocks and a constructor taking every property
    Php,
    /// Python classes with type hints and docstrings
    Python,
}

impl Target {
    /// All supported targets, in a stable order
    pub fn all() -> &'static [Target] {
        &[Target::Java, Target::Php, Target::Python]
    }

    /// Line comment token used by the relationship trailer
    pub fn comment_token(self) -> &'static str {
        match self {
            Target::Java | Target::Php => "//",
            Target::Python => "#",
        }
    }

    /// Conventional file extension, without the dot
    pub fn file_extension(self) -> &'static str {
        match self {
            Target::Java => "java",
            Target::Php => "php",
            Target::Python => "py",
        }
    }

    /// Guess the target from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        Target::all()
            .iter()
            .copied()
            .find(|t| t.file_extension().eq_ignore_ascii_case(ext))
    }

    /// Short human readable description
    pub fn description(self) -> &'static str {
        match self {
            Target::Java => "Java classes with accessors and toString overrides",
            Target::Php => "PHP classes with docblocks and typed constructors",
            Target::Python => "Python classes with type hints and docstrings",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Java => write!(f, "java"),
            Target::Php => write!(f, "php"),
            Target::Python => write!(f, "python"),
        }
    }
}

impl FromStr for Target {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "java" => Ok(Target::Java),
            "php" => Ok(Target::Php),
            "python" | "py" => Ok(Target::Python),
            _ => Err(GenerateError::unknown_target(s)),
        }
    }
}

/// Visibility modifier for class members
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Visibility {
    Public,    // +
    Private,   // -
    Protected, // #
    Package,   // ~
    /// Anything else, kept verbatim (including the empty string)
    Other(String),
}

impl Visibility {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Visibility::Public),
            '-' => Some(Visibility::Private),
            '#' => Some(Visibility::Protected),
            '~' => Some(Visibility::Package),
            _ => None,
        }
    }

    pub fn to_char(&self) -> Option<char> {
        match self {
            Visibility::Public => Some('+'),
            Visibility::Private => Some('-'),
            Visibility::Protected => Some('#'),
            Visibility::Package => Some('~'),
            Visibility::Other(_) => None,
        }
    }

    /// Returns true for the four UML visibilities
    pub fn is_known(&self) -> bool {
        !matches!(self, Visibility::Other(_))
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Other(String::new())
    }
}

impl From<&str> for Visibility {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(v) = Visibility::from_char(c) {
                return v;
            }
        }
        match trimmed.to_lowercase().as_str() {
            "public" => Visibility::Public,
            "private" => Visibility::Private,
            "protected" => Visibility::Protected,
            "package" => Visibility::Package,
            _ => Visibility::Other(s.to_string()),
        }
    }
}

impl From<String> for Visibility {
    fn from(s: String) -> Self {
        Visibility::from(s.as_str())
    }
}

impl From<Option<String>> for Visibility {
    fn from(s: Option<String>) -> Self {
        s.map(Visibility::from).unwrap_or_default()
    }
}

impl From<Visibility> for String {
    fn from(v: Visibility) -> Self {
        v.to_string()
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Package => write!(f, "package"),
            Visibility::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Language-agnostic type token
///
/// Matching is case-insensitive. Anything outside the well-known set is a
/// [`TypeToken::Custom`] carrying the raw text, which each target maps to
/// its own fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeToken {
    String,
    Int,
    Double,
    Float,
    Boolean,
    Void,
    Custom(String),
}

impl TypeToken {
    /// Returns true for `void`
    pub fn is_void(&self) -> bool {
        matches!(self, TypeToken::Void)
    }
}

impl Default for TypeToken {
    fn default() -> Self {
        TypeToken::Custom(String::new())
    }
}

impl From<&str> for TypeToken {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "string" => TypeToken::String,
            "int" => TypeToken::Int,
            "double" => TypeToken::Double,
            "float" => TypeToken::Float,
            "boolean" => TypeToken::Boolean,
            "void" => TypeToken::Void,
            _ => TypeToken::Custom(s.to_string()),
        }
    }
}

impl From<String> for TypeToken {
    fn from(s: String) -> Self {
        TypeToken::from(s.as_str())
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeToken::String => write!(f, "string"),
            TypeToken::Int => write!(f, "int"),
            TypeToken::Double => write!(f, "double"),
            TypeToken::Float => write!(f, "float"),
            TypeToken::Boolean => write!(f, "boolean"),
            TypeToken::Void => write!(f, "void"),
            TypeToken::Custom(raw) => write!(f, "{}", raw),
        }
    }
}

/// Type text attached to a property, method or parameter
///
/// Keeps the text exactly as written next to its parsed [`TypeToken`].
/// Emitters map the token; documentation that echoes the model prints the
/// raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub struct TypeName {
    raw: String,
    token: TypeToken,
}

impl TypeName {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let token = TypeToken::from(raw.as_str());
        Self { raw, token }
    }

    pub fn token(&self) -> &TypeToken {
        &self.token
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_void(&self) -> bool {
        self.token.is_void()
    }
}

impl Default for TypeName {
    fn default() -> Self {
        TypeName::new(String::new())
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        TypeName::new(s)
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        TypeName::new(s)
    }
}

impl From<Option<String>> for TypeName {
    fn from(s: Option<String>) -> Self {
        s.map(TypeName::new).unwrap_or_default()
    }
}

impl From<TypeName> for String {
    fn from(t: TypeName) -> Self {
        t.raw
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Relationship type between classes
///
/// Only [`RelationshipKind::Generalization`] changes code structure; every
/// kind shows up in the relationship trailer. Matching is exact, so
/// `"Generalization"` is an [`RelationshipKind::Other`] and prints as
/// written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum RelationshipKind {
    Generalization,
    Association,
    Composition,
    Aggregation,
    Realization,
    Dependency,
    Other(String),
}

impl RelationshipKind {
    pub fn is_generalization(&self) -> bool {
        matches!(self, RelationshipKind::Generalization)
    }
}

impl Default for RelationshipKind {
    fn default() -> Self {
        RelationshipKind::Other(String::new())
    }
}

impl From<&str> for RelationshipKind {
    fn from(s: &str) -> Self {
        match s {
            "generalization" => RelationshipKind::Generalization,
            "association" => RelationshipKind::Association,
            "composition" => RelationshipKind::Composition,
            "aggregation" => RelationshipKind::Aggregation,
            "realization" => RelationshipKind::Realization,
            "dependency" => RelationshipKind::Dependency,
            _ => RelationshipKind::Other(s.to_string()),
        }
    }
}

impl From<String> for RelationshipKind {
    fn from(s: String) -> Self {
        RelationshipKind::from(s.as_str())
    }
}

impl From<Option<String>> for RelationshipKind {
    fn from(s: Option<String>) -> Self {
        s.map(RelationshipKind::from).unwrap_or_default()
    }
}

impl From<RelationshipKind> for String {
    fn from(k: RelationshipKind) -> Self {
        k.to_string()
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipKind::Generalization => write!(f, "generalization"),
            RelationshipKind::Association => write!(f, "association"),
            RelationshipKind::Composition => write!(f, "composition"),
            RelationshipKind::Aggregation => write!(f, "aggregation"),
            RelationshipKind::Realization => write!(f, "realization"),
            RelationshipKind::Dependency => write!(f, "dependency"),
            RelationshipKind::Other(raw) => write!(f, "{}", raw),
        }
    }
}
