//! Emitter configuration
//!
//! The defaults reproduce the canonical output for each target. Every
//! option only toggles or reshapes supplementary text; class structure,
//! field order and inheritance clauses never depend on configuration.

/// Options shared by every emitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitConfig {
    /// Spaces per indentation level
    pub indent: usize,
    /// Emit docblocks, docstrings and explanatory comments
    pub doc_comments: bool,
    /// Emit getters and fluent setters for PHP properties
    pub php_accessors: bool,
    /// Append the relationship comment block
    pub relationship_trailer: bool,
}

impl EmitConfig {
    pub fn new() -> Self {
        Self {
            indent: 4,
            doc_comments: true,
            php_accessors: false,
            relationship_trailer: true,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_doc_comments(mut self, enabled: bool) -> Self {
        self.doc_comments = enabled;
        self
    }

    pub fn with_php_accessors(mut self, enabled: bool) -> Self {
        self.php_accessors = enabled;
        self
    }

    pub fn with_relationship_trailer(mut self, enabled: bool) -> Self {
        self.relationship_trailer = enabled;
        self
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EmitConfig::default();
        assert_eq!(config.indent, 4);
        assert!(config.doc_comments);
        assert!(!config.php_accessors);
        assert!(config.relationship_trailer);
    }

    #[test]
    fn test_builder() {
        let config = EmitConfig::new()
            .with_indent(2)
            .with_doc_comments(false)
            .with_php_accessors(true)
            .with_relationship_trailer(false);
        assert_eq!(config.indent, 2);
        assert!(!config.doc_comments);
        assert!(config.php_accessors);
        assert!(!config.relationship_trailer);
    }
}
