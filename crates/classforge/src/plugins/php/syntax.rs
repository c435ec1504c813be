//! PHP visibility keywords and type spelling

use crate::core::Visibility;
use crate::type_map::PHP_FALLBACK;

/// Property keyword; PHP has no package scope, so it falls back to `private`
pub fn property_visibility(visibility: &Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public",
        Visibility::Protected => "protected",
        Visibility::Private | Visibility::Package | Visibility::Other(_) => "private",
    }
}

/// Method keyword; anything unrecognized stays `public`
pub fn method_visibility(visibility: &Visibility) -> &'static str {
    match visibility {
        Visibility::Private => "private",
        Visibility::Protected => "protected",
        Visibility::Public | Visibility::Package | Visibility::Other(_) => "public",
    }
}

/// Spelling of a mapped type in a value position
///
/// `void` only types returns; fields and parameters fall back to `mixed`.
pub fn value_type(php_type: &str) -> &str {
    if php_type == "void" {
        PHP_FALLBACK
    } else {
        php_type
    }
}

/// Nullable spelling of a mapped type for `= null` defaults
///
/// `mixed` already admits null and cannot take the `?` prefix.
pub fn nullable(php_type: &str) -> String {
    match value_type(php_type) {
        PHP_FALLBACK => PHP_FALLBACK.to_string(),
        other => format!("?{}", other),
    }
}
