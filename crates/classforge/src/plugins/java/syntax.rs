//! Java visibility keywords

use crate::core::Visibility;

/// Field modifier; `None` means package-private
///
/// Unrecognized visibility falls back to `private`.
pub fn field_modifier(visibility: &Visibility) -> Option<&'static str> {
    match visibility {
        Visibility::Public => Some("public"),
        Visibility::Private | Visibility::Other(_) => Some("private"),
        Visibility::Protected => Some("protected"),
        Visibility::Package => None,
    }
}

/// Method modifier; unrecognized visibility leaves the method package-private
pub fn method_modifier(visibility: &Visibility) -> Option<&'static str> {
    match visibility {
        Visibility::Public => Some("public"),
        Visibility::Private => Some("private"),
        Visibility::Protected => Some("protected"),
        Visibility::Package | Visibility::Other(_) => None,
    }
}

/// `"private "` for `Some("private")`, empty for package-private
pub(super) fn prefix(modifier: Option<&str>) -> String {
    modifier.map(|m| format!("{} ", m)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_modifiers() {
        assert_eq!(field_modifier(&Visibility::Public), Some("public"));
        assert_eq!(field_modifier(&Visibility::Protected), Some("protected"));
        assert_eq!(field_modifier(&Visibility::Package), None);
        assert_eq!(field_modifier(&Visibility::from("internal")), Some("private"));
        assert_eq!(field_modifier(&Visibility::default()), Some("private"));
    }

    #[test]
    fn test_method_modifiers() {
        assert_eq!(method_modifier(&Visibility::Private), Some("private"));
        assert_eq!(method_modifier(&Visibility::default()), None);
        assert_eq!(prefix(method_modifier(&Visibility::Public)), "public ");
        assert_eq!(prefix(None), "");
    }
}
