//! Shared text utilities for the emitters

/// Uppercase the first character, leaving the rest untouched
///
/// # Example
/// ```
/// use classforge::core::capitalize;
///
/// assert_eq!(capitalize("name"), "Name");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
