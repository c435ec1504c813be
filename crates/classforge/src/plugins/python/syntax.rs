//! Python type hint helpers

use crate::type_map::PYTHON_FALLBACK;

/// Hint for a parameter defaulting to `None`
///
/// `Any` already admits `None` and is left as is.
pub fn optional(py_type: &str) -> String {
    if py_type == PYTHON_FALLBACK {
        py_type.to_string()
    } else {
        format!("Optional[{}]", py_type)
    }
}

/// f-string body for `__str__`: `Dog(name={self.name}, age={self.age})`
pub fn str_template<'a>(class_name: &str, properties: impl IntoIterator<Item = &'a str>) -> String {
    let fields = properties
        .into_iter()
        .map(|name| format!("{0}={{self.{0}}}", name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({})", class_name, fields)
}
