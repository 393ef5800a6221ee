//! Case conversion.

/// Convert `PascalCase`/`camelCase` text to `snake_case`.
///
/// An underscore goes before every uppercase letter except the first
/// character, then the whole result is lowercased.
pub fn to_snake_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for (i, c) in text.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}
