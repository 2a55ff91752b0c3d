//! Logger names derived from Rust types.

use std::borrow::Cow;

/// Strip every generic argument list from a type name.
///
/// `app::Cache<u32, String>` becomes `app::Cache`, and in compound types each
/// component is stripped on its own, so `(app::Cache<u32>, u8)` becomes
/// `(app::Cache, u8)`. The `->` of function pointer types is kept. Names that
/// start with `<` (qualified paths) are returned unchanged.
pub fn generic_definition_name(type_name: &str) -> Cow<'_, str> {
    if !type_name.contains('<') || type_name.starts_with('<') {
        return Cow::Borrowed(type_name);
    }

    let mut stripped = String::with_capacity(type_name.len());
    let mut depth = 0usize;
    let mut prev = '\0';
    for c in type_name.chars() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' && depth > 0 => depth -= 1,
            _ if depth == 0 => stripped.push(c),
            _ => {}
        }
        prev = c;
    }
    Cow::Owned(stripped)
}

/// Logger name for `T`: its full path without generic arguments.
pub fn logger_name_of<T: ?Sized>() -> Cow<'static, str> {
    generic_definition_name(std::any::type_name::<T>())
}
