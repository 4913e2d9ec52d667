//! Message formats for the field-level errors.
//!
//! These strings are part of the public contract: callers match on them in
//! tests and logs, so the wording must not drift.

pub fn missing_field(field: &str) -> String {
    format!("Field '{field}' is required, but it was missing")
}

/// Singular wording for one name, plural wording otherwise.
pub fn missing_fields<S: AsRef<str>>(fields: &[S], serial_name: &str) -> String {
    match fields {
        [single] => format!(
            "Field '{}' is required for type with serial name '{serial_name}', but it was missing",
            single.as_ref()
        ),
        _ => format!(
            "Fields {} are required for type with serial name '{serial_name}', but they were missing",
            display_list(fields)
        ),
    }
}

pub fn unknown_field(index: usize) -> String {
    format!("An unknown field for index {index}")
}

/// Renders names as `[a, b, c]`, keeping input order.
pub fn display_list<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ");
    format!("[{joined}]")
}
