use std::fmt::Display;

use crate::serialization::{SerializationError, messages};

impl serde::de::Error for SerializationError {
    fn custom<T: Display>(msg: T) -> Self {
        Self::with_message(msg.to_string())
    }

    fn missing_field(field: &'static str) -> Self {
        Self::missing_field_named(field)
    }

    fn unknown_field(field: &str, expected: &'static [&'static str]) -> Self {
        let message = if expected.is_empty() {
            format!("Encountered an unknown field '{field}', there are no fields")
        } else {
            format!(
                "Encountered an unknown field '{field}', expected one of {}",
                messages::display_list(expected)
            )
        };
        Self::unknown_field_from_message(message, None)
    }
}

impl serde::ser::Error for SerializationError {
    fn custom<T: Display>(msg: T) -> Self {
        Self::with_message(msg.to_string())
    }
}
