mod input;
pub mod required;

pub use required::RequiredFields;

use serde_json::Value;

use self::input::ObjectInput;
use crate::descriptor::Descriptor;
use crate::serialization::SerializationError;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecoderConfig {
    /// Skip object keys the descriptor does not declare instead of failing.
    /// Has no effect on positional decoding, where an unknown index carries no name.
    pub ignore_unknown_keys: bool,
}

impl DecoderConfig {
    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Decoded composite: one slot per descriptor element, `None` when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    descriptor: &'a Descriptor,
    values: Vec<Option<Value>>,
}

impl<'a> Record<'a> {
    pub fn serial_name(&self) -> &'a str {
        &self.descriptor.serial_name
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.descriptor.element_index(name)?;
        self.get_index(index)
    }

    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.values.get(index).and_then(Option::as_ref)
    }

    /// Present elements as a JSON object keyed by element name.
    pub fn to_json(&self) -> Value {
        let object: serde_json::Map<String, Value> = self
            .descriptor
            .elements
            .iter()
            .zip(&self.values)
            .filter_map(|(element, value)| Some((element.name.clone(), value.clone()?)))
            .collect();
        Value::Object(object)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn not_an_object(descriptor: &Descriptor, found: &str) -> SerializationError {
    SerializationError::with_message(format!(
        "Expected a JSON object for type with serial name '{}', but found {found}",
        descriptor.serial_name
    ))
}

fn decoded_twice(descriptor: &Descriptor, index: usize) -> SerializationError {
    SerializationError::with_message(format!(
        "Element '{}' with index {index} of type with serial name '{}' was decoded twice",
        descriptor.element_name(index).unwrap_or_default(),
        descriptor.serial_name
    ))
}

/// Named decoding over `(key, value)` pairs in input order.
fn decode_entries<'a, 'v>(
    descriptor: &'a Descriptor,
    entries: impl IntoIterator<Item = (&'v str, &'v Value)>,
    config: &DecoderConfig,
) -> Result<Record<'a>, SerializationError> {
    let mut required = RequiredFields::new(descriptor);
    let mut values = vec![None; descriptor.elements_count()];

    for (key, value) in entries {
        let Some(index) = descriptor.element_index(key) else {
            if config.ignore_unknown_keys {
                tracing::debug!(
                    serial_name = %descriptor.serial_name,
                    key = %key,
                    "skipping unknown key"
                );
                continue;
            }
            return Err(SerializationError::unknown_field_from_message(
                format!(
                    "Encountered an unknown key '{key}' for type with serial name '{}'",
                    descriptor.serial_name
                ),
                None,
            ));
        };
        if required.mark_seen(index)? {
            return Err(decoded_twice(descriptor, index));
        }
        if let Some(slot) = values.get_mut(index) {
            *slot = Some(value.clone());
        }
    }

    required.finish()?;
    tracing::trace!(serial_name = %descriptor.serial_name, "decoded object");
    Ok(Record { descriptor, values })
}

/// Decodes a JSON object whose keys name descriptor elements.
///
/// A parsed [`Value`] has already merged repeated keys; use
/// [`decode_object_str`] to have those rejected.
pub fn decode_object<'a>(
    descriptor: &'a Descriptor,
    input: &Value,
    config: &DecoderConfig,
) -> Result<Record<'a>, SerializationError> {
    descriptor.validate()?;
    let object = input
        .as_object()
        .ok_or_else(|| not_an_object(descriptor, json_type_name(input)))?;
    decode_entries(
        descriptor,
        object.iter().map(|(key, value)| (key.as_str(), value)),
        config,
    )
}

/// Parses `json` and decodes it, keeping keys in document order.
/// A key that appears twice fails the decode.
pub fn decode_object_str<'a>(
    descriptor: &'a Descriptor,
    json: &str,
    config: &DecoderConfig,
) -> Result<Record<'a>, SerializationError> {
    descriptor.validate()?;
    match serde_json::from_str::<ObjectInput>(json)? {
        ObjectInput::Entries(entries) => decode_entries(
            descriptor,
            entries.iter().map(|(key, value)| (key.as_str(), value)),
            config,
        ),
        ObjectInput::Other(found) => Err(not_an_object(descriptor, found)),
    }
}

/// Decodes `(element index, value)` pairs, as produced by tag-numbered formats.
///
/// Stops at the first index the descriptor does not declare.
pub fn decode_indexed<'a>(
    descriptor: &'a Descriptor,
    entries: &[(usize, Value)],
) -> Result<Record<'a>, SerializationError> {
    descriptor.validate()?;
    let mut required = RequiredFields::new(descriptor);
    let mut values = vec![None; descriptor.elements_count()];

    for (index, value) in entries {
        let index = *index;
        if required.mark_seen(index)? {
            return Err(decoded_twice(descriptor, index));
        }
        if let Some(slot) = values.get_mut(index) {
            *slot = Some(value.clone());
        }
    }

    required.finish()?;
    tracing::trace!(serial_name = %descriptor.serial_name, "decoded indexed composite");
    Ok(Record { descriptor, values })
}
