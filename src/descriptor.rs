use std::collections::HashSet;

use crate::serialization::SerializationError;

/// One element (field) of a composite schema.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    /// Name as it appears in named formats (e.g. a JSON key).
    pub name: String,
    /// Optional elements may be absent without failing the decode.
    #[serde(default)]
    pub optional: bool,
}

/// Schema of a composite type: its serial name plus ordered elements.
///
/// An element's index is its position in `elements`; positional formats refer
/// to elements by that index. Element names must be unique; deserialization
/// rejects duplicates and the decoders re-check with [`Descriptor::validate`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", try_from = "DescriptorRepr")]
pub struct Descriptor {
    /// Name used in error messages, e.g. `"Person"`.
    pub serial_name: String,
    pub elements: Vec<ElementDescriptor>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescriptorRepr {
    serial_name: String,
    elements: Vec<ElementDescriptor>,
}

impl TryFrom<DescriptorRepr> for Descriptor {
    type Error = SerializationError;

    fn try_from(repr: DescriptorRepr) -> Result<Self, Self::Error> {
        let descriptor = Self {
            serial_name: repr.serial_name,
            elements: repr.elements,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

impl Descriptor {
    pub fn new(serial_name: impl Into<String>) -> Self {
        Self {
            serial_name: serial_name.into(),
            elements: Vec::new(),
        }
    }

    pub fn element(mut self, name: impl Into<String>) -> Self {
        self.elements.push(ElementDescriptor {
            name: name.into(),
            optional: false,
        });
        self
    }

    pub fn optional_element(mut self, name: impl Into<String>) -> Self {
        self.elements.push(ElementDescriptor {
            name: name.into(),
            optional: true,
        });
        self
    }

    pub fn validate(&self) -> Result<(), SerializationError> {
        let mut names = HashSet::with_capacity(self.elements.len());
        for element in &self.elements {
            if !names.insert(element.name.as_str()) {
                return Err(SerializationError::with_message(format!(
                    "Duplicate element name '{}' in type with serial name '{}'",
                    element.name, self.serial_name
                )));
            }
        }
        Ok(())
    }

    pub fn elements_count(&self) -> usize {
        self.elements.len()
    }

    /// First element with this name, if any.
    pub fn element_index(&self, name: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.name == name)
    }

    pub fn element_name(&self, index: usize) -> Option<&str> {
        self.elements.get(index).map(|e| e.name.as_str())
    }

    pub fn is_element_optional(&self, index: usize) -> bool {
        self.elements.get(index).is_some_and(|e| e.optional)
    }

    pub fn required_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.optional)
            .map(|(i, _)| i)
    }
}
