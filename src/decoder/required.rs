use crate::descriptor::Descriptor;
use crate::serialization::SerializationError;

/// Tracks which elements of a composite have been decoded.
///
/// Mirrors what derived decode logic does: every element index is marked as it
/// is read, and at the end of the composite all absent required elements are
/// reported together in a single error instead of failing on the first one.
pub struct RequiredFields<'a> {
    descriptor: &'a Descriptor,
    seen: Vec<bool>,
}

impl<'a> RequiredFields<'a> {
    pub fn new(descriptor: &'a Descriptor) -> Self {
        Self {
            descriptor,
            seen: vec![false; descriptor.elements_count()],
        }
    }

    /// Marks `index` as decoded and returns whether it had already been seen.
    /// An index outside the descriptor is an unknown field.
    pub fn mark_seen(&mut self, index: usize) -> Result<bool, SerializationError> {
        let slot = self
            .seen
            .get_mut(index)
            .ok_or_else(|| SerializationError::unknown_field_at(index))?;
        Ok(std::mem::replace(slot, true))
    }

    pub fn is_seen(&self, index: usize) -> bool {
        self.seen.get(index).copied().unwrap_or(false)
    }

    /// Names of required elements not yet seen, in declaration order.
    pub fn missing(&self) -> Vec<&'a str> {
        let descriptor = self.descriptor;
        descriptor
            .required_indices()
            .filter(|&i| !self.is_seen(i))
            .filter_map(|i| descriptor.element_name(i))
            .collect()
    }

    pub fn finish(self) -> Result<(), SerializationError> {
        let missing = self.missing();
        if missing.is_empty() {
            return Ok(());
        }
        Err(SerializationError::missing_fields_in(
            &missing,
            &self.descriptor.serial_name,
        ))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::serialization::ErrorKind;

    fn person() -> Descriptor {
        Descriptor::new("Person")
            .element("name")
            .element("age")
            .optional_element("email")
    }

    #[test]
    fn all_required_seen_finishes_cleanly() {
        let d = person();
        let mut fields = RequiredFields::new(&d);
        assert!(!fields.mark_seen(1).unwrap());
        assert!(!fields.mark_seen(0).unwrap());
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn second_mark_reports_duplicate() {
        let d = person();
        let mut fields = RequiredFields::new(&d);
        assert!(!fields.mark_seen(2).unwrap());
        assert!(fields.mark_seen(2).unwrap());
        assert!(fields.is_seen(2));
    }

    #[test]
    fn out_of_range_index_is_unknown_field() {
        let d = person();
        let mut fields = RequiredFields::new(&d);
        let err = fields.mark_seen(5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownField);
        assert_eq!(err.to_string(), "An unknown field for index 5");
    }

    #[test]
    fn single_missing_uses_serial_name_form() {
        let d = person();
        let mut fields = RequiredFields::new(&d);
        fields.mark_seen(0).unwrap();
        let err = fields.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field 'age' is required for type with serial name 'Person', but it was missing"
        );
    }

    #[test]
    fn all_missing_reported_together_in_order() {
        let d = person();
        let mut fields = RequiredFields::new(&d);
        fields.mark_seen(2).unwrap();
        assert_eq!(fields.missing(), vec!["name", "age"]);
        let err = fields.finish().unwrap_err();
        assert!(err.is_missing_field());
        assert_eq!(
            err.to_string(),
            "Fields [name, age] are required for type with serial name 'Person', but they were missing"
        );
    }
}
