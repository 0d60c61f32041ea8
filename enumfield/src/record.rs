use std::borrow::Cow;

/// Read access to the string attributes of a record instance.
///
/// Implemented by `#[derive(EnumFields)]`; hand-written records implement it to
/// use [`TypeDescriptor`](crate::TypeDescriptor) predicates and validation.
pub trait Record {
    /// Current value of `field`, or `None` when absent or unknown.
    fn read_field(&self, field: &str) -> Option<&str>;
}

/// Field types that can back an enum field.
pub trait FieldValue {
    fn as_field_str(&self) -> Option<&str>;
}

impl FieldValue for String {
    fn as_field_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl FieldValue for &str {
    fn as_field_str(&self) -> Option<&str> {
        Some(*self)
    }
}

impl FieldValue for Box<str> {
    fn as_field_str(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl FieldValue for Cow<'_, str> {
    fn as_field_str(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn as_field_str(&self) -> Option<&str> {
        self.as_ref().and_then(FieldValue::as_field_str)
    }
}

impl Record for std::collections::HashMap<String, String> {
    fn read_field(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl Record for std::collections::BTreeMap<String, String> {
    fn read_field(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}
