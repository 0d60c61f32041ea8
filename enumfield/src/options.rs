use serde::{Deserialize, Serialize};

/// Options accepted by [`register_enum_field`](crate::register_enum_field).
///
/// ```
/// use enumfield::EnumFieldOptions;
///
/// let options = EnumFieldOptions::new().with_message("incorrect status").allow_nil(true);
/// assert_eq!(options.message_for("status"), "incorrect status");
/// assert!(options.allow_nil);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumFieldOptions {
    /// Error text reported by the inclusion rule. Defaults to `invalid {field}`.
    pub message: Option<String>,
    /// Blank values (absent, empty, or whitespace only) pass the inclusion rule.
    pub allow_blank: bool,
    /// Absent values pass the inclusion rule.
    pub allow_nil: bool,
}

impl EnumFieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    pub fn allow_nil(mut self, allow: bool) -> Self {
        self.allow_nil = allow;
        self
    }

    /// Message the inclusion rule reports for `field`.
    pub fn message_for(&self, field: &str) -> String {
        self.message.clone().unwrap_or_else(|| default_message(field))
    }
}

pub fn default_message(field: &str) -> String {
    format!("invalid {field}")
}
