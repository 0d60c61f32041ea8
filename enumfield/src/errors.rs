use serde::Serialize;
use thiserror::Error;

/// Failure raised by a host type while attaching a constant, predicate, or rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The type descriptor was frozen and no longer accepts definitions.
    #[error("type `{type_name}` is frozen and cannot be extended")]
    Frozen { type_name: String },
}

/// Errors produced while loading enum field declarations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid declaration document: {0}")]
    Toml(#[from] toml::de::Error),

    /// A declaration lists no permitted values.
    #[error("enum field `{field}` declares no values")]
    EmptyValues { field: String },

    /// A declaration has a blank field name.
    #[error("enum field declaration is missing a name")]
    EmptyName,

    /// The host rejected a declaration while it was being applied.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Collection of validation issues found on a record.
#[derive(Debug, Error)]
#[error("validation errors: {issues:?}")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Messages reported for `field`, in rule order.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.issues
            .iter()
            .filter(move |issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }
}

/// Detailed validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
