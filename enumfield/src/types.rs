use serde::{Deserialize, Serialize};

/// Record of what a single enum field registration produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEnumDefinition {
    pub field_name: String,
    /// Permitted values in registration order.
    pub permitted_values: Vec<String>,
    /// Name of the constant holding `permitted_values`, e.g. `STATUSES`.
    pub constant_name: String,
    /// Predicate keys in value order, e.g. `["on?", "off?"]`. Values whose name
    /// normalizes to nothing are absent.
    pub predicate_names: Vec<String>,
    pub message: String,
    pub allow_blank: bool,
    pub allow_nil: bool,
}

impl FieldEnumDefinition {
    pub fn permits(&self, value: &str) -> bool {
        self.permitted_values.iter().any(|allowed| allowed == value)
    }

    /// The inclusion rule installed for this definition.
    pub fn inclusion_rule(&self) -> InclusionRule {
        InclusionRule {
            field: self.field_name.clone(),
            allowed: self.permitted_values.clone(),
            message: self.message.clone(),
            allow_blank: self.allow_blank,
            allow_nil: self.allow_nil,
        }
    }
}

/// Declarative "value must be one of" constraint attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionRule {
    pub field: String,
    pub allowed: Vec<String>,
    pub message: String,
    pub allow_blank: bool,
    pub allow_nil: bool,
}
