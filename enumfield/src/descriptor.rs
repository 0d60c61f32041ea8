//! Runtime description of a record type: its constant table, predicate table and
//! inclusion rules.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};

use crate::errors::{HostError, ValidationError, ValidationResult};
use crate::record::Record;
use crate::types::InclusionRule;
use crate::validators::check_inclusion;

/// Zero-argument query bound to a record instance.
pub type Predicate = Arc<dyn Fn(&dyn Record) -> bool + Send + Sync>;

/// Primitives a type must offer to receive enum fields.
pub trait EnumHost {
    fn const_defined(&self, name: &str) -> bool;

    fn const_set(&mut self, name: &str, values: Vec<String>) -> Result<(), HostError>;

    /// Installs `predicate` under `name`, replacing any previous definition.
    fn define_predicate(&mut self, name: String, predicate: Predicate) -> Result<(), HostError>;

    fn validates_inclusion_of(&mut self, rule: InclusionRule) -> Result<(), HostError>;
}

#[derive(Clone, Default)]
pub struct TypeDescriptor {
    name: String,
    constants: Vec<(String, Vec<String>)>,
    predicates: BTreeMap<String, Predicate>,
    rules: Vec<InclusionRule>,
    frozen: bool,
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("constants", &self.constants)
            .field("predicates", &self.predicates.keys().collect::<Vec<_>>())
            .field("rules", &self.rules)
            .field("frozen", &self.frozen)
            .finish()
    }
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values stored under constant `name`.
    pub fn constant(&self, name: &str) -> Option<&[String]> {
        self.constants
            .iter()
            .find(|(constant, _)| constant == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn constant_names(&self) -> impl Iterator<Item = &str> {
        self.constants.iter().map(|(name, _)| name.as_str())
    }

    pub fn responds_to(&self, predicate: &str) -> bool {
        self.predicates.contains_key(predicate)
    }

    /// Sorted predicate keys.
    pub fn predicate_names(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(String::as_str)
    }

    /// Runs predicate `name` against `record`; `None` when the type does not respond to it.
    pub fn call_predicate(&self, name: &str, record: &dyn Record) -> Option<bool> {
        self.predicates.get(name).map(|predicate| predicate(record))
    }

    pub fn inclusion_rules(&self) -> &[InclusionRule] {
        &self.rules
    }

    /// Checks every inclusion rule against `record`, collecting all issues.
    pub fn validate(&self, record: &dyn Record) -> ValidationResult<()> {
        let issues: Vec<_> = self
            .rules
            .iter()
            .filter_map(|rule| check_inclusion(rule, record.read_field(&rule.field)))
            .collect();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(issues))
        }
    }

    /// Stops accepting new constants, predicates, and rules.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// JSON summary of the constants, predicates, and rules defined on the type.
    pub fn to_json(&self) -> Value {
        let constants: serde_json::Map<String, Value> = self
            .constants
            .iter()
            .map(|(name, values)| (name.clone(), json!(values)))
            .collect();
        let predicates: Vec<&String> = self.predicates.keys().collect();
        json!({
            "name": self.name,
            "constants": constants,
            "predicates": predicates,
            "rules": self.rules,
        })
    }

    fn ensure_open(&self) -> Result<(), HostError> {
        if self.frozen {
            Err(HostError::Frozen {
                type_name: self.name.clone(),
            })
        } else {
            Ok(())
        }
    }
}

impl EnumHost for TypeDescriptor {
    fn const_defined(&self, name: &str) -> bool {
        self.constant(name).is_some()
    }

    fn const_set(&mut self, name: &str, values: Vec<String>) -> Result<(), HostError> {
        self.ensure_open()?;
        match self.constants.iter_mut().find(|(constant, _)| constant == name) {
            Some((_, existing)) => *existing = values,
            None => self.constants.push((name.to_string(), values)),
        }
        Ok(())
    }

    fn define_predicate(&mut self, name: String, predicate: Predicate) -> Result<(), HostError> {
        self.ensure_open()?;
        self.predicates.insert(name, predicate);
        Ok(())
    }

    fn validates_inclusion_of(&mut self, rule: InclusionRule) -> Result<(), HostError> {
        self.ensure_open()?;
        self.rules.push(rule);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(field: &str, value: &str) -> HashMap<String, String> {
        HashMap::from([(field.to_string(), value.to_string())])
    }

    #[test]
    fn predicates_are_called_by_name() {
        let mut descriptor = TypeDescriptor::new("Computer");
        descriptor
            .define_predicate(
                "on?".to_string(),
                Arc::new(|record: &dyn Record| record.read_field("status") == Some("on")),
            )
            .expect("open descriptor");

        assert!(descriptor.responds_to("on?"));
        assert_eq!(descriptor.call_predicate("on?", &record("status", "on")), Some(true));
        assert_eq!(descriptor.call_predicate("on?", &record("status", "off")), Some(false));
        assert_eq!(descriptor.call_predicate("off?", &record("status", "off")), None);
    }

    #[test]
    fn constants_keep_insertion_order() {
        let mut descriptor = TypeDescriptor::new("Computer");
        descriptor
            .const_set("STATUSES", vec!["on".to_string(), "off".to_string()])
            .expect("open descriptor");
        descriptor.const_set("GENDERS", vec![]).expect("open descriptor");

        assert!(descriptor.const_defined("STATUSES"));
        assert_eq!(descriptor.constant_names().collect::<Vec<_>>(), vec!["STATUSES", "GENDERS"]);
        assert_eq!(descriptor.constant("STATUSES"), Some(&["on".to_string(), "off".to_string()][..]));
    }

    #[test]
    fn frozen_descriptor_rejects_definitions() {
        let mut descriptor = TypeDescriptor::new("Sealed");
        descriptor.freeze();
        assert!(descriptor.is_frozen());

        let err = descriptor.const_set("STATUSES", vec![]).expect_err("frozen");
        assert_eq!(
            err,
            HostError::Frozen {
                type_name: "Sealed".to_string()
            }
        );
        assert!(descriptor.define_predicate("on?".to_string(), Arc::new(|_: &dyn Record| true)).is_err());
        assert!(descriptor.inclusion_rules().is_empty());
    }

    #[test]
    fn json_summary_lists_everything() {
        let mut descriptor = TypeDescriptor::new("Computer");
        descriptor.const_set("STATUSES", vec!["on".to_string()]).expect("open descriptor");
        descriptor
            .define_predicate("on?".to_string(), Arc::new(|_: &dyn Record| true))
            .expect("open descriptor");

        let summary = descriptor.to_json();
        assert_eq!(summary["name"], "Computer");
        assert_eq!(summary["constants"]["STATUSES"], json!(["on"]));
        assert_eq!(summary["predicates"], json!(["on?"]));
        assert_eq!(summary["rules"], json!([]));
    }
}
