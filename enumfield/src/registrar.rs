use std::sync::Arc;

use log::{debug, error, trace};

use crate::descriptor::{EnumHost, Predicate, TypeDescriptor};
use crate::errors::HostError;
use crate::naming::{constant_name, predicate_key};
use crate::options::EnumFieldOptions;
use crate::record::Record;
use crate::registry;
use crate::types::{FieldEnumDefinition, InclusionRule};

/// Attaches enumerated-value semantics to `field` on `host`.
///
/// This does three things:
///
/// - stores `values` under the pluralized, upper-cased field name (`status` gives
///   `STATUSES`) unless a constant of that name already exists,
/// - defines one predicate per value (`"out of this world"` gives
///   `out_of_this_world?`) that is true when the field holds exactly that value,
/// - installs an inclusion rule reporting `invalid {field}` or the custom message.
///
/// ```
/// use enumfield::{EnumFieldOptions, TypeDescriptor, register_enum_field};
/// use std::collections::HashMap;
///
/// let mut computer = TypeDescriptor::new("Computer");
/// register_enum_field(&mut computer, "status", ["on", "off", "out of this world"], EnumFieldOptions::default())?;
///
/// let instance = HashMap::from([("status".to_string(), "on".to_string())]);
/// assert_eq!(computer.constant("STATUSES").map(<[String]>::len), Some(3));
/// assert_eq!(computer.call_predicate("on?", &instance), Some(true));
/// assert_eq!(computer.call_predicate("out_of_this_world?", &instance), Some(false));
/// # Ok::<(), enumfield::HostError>(())
/// ```
///
/// Two values that normalize to the same predicate name keep the later one.
pub fn register_enum_field<H, I, S>(
    host: &mut H,
    field: &str,
    values: I,
    options: EnumFieldOptions,
) -> Result<FieldEnumDefinition, HostError>
where
    H: EnumHost + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let permitted_values: Vec<String> = values.into_iter().map(Into::into).collect();
    let constant_name = constant_name(field);

    if host.const_defined(&constant_name) {
        debug!("constant {constant_name} already defined, keeping existing values");
    } else {
        host.const_set(&constant_name, permitted_values.clone())?;
    }

    let mut predicate_names: Vec<String> = Vec::with_capacity(permitted_values.len());
    for value in &permitted_values {
        let Some(key) = predicate_key(value) else {
            debug!("value {value:?} of {field} yields no predicate name, skipping");
            continue;
        };
        if predicate_names.contains(&key) {
            debug!("predicate {key} redefined by value {value:?} of {field}");
            predicate_names.retain(|existing| existing != &key);
        }
        trace!("defining {key} for {field}");
        host.define_predicate(key.clone(), value_predicate(field, value))?;
        predicate_names.push(key);
    }

    let message = options.message_for(field);
    host.validates_inclusion_of(InclusionRule {
        field: field.to_string(),
        allowed: permitted_values.clone(),
        message: message.clone(),
        allow_blank: options.allow_blank,
        allow_nil: options.allow_nil,
    })?;

    Ok(FieldEnumDefinition {
        field_name: field.to_string(),
        permitted_values,
        constant_name,
        predicate_names,
        message,
        allow_blank: options.allow_blank,
        allow_nil: options.allow_nil,
    })
}

/// One annotated field of a derived record type.
#[derive(Debug, Clone)]
pub struct FieldDeclaration<'a> {
    pub field: &'a str,
    pub values: &'a [&'a str],
    pub options: EnumFieldOptions,
}

/// Descriptor and per-field definitions of a type declared with `#[derive(EnumFields)]`.
#[derive(Debug)]
pub struct DeclaredType {
    pub descriptor: TypeDescriptor,
    pub definitions: Vec<FieldEnumDefinition>,
}

/// Registers every field declaration on `descriptor` and adds it to the global
/// registry under its name.
///
/// Nothing is registered when a declaration is rejected, so the registry never holds a
/// partially declared type.
pub fn declare_type(mut descriptor: TypeDescriptor, fields: &[FieldDeclaration<'_>]) -> Result<DeclaredType, HostError> {
    let mut definitions = Vec::with_capacity(fields.len());
    for declaration in fields {
        let definition = register_enum_field(
            &mut descriptor,
            declaration.field,
            declaration.values.iter().copied(),
            declaration.options.clone(),
        )
        .inspect_err(|err| error!("failed to declare {}.{}: {err}", descriptor.name(), declaration.field))?;
        definitions.push(definition);
    }
    if !registry::register_type(&descriptor) {
        debug!("type {} already registered, keeping existing descriptor", descriptor.name());
    }
    Ok(DeclaredType {
        descriptor,
        definitions,
    })
}

fn value_predicate(field: &str, value: &str) -> Predicate {
    let field = field.to_string();
    let value = value.to_string();
    Arc::new(move |record: &dyn Record| record.read_field(&field) == Some(value.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn instance(field: &str, value: &str) -> HashMap<String, String> {
        HashMap::from([(field.to_string(), value.to_string())])
    }

    #[test]
    fn definition_reports_derived_names() {
        let mut host = TypeDescriptor::new("Person");
        let definition =
            register_enum_field(&mut host, "gender", ["male", "female"], EnumFieldOptions::default()).expect("open");

        assert_eq!(definition.constant_name, "GENDERS");
        assert_eq!(definition.predicate_names, vec!["male?", "female?"]);
        assert_eq!(definition.message, "invalid gender");
        assert!(definition.permits("male"));
        assert!(!definition.permits("Male"));
        assert_eq!(host.inclusion_rules(), &[definition.inclusion_rule()]);
    }

    #[test]
    fn colliding_values_keep_last_predicate() {
        let mut host = TypeDescriptor::new("Widget");
        let definition =
            register_enum_field(&mut host, "kind", ["Big One", "big-one"], EnumFieldOptions::default()).expect("open");

        assert_eq!(definition.predicate_names, vec!["big_one?"]);
        assert_eq!(host.call_predicate("big_one?", &instance("kind", "big-one")), Some(true));
        assert_eq!(host.call_predicate("big_one?", &instance("kind", "Big One")), Some(false));
    }

    #[test]
    fn edge_underscores_keep_values_apart() {
        let mut host = TypeDescriptor::new("Widget");
        let definition =
            register_enum_field(&mut host, "kind", ["on", "_on", "draft_"], EnumFieldOptions::default()).expect("open");

        assert_eq!(definition.predicate_names, vec!["on?", "_on?", "draft_?"]);
        assert_eq!(host.call_predicate("on?", &instance("kind", "on")), Some(true));
        assert_eq!(host.call_predicate("_on?", &instance("kind", "on")), Some(false));
        assert_eq!(host.call_predicate("_on?", &instance("kind", "_on")), Some(true));
        assert_eq!(host.call_predicate("draft_?", &instance("kind", "draft_")), Some(true));
    }

    #[test]
    fn unnameable_values_still_validate() {
        let mut host = TypeDescriptor::new("Widget");
        let definition =
            register_enum_field(&mut host, "mark", ["!!!", "ok"], EnumFieldOptions::default()).expect("open");

        assert_eq!(definition.predicate_names, vec!["ok?"]);
        assert!(host.validate(&instance("mark", "!!!")).is_ok());
    }

    #[test]
    fn declare_type_registers_globally() {
        let declared = declare_type(
            TypeDescriptor::new("RegistrarDeclaredPerson"),
            &[FieldDeclaration {
                field: "gender",
                values: &["male", "female"],
                options: EnumFieldOptions::default(),
            }],
        )
        .expect("fresh descriptor");
        assert_eq!(declared.definitions.len(), 1);
        assert!(declared.descriptor.responds_to("female?"));
        let registered = registry::get_type("RegistrarDeclaredPerson").expect("registered");
        assert!(registered.const_defined("GENDERS"));
    }

    #[test]
    fn rejected_declaration_is_not_registered() {
        let mut sealed = TypeDescriptor::new("RegistrarSealedPerson");
        sealed.freeze();
        let err = declare_type(
            sealed,
            &[FieldDeclaration {
                field: "gender",
                values: &["male", "female"],
                options: EnumFieldOptions::default(),
            }],
        )
        .expect_err("frozen descriptor");
        assert!(matches!(err, HostError::Frozen { .. }));
        assert!(registry::get_type("RegistrarSealedPerson").is_none());
    }

    #[test]
    fn frozen_host_error_propagates() {
        let mut host = TypeDescriptor::new("Sealed");
        host.freeze();
        let err = register_enum_field(&mut host, "status", ["on"], EnumFieldOptions::default()).expect_err("frozen");
        assert!(matches!(err, HostError::Frozen { .. }));
    }
}
