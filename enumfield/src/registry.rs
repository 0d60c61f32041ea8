//! Process-wide table of record type descriptors.
//!
//! Types deriving `EnumFields` register themselves here the first time their
//! descriptor is built, and submit a [`RecordRegistration`] to the inventory so
//! they can be discovered without being touched first.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::descriptor::TypeDescriptor;

static REGISTRY: OnceLock<RwLock<HashMap<String, TypeDescriptor>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, TypeDescriptor>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Installs `descriptor` unless a type of the same name is already registered.
///
/// Derived types are named by their module path, so two structs called `Item` in
/// different modules get separate entries.
///
/// Returns `false` when an existing entry was kept.
pub fn register_type(descriptor: &TypeDescriptor) -> bool {
    let mut types = registry().write().unwrap_or_else(PoisonError::into_inner);
    if types.contains_key(descriptor.name()) {
        return false;
    }
    types.insert(descriptor.name().to_string(), descriptor.clone());
    true
}

pub fn get_type(name: &str) -> Option<TypeDescriptor> {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
}

/// Runs `f` against the registered descriptor for `name`, creating an empty one first
/// if needed.
///
/// ```
/// use enumfield::{EnumFieldOptions, registry, register_enum_field};
///
/// registry::with_type("DocTestComputer", |computer| {
///     register_enum_field(computer, "status", ["on", "off"], EnumFieldOptions::default())
/// })?;
/// let computer = registry::get_type("DocTestComputer").expect("registered");
/// assert!(computer.responds_to("off?"));
/// # Ok::<(), enumfield::HostError>(())
/// ```
pub fn with_type<R>(name: &str, f: impl FnOnce(&mut TypeDescriptor) -> R) -> R {
    let mut types = registry().write().unwrap_or_else(PoisonError::into_inner);
    let descriptor = types
        .entry(name.to_string())
        .or_insert_with(|| TypeDescriptor::new(name));
    f(descriptor)
}

/// Names of all registered types, sorted.
pub fn registered_type_names() -> Vec<String> {
    let mut names: Vec<String> = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .cloned()
        .collect();
    names.sort();
    names
}

/// Metadata submitted to the inventory by `#[derive(EnumFields)]`.
pub struct RecordRegistration {
    /// The name of the record type (e.g. "Computer")
    pub type_name: &'static str,
    /// Module-qualified name, the registry key (e.g. "shop::Computer")
    pub type_path: &'static str,
    /// Enum field names declared on the type
    pub fields: &'static [&'static str],
    /// Function returning the type's descriptor, registering it on first call
    pub descriptor_fn: fn() -> &'static TypeDescriptor,
}

inventory::collect!(RecordRegistration);

/// All record types declared with `#[derive(EnumFields)]` in the linked binary.
pub fn registered_record_types() -> impl Iterator<Item = &'static RecordRegistration> {
    inventory::iter::<RecordRegistration>()
}

pub fn get_record_type(type_path: &str) -> Option<&'static RecordRegistration> {
    registered_record_types().find(|registration| registration.type_path == type_path)
}

/// Record types whose bare name is `type_name`, in any module.
pub fn record_types_named(type_name: &str) -> impl Iterator<Item = &'static RecordRegistration> + '_ {
    registered_record_types().filter(move |registration| registration.type_name == type_name)
}

/// Registers every inventory-submitted record type in the global table.
pub fn register_all() -> usize {
    registered_record_types()
        .map(|registration| (registration.descriptor_fn)())
        .count()
}
