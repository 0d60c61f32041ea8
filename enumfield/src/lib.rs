//! Enumerated-value string fields for record types.
//!
//! Declaring an enum field gives a record type three things: a constant holding the
//! permitted values, one boolean predicate per value, and an inclusion rule on the
//! field. Types opt in either at compile time with `#[derive(EnumFields)]`:
//!
//! ```
//! use enumfield::EnumFields;
//!
//! #[derive(EnumFields)]
//! struct Computer {
//!     #[enum_field(values = ["on", "off", "standby", "out of this world"], message = "incorrect status")]
//!     status: String,
//! }
//!
//! let computer = Computer { status: "on".to_string() };
//! assert_eq!(Computer::STATUSES, &["on", "off", "standby", "out of this world"]);
//! assert!(computer.is_on());
//! assert!(!computer.is_out_of_this_world());
//! assert!(computer.validate_enum_fields().is_ok());
//! ```
//!
//! or at runtime on a [`TypeDescriptor`] through [`register_enum_field`].

extern crate self as enumfield;

pub mod config;
pub mod descriptor;
pub mod errors;
pub mod naming;
pub mod options;
pub mod record;
pub mod registrar;
pub mod registry;
pub mod types;
pub mod validators;

pub use config::{EnumFieldDeclaration, EnumFieldDeclarations};
pub use descriptor::{EnumHost, Predicate, TypeDescriptor};
pub use enumfield_macros::EnumFields;
pub use errors::*;
pub use options::EnumFieldOptions;
pub use record::{FieldValue, Record};
pub use registrar::{DeclaredType, FieldDeclaration, declare_type, register_enum_field};
pub use registry::RecordRegistration;
pub use types::{FieldEnumDefinition, InclusionRule};

// Re-export inventory for auto-registration in the derive macro
pub use inventory;

/// Implemented by `#[derive(EnumFields)]` for record types with enum fields.
pub trait EnumFields: Record + Sized {
    /// Bare struct name, e.g. `Computer`.
    const TYPE_NAME: &'static str;

    /// Module-qualified name, e.g. `inventory::Computer`. Descriptors are named and
    /// registered by it.
    const TYPE_PATH: &'static str;

    /// Descriptor built once from the type's declarations and added to the global registry.
    fn type_descriptor() -> &'static TypeDescriptor;

    /// One definition per annotated field, in declaration order.
    fn enum_field_definitions() -> &'static [FieldEnumDefinition];

    fn ensure_registered() {
        let _ = Self::type_descriptor();
    }

    /// Checks every enum field against its inclusion rule.
    fn validate_enum_fields(&self) -> ValidationResult<()> {
        Self::type_descriptor().validate(self)
    }

    /// Calls a predicate by its key (e.g. `"on?"`), `None` when the type has no such predicate.
    fn query(&self, predicate: &str) -> Option<bool> {
        Self::type_descriptor().call_predicate(predicate, self)
    }
}
