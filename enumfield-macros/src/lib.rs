use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod naming;
mod parsed;

use parsed::ParsedRecord;

/// Derives enum field support for a struct with named fields.
///
/// Each field annotated with `#[enum_field(values = [...])]` gets:
/// - a `pub const` named after the pluralized, upper-cased field (`status` gives `STATUSES`)
/// - one `is_<value>(&self) -> bool` predicate per value
/// - an inclusion rule checked by `EnumFields::validate_enum_fields`
///
/// ```text
/// #[derive(EnumFields)]
/// pub struct Computer {
///     #[enum_field(values = ["on", "off", "out of this world"], message = "incorrect status", allow_nil)]
///     pub status: Option<String>,
/// }
///
/// // Generated:
/// // - Computer::STATUSES == &["on", "off", "out of this world"]
/// // - computer.is_on(), computer.is_off(), computer.is_out_of_this_world()
/// // - impl Record, impl EnumFields, inventory registration
/// ```
#[proc_macro_derive(EnumFields, attributes(enum_field))]
pub fn derive_enum_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedRecord::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
