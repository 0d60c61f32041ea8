//! Compile-fail test: enum_field on a bool field.

use enumfield::EnumFields;

#[derive(EnumFields)]
struct Device {
    #[enum_field(values = ["true"])]
    enabled: bool,
}

fn main() {}
