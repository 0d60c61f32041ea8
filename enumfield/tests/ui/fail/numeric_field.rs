//! Compile-fail test: enum_field on a numeric field.

use enumfield::EnumFields;

#[derive(EnumFields)]
struct Device {
    #[enum_field(values = ["1", "2"])]
    level: u8,
}

fn main() {}
