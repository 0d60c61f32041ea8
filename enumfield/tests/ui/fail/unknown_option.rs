//! Compile-fail test: misspelled enum_field option.

use enumfield::EnumFields;

#[derive(EnumFields)]
struct Computer {
    #[enum_field(values = ["on"], allow_blnak)]
    status: String,
}

fn main() {}
