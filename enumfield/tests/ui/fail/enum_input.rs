//! Compile-fail test: EnumFields is only derived for structs.

use enumfield::EnumFields;

#[derive(EnumFields)]
enum Status {
    On,
    Off,
}

fn main() {}
