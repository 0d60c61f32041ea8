//! Compile-fail test: tuple structs have no named fields to annotate.

use enumfield::EnumFields;

#[derive(EnumFields)]
struct Status(String);

fn main() {}
