//! Compile-pass test: raw identifier fields and borrowed string types.

use std::borrow::Cow;

use enumfield::{EnumFields, Record};

#[derive(EnumFields)]
struct Shape<'a> {
    #[enum_field(values = ["circle", "square"])]
    r#type: Cow<'a, str>,
}

fn main() {
    let shape = Shape {
        r#type: Cow::Borrowed("circle"),
    };
    assert!(shape.is_circle());
    assert_eq!(shape.read_field("type"), Some("circle"));
    assert_eq!(Shape::TYPES, &["circle", "square"]);
}
