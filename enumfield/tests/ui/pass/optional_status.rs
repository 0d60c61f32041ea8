//! Compile-pass test: optional field with allow_nil and a custom message.

use enumfield::EnumFields;

#[derive(EnumFields)]
pub struct Computer {
    #[enum_field(values = ["on", "off", "out of this world"], message = "incorrect status", allow_nil)]
    pub status: Option<String>,
}

fn main() {
    let idle = Computer { status: None };
    assert!(!idle.is_on());
    assert!(idle.validate_enum_fields().is_ok());

    let running = Computer {
        status: Some("out of this world".to_string()),
    };
    assert!(running.is_out_of_this_world());
    assert_eq!(Computer::STATUSES.len(), 3);
}
