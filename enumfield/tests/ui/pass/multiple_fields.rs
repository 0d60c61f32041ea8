//! Compile-pass test: several enum fields on one record share the predicate namespace.

use enumfield::EnumFields;

#[derive(EnumFields)]
struct Ticket {
    #[enum_field(values = ["open", "closed"])]
    state: String,
    #[enum_field(values = ["low", "high"], allow_blank)]
    priority: String,
    #[enum_field(values = ["bug", "feature request"])]
    category: Option<String>,
}

fn main() {
    let ticket = Ticket {
        state: "open".to_string(),
        priority: String::new(),
        category: Some("feature request".to_string()),
    };
    assert!(ticket.is_open());
    assert!(!ticket.is_high());
    assert!(ticket.is_feature_request());
    assert_eq!(Ticket::CATEGORIES, &["bug", "feature request"]);
    assert_eq!(Ticket::PRIORITIES, &["low", "high"]);
    assert!(ticket.validate_enum_fields().is_ok());
}
