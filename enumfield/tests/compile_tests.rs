//! Compile tests for `#[derive(EnumFields)]`.
//!
//! Passing cases cover optional fields with `allow_nil`, several enum fields on one
//! record, and raw identifiers with `Cow` backed fields. Failing cases pin the
//! diagnostics for:
//! - missing or empty `values`
//! - non-literal values and unknown options
//! - tuple structs, enums, and records without an enum field
//! - numeric and bool field types

#[test]
fn compile_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
    t.compile_fail("tests/ui/fail/*.rs");
}
