use crate::errors::ValidationIssue;
use crate::types::InclusionRule;

pub const INCLUSION_CODE: &str = "validation.inclusion";

/// Returns `true` for absent, empty, or whitespace-only values.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|value| value.trim().is_empty())
}

/// Checks `value` against an inclusion rule, returning the issue to report on failure.
pub fn check_inclusion(rule: &InclusionRule, value: Option<&str>) -> Option<ValidationIssue> {
    if value.is_none() && (rule.allow_nil || rule.allow_blank) {
        return None;
    }
    if rule.allow_blank && is_blank(value) {
        return None;
    }
    match value {
        Some(candidate) if rule.allowed.iter().any(|allowed| allowed == candidate) => None,
        _ => Some(ValidationIssue::new(&rule.field, INCLUSION_CODE, &rule.message)),
    }
}
