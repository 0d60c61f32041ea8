//! Naming rules that turn field names and enum values into identifiers.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s-]+").expect("static pattern"));
static NON_WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_]+").expect("static pattern"));

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("ox", "oxen"),
    ("quiz", "quizzes"),
];

/// Simple pluralization rules.
///
/// Covers the regular English suffixes and a handful of irregular words, which also
/// apply to the last word of a snake_case name (`sales_person` gives `sales_people`).
/// Anything else gets the regular rules, so this is not a full inflector.
pub fn pluralize(word: &str) -> String {
    for (singular, plural) in IRREGULAR_PLURALS {
        if let Some(stem) = word.strip_suffix(singular)
            && (stem.is_empty() || stem.ends_with('_'))
        {
            return format!("{stem}{plural}");
        }
    }
    if word.ends_with('s') || word.ends_with('x') || word.ends_with('z') || word.ends_with("ch") || word.ends_with("sh")
    {
        format!("{word}es")
    } else if word.ends_with('y')
        && !word.ends_with("ay")
        && !word.ends_with("ey")
        && !word.ends_with("oy")
        && !word.ends_with("uy")
    {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{word}s")
    }
}

/// Name of the constant holding the permitted values of `field`.
///
/// `status` becomes `STATUSES`, `payment_category` becomes `PAYMENT_CATEGORIES`.
pub fn constant_name(field: &str) -> String {
    pluralize(field).to_ascii_uppercase()
}

/// Predicate name (without the `?` suffix) derived from an enum value.
///
/// The value is lower-cased and runs of whitespace or hyphens become a single
/// underscore. Trailing characters outside `[a-z0-9_]` are then stripped and any
/// remaining run of them becomes an underscore. Underscores already present are kept,
/// so `_on` and `on` name different predicates. Returns an empty string when nothing
/// usable remains.
pub fn predicate_name(value: &str) -> String {
    let lowered = value.to_lowercase();
    let separated = SEPARATOR_RUN.replace_all(&lowered, "_");
    let stripped = separated.trim_end_matches(|c: char| !is_word_char(c));
    NON_WORD_RUN.replace_all(stripped, "_").into_owned()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Full predicate key as stored in a method table, e.g. `choice_one?`.
pub fn predicate_key(value: &str) -> Option<String> {
    let name = predicate_name(value);
    if name.is_empty() { None } else { Some(format!("{name}?")) }
}
