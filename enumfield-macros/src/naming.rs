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

/// Simple pluralization rules
pub(crate) fn pluralize(word: &str) -> String {
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

pub(crate) fn constant_name(field: &str) -> String {
    pluralize(field).to_ascii_uppercase()
}

/// Must agree with `enumfield::naming::predicate_name`.
pub(crate) fn predicate_name(value: &str) -> String {
    let lowered = value.to_lowercase();
    let separated = SEPARATOR_RUN.replace_all(&lowered, "_");
    let stripped = separated.trim_end_matches(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
    NON_WORD_RUN.replace_all(stripped, "_").into_owned()
}

/// Strips the raw-identifier prefix so `r#type` names the field `type`.
pub(crate) fn field_name(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
}
