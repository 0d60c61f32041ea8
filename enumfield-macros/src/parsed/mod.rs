mod field;
mod record;

pub(crate) use field::ParsedEnumField;
pub(crate) use record::ParsedRecord;
