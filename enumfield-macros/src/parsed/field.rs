use syn::{Error, Expr, ExprArray, Field, Ident, LitBool, LitStr, Result, Type, spanned::Spanned};

use crate::naming::field_name;

/// A struct field annotated with `#[enum_field(...)]`.
pub(crate) struct ParsedEnumField {
    pub(crate) ident: Ident,
    pub(crate) name: String,
    pub(crate) values: Vec<LitStr>,
    pub(crate) message: Option<LitStr>,
    pub(crate) allow_blank: bool,
    pub(crate) allow_nil: bool,
}

impl ParsedEnumField {
    /// Returns `None` for fields without an `enum_field` attribute.
    pub(crate) fn from_field(field: &Field) -> Result<Option<Self>> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "EnumFields requires named fields"))?;

        let mut attrs = field.attrs.iter().filter(|attr| attr.path().is_ident("enum_field"));
        let Some(attr) = attrs.next() else {
            return Ok(None);
        };
        if let Some(duplicate) = attrs.next() {
            return Err(Error::new(duplicate.span(), "duplicate #[enum_field] attribute"));
        }

        ensure_string_like(&field.ty)?;

        let mut values: Option<Vec<LitStr>> = None;
        let mut message = None;
        let mut allow_blank = false;
        let mut allow_nil = false;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("values") {
                let array: ExprArray = meta.value()?.parse()?;
                let mut parsed = Vec::with_capacity(array.elems.len());
                for expr in array.elems {
                    match expr {
                        Expr::Lit(expr_lit) => match expr_lit.lit {
                            syn::Lit::Str(lit) => parsed.push(lit),
                            other => return Err(Error::new(other.span(), "values expects string literals")),
                        },
                        other => return Err(Error::new(other.span(), "values expects string literals")),
                    }
                }
                values = Some(parsed);
            } else if meta.path.is_ident("message") {
                message = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.path.is_ident("allow_blank") {
                allow_blank = parse_flag(&meta)?;
            } else if meta.path.is_ident("allow_nil") {
                allow_nil = parse_flag(&meta)?;
            } else {
                let option = meta
                    .path
                    .get_ident()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "<path>".to_string());
                return Err(meta.error(format!(
                    "unknown enum_field option `{option}`, expected `values`, `message`, `allow_blank` or `allow_nil`"
                )));
            }
            Ok(())
        })?;

        let values = values.ok_or_else(|| Error::new(attr.path().span(), "enum_field requires `values = [...]`"))?;
        if values.is_empty() {
            return Err(Error::new(attr.path().span(), "enum_field requires at least one value"));
        }

        Ok(Some(Self {
            name: field_name(&ident),
            ident,
            values,
            message,
            allow_blank,
            allow_nil,
        }))
    }
}

fn parse_flag(meta: &syn::meta::ParseNestedMeta<'_>) -> Result<bool> {
    if meta.input.peek(syn::Token![=]) {
        let lit: LitBool = meta.value()?.parse()?;
        Ok(lit.value)
    } else {
        Ok(true)
    }
}

/// Rejects field types that can never hold a string. Anything else must implement
/// `enumfield::FieldValue`, which the compiler checks on the generated code.
fn ensure_string_like(ty: &Type) -> Result<()> {
    let inner = unwrap_option(ty).unwrap_or(ty);
    match last_ident_str(inner) {
        Some(ident) if is_non_string_primitive(&ident) => Err(Error::new(
            ty.span(),
            format!("enum_field only supported for string fields, found `{ident}`"),
        )),
        _ => Ok(()),
    }
}

fn unwrap_option(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    match &segment.arguments {
        syn::PathArguments::AngleBracketed(args) => args.args.first().and_then(|arg| match arg {
            syn::GenericArgument::Type(inner) => Some(inner),
            _ => None,
        }),
        _ => None,
    }
}

fn last_ident_str(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) => path.path.segments.last().map(|seg| seg.ident.to_string()),
        _ => None,
    }
}

fn is_non_string_primitive(ident: &str) -> bool {
    matches!(
        ident,
        "i8" | "i16"
            | "i32"
            | "i64"
            | "i128"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "u128"
            | "f32"
            | "f64"
            | "isize"
            | "usize"
            | "bool"
            | "char"
    )
}
