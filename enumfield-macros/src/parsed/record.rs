use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, Generics, Ident, LitStr, Result, Visibility, spanned::Spanned};

use super::ParsedEnumField;
use crate::naming::{constant_name, predicate_name};

pub(crate) struct ParsedRecord {
    name: Ident,
    vis: Visibility,
    generics: Generics,
    fields: Vec<ParsedEnumField>,
}

/// A predicate method to emit, after collision resolution.
struct PredicateSpec<'a> {
    method: Ident,
    field: &'a ParsedEnumField,
    value: &'a LitStr,
}

impl ParsedRecord {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        if input.generics.type_params().next().is_some() || input.generics.const_params().next().is_some() {
            return Err(Error::new(
                input.generics.span(),
                "EnumFields cannot be derived for structs with type or const parameters",
            ));
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let mut parsed = Vec::new();
                    for field in &named.named {
                        if let Some(enum_field) = ParsedEnumField::from_field(field)? {
                            parsed.push(enum_field);
                        }
                    }
                    parsed
                }
                _ => return Err(Error::new(input.ident.span(), "EnumFields requires named fields")),
            },
            _ => return Err(Error::new(input.ident.span(), "EnumFields can only be derived for structs")),
        };

        if fields.is_empty() {
            return Err(Error::new(
                input.ident.span(),
                "EnumFields requires at least one field annotated with #[enum_field(values = [...])]",
            ));
        }

        Ok(Self {
            name: input.ident.clone(),
            vis: input.vis.clone(),
            generics: input.generics.clone(),
            fields,
        })
    }

    /// Constants to emit: the first field claiming a constant name keeps it.
    fn constants(&self) -> Vec<(Ident, &ParsedEnumField)> {
        let mut seen: Vec<String> = Vec::new();
        let mut constants = Vec::new();
        for field in &self.fields {
            let name = constant_name(&field.name);
            if seen.contains(&name) {
                continue;
            }
            constants.push((Ident::new(&name, field.ident.span()), field));
            seen.push(name);
        }
        constants
    }

    /// Predicates to emit: a later value whose name collides replaces the earlier one,
    /// values that normalize to nothing are dropped.
    fn predicates(&self) -> Vec<PredicateSpec<'_>> {
        let mut predicates: Vec<PredicateSpec<'_>> = Vec::new();
        for field in &self.fields {
            for value in &field.values {
                let name = predicate_name(&value.value());
                if name.is_empty() {
                    continue;
                }
                let method = format_ident!("is_{}", name, span = value.span());
                predicates.retain(|existing| existing.method != method);
                predicates.push(PredicateSpec { method, field, value });
            }
        }
        predicates
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let vis = &self.vis;
        let type_name_lit = LitStr::new(&name.to_string(), Span::call_site());
        let declared_static = format_ident!("__ENUMFIELD_DECLARED_{}", name.to_string().to_uppercase());
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        // Registration needs a concrete type, so every lifetime becomes 'static there.
        let static_lifetimes: Vec<TokenStream2> = self.generics.lifetimes().map(|_| quote! { 'static }).collect();
        let registered_ty = if static_lifetimes.is_empty() {
            quote! { #name }
        } else {
            quote! { #name<#(#static_lifetimes),*> }
        };

        let constant_items = self.constants().into_iter().map(|(constant, field)| {
            let values = &field.values;
            let doc = format!("Permitted values of `{}`.", field.name);
            quote! {
                #[doc = #doc]
                #vis const #constant: &'static [&'static str] = &[#(#values),*];
            }
        });

        let predicate_items = self.predicates().into_iter().map(|spec| {
            let method = &spec.method;
            let ident = &spec.field.ident;
            let value = spec.value;
            let doc = format!("Returns `true` when `{}` is exactly {:?}.", spec.field.name, value.value());
            quote! {
                #[doc = #doc]
                #vis fn #method(&self) -> bool {
                    ::enumfield::FieldValue::as_field_str(&self.#ident) == ::std::option::Option::Some(#value)
                }
            }
        });

        let read_arms = self.fields.iter().map(|field| {
            let ident = &field.ident;
            let lit = LitStr::new(&field.name, Span::call_site());
            quote! { #lit => ::enumfield::FieldValue::as_field_str(&self.#ident), }
        });

        let field_name_lits: Vec<LitStr> = self
            .fields
            .iter()
            .map(|field| LitStr::new(&field.name, Span::call_site()))
            .collect();

        let declarations = self.fields.iter().map(|field| {
            let lit = LitStr::new(&field.name, Span::call_site());
            let values = &field.values;
            let message = match &field.message {
                Some(message) => quote! { ::std::option::Option::Some(::std::string::String::from(#message)) },
                None => quote! { ::std::option::Option::None },
            };
            let allow_blank = field.allow_blank;
            let allow_nil = field.allow_nil;
            quote! {
                ::enumfield::FieldDeclaration {
                    field: #lit,
                    values: &[#(#values),*],
                    options: ::enumfield::EnumFieldOptions {
                        message: #message,
                        allow_blank: #allow_blank,
                        allow_nil: #allow_nil,
                    },
                }
            }
        });

        quote! {
            #[allow(non_upper_case_globals)]
            static #declared_static: ::std::sync::OnceLock<::enumfield::DeclaredType> = ::std::sync::OnceLock::new();

            impl #impl_generics #name #ty_generics #where_clause {
                #(#constant_items)*

                #(#predicate_items)*

                fn __enumfield_declared() -> &'static ::enumfield::DeclaredType {
                    #declared_static.get_or_init(|| {
                        ::enumfield::declare_type(
                            ::enumfield::TypeDescriptor::new(<Self as ::enumfield::EnumFields>::TYPE_PATH),
                            &[#(#declarations),*],
                        )
                        .expect("fresh descriptor accepts enum fields")
                    })
                }
            }

            impl #impl_generics ::enumfield::Record for #name #ty_generics #where_clause {
                fn read_field(&self, field: &str) -> ::std::option::Option<&str> {
                    match field {
                        #(#read_arms)*
                        _ => ::std::option::Option::None,
                    }
                }
            }

            impl #impl_generics ::enumfield::EnumFields for #name #ty_generics #where_clause {
                const TYPE_NAME: &'static str = #type_name_lit;
                const TYPE_PATH: &'static str = ::std::concat!(::std::module_path!(), "::", #type_name_lit);

                fn type_descriptor() -> &'static ::enumfield::TypeDescriptor {
                    &Self::__enumfield_declared().descriptor
                }

                fn enum_field_definitions() -> &'static [::enumfield::FieldEnumDefinition] {
                    &Self::__enumfield_declared().definitions
                }
            }

            ::enumfield::inventory::submit! {
                ::enumfield::RecordRegistration {
                    type_name: #type_name_lit,
                    type_path: ::std::concat!(::std::module_path!(), "::", #type_name_lit),
                    fields: &[#(#field_name_lits),*],
                    descriptor_fn: <#registered_ty as ::enumfield::EnumFields>::type_descriptor,
                }
            }
        }
    }
}
