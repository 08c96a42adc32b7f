//! Implementation of the `#[derive(Filterable)]` macro.
//!
//! This macro generates an implementation of the `Filterable` trait and
//! field name constants for type-safe query keys.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Ident, Result};

use super::attrs::{parse_filter_attrs, ElementKind, FilterKind};

/// Main implementation of the Filterable derive macro.
pub fn filterable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Filterable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Filterable can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut declarations: Vec<TokenStream> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let filter_attrs = parse_filter_attrs(&field.attrs)?;
        if filter_attrs.skip {
            continue;
        }
        let kind = match filter_attrs.kind {
            Some(kind) => kind,
            None => continue,
        };

        let query_name = filter_attrs
            .rename
            .unwrap_or_else(|| field_name.to_string());
        if query_name.is_empty() {
            return Err(Error::new(filter_attrs.span, "filter name must not be empty"));
        }
        if seen.contains(&query_name) {
            return Err(Error::new(
                filter_attrs.span,
                format!("duplicate filter field '{}'", query_name),
            ));
        }
        seen.push(query_name.clone());

        let const_name = format_ident!("{}", to_screaming_snake_case(&query_name));
        field_constants.push(quote! {
            /// Filterable field name.
            pub const #const_name: &'static str = #query_name;
        });

        let value_expr = value_expr(field_name, kind);
        field_matches.push(quote! {
            #query_name => #value_expr,
        });

        declarations.push(declaration_expr(&query_name, kind));
    }

    let declarations_body = if declarations.is_empty() {
        quote! { ::std::vec::Vec::new() }
    } else {
        quote! {
            let mut filters = ::std::vec::Vec::new();
            #(filters.extend(#declarations);)*
            filters
        }
    };

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::lorebook_filter::Filterable for #struct_name #ty_generics #where_clause {
            fn field_value(&self, field: &str) -> ::lorebook_filter::FieldValue<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::lorebook_filter::FieldValue::None,
                }
            }

            fn filter_declarations() -> ::std::vec::Vec<::lorebook_filter::FilterDeclaration> {
                #declarations_body
            }
        }
    };

    Ok(expanded)
}

/// Accessor expression for one field.
fn value_expr(field_name: &Ident, kind: FilterKind) -> TokenStream {
    match kind {
        FilterKind::Int => quote! {
            ::lorebook_filter::FieldValue::Int(::core::convert::Into::<i64>::into(self.#field_name))
        },
        FilterKind::Float => quote! {
            ::lorebook_filter::FieldValue::Float(::core::convert::Into::<f64>::into(self.#field_name))
        },
        FilterKind::String => quote! {
            ::lorebook_filter::FieldValue::String(::core::convert::AsRef::<str>::as_ref(&self.#field_name))
        },
        FilterKind::Boolean => quote! {
            ::lorebook_filter::FieldValue::Bool(self.#field_name)
        },
        FilterKind::Cost => quote! {
            ::lorebook_filter::FieldValue::Cost(self.#field_name)
        },
        FilterKind::Array(element) => {
            let element_expr = element_expr(element);
            quote! {
                ::lorebook_filter::FieldValue::List(
                    self.#field_name
                        .iter()
                        .map(|element| #element_expr)
                        .collect()
                )
            }
        }
    }
}

fn element_expr(element: ElementKind) -> TokenStream {
    match element {
        ElementKind::Int => quote! {
            ::lorebook_filter::FieldValue::Int(::core::convert::Into::<i64>::into(*element))
        },
        ElementKind::Float => quote! {
            ::lorebook_filter::FieldValue::Float(::core::convert::Into::<f64>::into(*element))
        },
        ElementKind::String => quote! {
            ::lorebook_filter::FieldValue::String(::core::convert::AsRef::<str>::as_ref(element))
        },
        ElementKind::Boolean => quote! {
            ::lorebook_filter::FieldValue::Bool(*element)
        },
    }
}

/// Factory call producing the declarations for one field.
fn declaration_expr(query_name: &str, kind: FilterKind) -> TokenStream {
    match kind {
        FilterKind::Int => quote! { ::lorebook_filter::int_filters(#query_name) },
        FilterKind::Float => quote! { ::lorebook_filter::float_filters(#query_name) },
        FilterKind::String => quote! { ::lorebook_filter::string_filters(#query_name) },
        FilterKind::Boolean => quote! {
            ::lorebook_filter::generic_filters(#query_name, ::lorebook_filter::PrimitiveTag::Boolean)
        },
        FilterKind::Cost => quote! { ::lorebook_filter::cost_filters(#query_name) },
        FilterKind::Array(element) => {
            let tag = format_ident!("{}", element.tag_name());
            quote! {
                ::lorebook_filter::array_filters(#query_name, ::lorebook_filter::PrimitiveTag::#tag)
            }
        }
    }
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
