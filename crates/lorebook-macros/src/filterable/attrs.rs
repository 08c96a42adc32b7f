//! Attribute parsing for the Filterable derive macro.
//!
//! This module provides parsers for the `#[filter(...)]` field attributes
//! used by the `Filterable` derive macro.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// Element type of an `Array(...)` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Int,
    Float,
    String,
    Boolean,
}

impl ElementKind {
    fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "Int" => Ok(ElementKind::Int),
            "Float" => Ok(ElementKind::Float),
            "String" => Ok(ElementKind::String),
            "Boolean" | "Bool" => Ok(ElementKind::Boolean),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown array element type: '{}'. Expected one of: Int, Float, String, Boolean",
                    other
                ),
            )),
        }
    }

    /// Name of the matching `PrimitiveTag` variant.
    pub fn tag_name(self) -> &'static str {
        match self {
            ElementKind::Int => "Int",
            ElementKind::Float => "Float",
            ElementKind::String => "String",
            ElementKind::Boolean => "Boolean",
        }
    }
}

/// The semantic kind of a filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// `#[filter(Int)]` — any type convertible into `i64`.
    Int,
    /// `#[filter(Float)]` — any type convertible into `f64`.
    Float,
    /// `#[filter(String)]` — any `AsRef<str>`.
    String,
    /// `#[filter(Boolean)]` — `bool`.
    Boolean,
    /// `#[filter(Cost)]` — `lorebook_filter::Cost`.
    Cost,
    /// `#[filter(Array(String))]` — a slice-like sequence of elements.
    Array(ElementKind),
}

impl FilterKind {
    fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "Int" => Ok(FilterKind::Int),
            "Float" => Ok(FilterKind::Float),
            "String" => Ok(FilterKind::String),
            "Boolean" | "Bool" => Ok(FilterKind::Boolean),
            "Cost" => Ok(FilterKind::Cost),
            "Array" => Err(Error::new(
                ident.span(),
                "Array needs an element type, e.g. Array(String)",
            )),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown filter type: '{}'. Expected one of: Int, Float, String, Boolean, Cost, Array(..)",
                    other
                ),
            )),
        }
    }
}

/// Field-level attributes from `#[filter(...)]`.
#[derive(Debug, Clone)]
pub struct FilterAttr {
    /// The kind of this filterable field.
    pub kind: Option<FilterKind>,
    /// Skip this field.
    pub skip: bool,
    /// Custom field name for filter keys (default: field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for FilterAttr {
    fn default() -> Self {
        FilterAttr {
            kind: None,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for FilterAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FilterAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // filter(Int), filter(String), filter(skip)
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.kind = Some(FilterKind::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected filter type: Int, Float, String, Boolean, Cost, Array(..), or skip",
                        ));
                    }
                }

                // filter(Array(String))
                Meta::List(list) => {
                    if !list.path.is_ident("Array") {
                        return Err(Error::new(
                            list.path.span(),
                            "only Array(..) takes an element type",
                        ));
                    }
                    let element: Ident = list.parse_args()?;
                    attr.kind = Some(FilterKind::Array(ElementKind::from_ident(&element)?));
                    attr.span = list.path.span();
                }

                // rename = "custom_name"
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("rename") {
                        if let syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(s), ..
                        }) = &nv.value
                        {
                            attr.rename = Some(s.value());
                        } else {
                            return Err(Error::new(
                                nv.value.span(),
                                "rename must be a string literal",
                            ));
                        }
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename",
                        ));
                    }
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[filter(...)]` attributes from a field's attributes.
pub fn parse_filter_attrs(attrs: &[Attribute]) -> Result<FilterAttr> {
    for attr in attrs {
        if attr.path().is_ident("filter") {
            return attr.parse_args::<FilterAttr>();
        }
    }
    Ok(FilterAttr::default())
}
