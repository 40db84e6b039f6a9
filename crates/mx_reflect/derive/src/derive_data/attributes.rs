use proc_macro2::Span;
use syn::{Attribute, LitStr, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Type Attributes

/// Parsed `#[reflect(...)]` attributes of a type.
///
/// Each flag records the span where it was declared, so that duplicates
/// can be reported at the right place.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(members)]`
    pub members: Option<Span>,
    /// `#[reflect(debug)]`
    pub debug: Option<Span>,
    /// `#[reflect(partial_eq)]`
    pub partial_eq: Option<Span>,
    /// `clone`, only accepted by `impl_reflect_opaque!`.
    pub clone: Option<Span>,
}

fn set_flag(flag: &mut Option<Span>, span: Span, name: &str) -> syn::Result<()> {
    if flag.is_some() {
        return Err(syn::Error::new(span, format!("duplicate flag `{name}`")));
    }
    *flag = Some(span);
    Ok(())
}

impl TypeAttributes {
    /// Parse all `#[reflect(...)]` attributes of a derive input.
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("members") {
                    set_flag(&mut this.members, span, "members")
                } else if meta.path.is_ident("debug") {
                    set_flag(&mut this.debug, span, "debug")
                } else if meta.path.is_ident("partial_eq") {
                    set_flag(&mut this.partial_eq, span, "partial_eq")
                } else {
                    Err(meta.error(
                        "unsupported reflect attribute, expected `members`, `debug` or `partial_eq`",
                    ))
                }
            })?;
        }

        Ok(this)
    }

    /// Parse the flags of `impl_reflect_opaque!`, e.g. `clone, debug`.
    pub(crate) fn parse_opaque_flags(idents: impl IntoIterator<Item = syn::Ident>) -> syn::Result<Self> {
        let mut this = Self::default();

        for ident in idents {
            let span = ident.span();
            match ident.to_string().as_str() {
                "clone" => set_flag(&mut this.clone, span, "clone")?,
                "debug" => set_flag(&mut this.debug, span, "debug")?,
                "partial_eq" => set_flag(&mut this.partial_eq, span, "partial_eq")?,
                _ => {
                    return Err(syn::Error::new(
                        span,
                        "unsupported flag, expected `clone`, `debug` or `partial_eq`",
                    ));
                }
            }
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Field Attributes

/// Parsed `#[reflect(...)]` attributes of a field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(skip)]`
    pub skip: Option<Span>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    set_flag(&mut this.skip, meta.path.span(), "skip")
                } else {
                    Err(meta.error("unsupported reflect attribute, expected `skip`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Member Attributes

/// The role of a method inside a `#[reflect_members]` impl block.
#[derive(Debug)]
pub(crate) enum MemberAttribute {
    /// `#[reflect(get)]` or `#[reflect(get = "name")]`
    Get(Option<LitStr>),
    /// `#[reflect(set)]` or `#[reflect(set = "name")]`
    Set(Option<LitStr>),
    /// `#[reflect(method)]` or `#[reflect(method = "name")]`
    Method(Option<LitStr>),
}

impl MemberAttribute {
    /// Remove the `#[reflect(...)]` attributes from `attrs` and parse them.
    ///
    /// Returns `None` if the method has no such attribute.
    pub(crate) fn take_from(attrs: &mut Vec<Attribute>) -> syn::Result<Option<(Self, Span)>> {
        let mut found: Option<(Self, Span)> = None;
        let mut error: Option<syn::Error> = None;

        attrs.retain(|attr| {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                return true;
            }
            if let Err(e) = Self::parse_one(attr, &mut found) {
                match &mut error {
                    Some(err) => err.combine(e),
                    None => error = Some(e),
                }
            }
            false
        });

        match error {
            Some(err) => Err(err),
            None => Ok(found),
        }
    }

    fn parse_one(attr: &Attribute, found: &mut Option<(Self, Span)>) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            let rename = if meta.input.peek(syn::Token![=]) {
                Some(meta.value()?.parse::<LitStr>()?)
            } else {
                None
            };

            let parsed = if meta.path.is_ident("get") {
                Self::Get(rename)
            } else if meta.path.is_ident("set") {
                Self::Set(rename)
            } else if meta.path.is_ident("method") {
                Self::Method(rename)
            } else {
                return Err(meta.error("unsupported member kind, expected `get`, `set` or `method`"));
            };

            if found.is_some() {
                return Err(meta.error("a method can only be declared as one member"));
            }
            *found = Some((parsed, meta.path.span()));
            Ok(())
        })
    }
}
