use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, Path, Token, parenthesized, token::Paren};

use super::{TypeAttributes, TypeParser};

/// The input of `impl_reflect_opaque!`.
///
/// Format: `path (flags)`, e.g. `::alloc::string::String(clone, debug)`.
pub(crate) struct ReflectOpaque {
    pub attrs: TypeAttributes,
    pub type_path: Path,
    pub type_ident: Ident,
    pub mx_reflect_path: Path,
}

impl Parse for ReflectOpaque {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // `parse_mod_style` rejects generic arguments, so `u8(clone)` is not
        // mistaken for `Fn(..)` sugar.
        let type_path = Path::parse_mod_style(input)?;
        let Some(last) = type_path.segments.last() else {
            return Err(input.error("expected a type path"));
        };
        let type_ident = last.ident.clone();

        let attrs = if input.peek(Paren) {
            let content;
            parenthesized!(content in input);
            let flags = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
            TypeAttributes::parse_opaque_flags(flags)?
        } else {
            TypeAttributes::default()
        };

        if attrs.clone.is_none() {
            return Err(syn::Error::new_spanned(
                &type_path,
                "opaque types must declare the `clone` flag",
            ));
        }

        Ok(Self {
            attrs,
            type_path,
            type_ident,
            mx_reflect_path: crate::path::mx_reflect(),
        })
    }
}

impl ReflectOpaque {
    pub(crate) fn type_parser(&self) -> TypeParser<'_> {
        TypeParser::new_foreign(&self.type_ident, &self.type_path)
    }
}
