use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, LitStr, Path};

/// A container used to produce the `TypePath` strings of a type.
pub(crate) enum TypeParser<'a> {
    /// Types without a crate/module that can be named from any scope (e.g. `bool`).
    Primitive(&'a Ident),
    /// The type must be able to be reached with just its ident.
    ///
    /// For local types, [`module_path!()`](module_path) gives the module path.
    Local(&'a Ident),
    /// For foreign, [`module_path!()`](module_path) can not be used.
    /// So the user needs to provide the complete path, using `::my_crate::foo::Bar` syntax.
    Foreign { path: &'a Path, ident: &'a Ident },
}

impl<'a> TypeParser<'a> {
    /// A type path without leading `::` is treated as primitive.
    pub(crate) fn new_foreign(ident: &'a Ident, path: &'a Path) -> Self {
        if path.leading_colon.is_none() {
            Self::Primitive(ident)
        } else {
            Self::Foreign { path, ident }
        }
    }

    /// This name is used in `impl ... for #real_ident {...}`.
    pub(crate) fn real_ident(&self) -> TokenStream {
        match self {
            Self::Primitive(ident) | Self::Local(ident) => ident.to_token_stream(),
            Self::Foreign { path, .. } => path.to_token_stream(),
        }
    }

    fn ident(&self) -> &Ident {
        match self {
            Self::Primitive(ident) | Self::Local(ident) => ident,
            Self::Foreign { ident, .. } => ident,
        }
    }

    /// Segments of a foreign path, without the leading `::`.
    fn segments(path: &Path) -> impl Iterator<Item = String> {
        path.segments.iter().map(|s| s.ident.to_string())
    }

    /// Expression of type `&'static str`.
    pub(crate) fn type_path(&self) -> TokenStream {
        match self {
            Self::Primitive(ident) => lit_str(ident),
            Self::Local(ident) => {
                let name = lit_str(ident);
                quote! {
                    ::core::concat!(::core::module_path!(), "::", #name)
                }
            }
            Self::Foreign { path, .. } => {
                let joined = Self::segments(path).collect::<Vec<_>>().join("::");
                LitStr::new(&joined, proc_macro2::Span::call_site()).to_token_stream()
            }
        }
    }

    /// Expression of type `&'static str`.
    pub(crate) fn type_name(&self) -> TokenStream {
        lit_str(self.ident())
    }
}

fn lit_str(ident: &Ident) -> TokenStream {
    LitStr::new(&ident.to_string(), ident.span()).to_token_stream()
}
