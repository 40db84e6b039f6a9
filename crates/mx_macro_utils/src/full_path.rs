//! Absolute paths of prelude items, for use inside generated code.
//!
//! Generated code must not depend on the caller's prelude or on local items
//! that shadow `Option`, `Result` and friends, so the macros interpolate these
//! tokens instead of bare names.
//!
//! ```rust
//! # use mx_macro_utils::full_path::OptionFP;
//! # use quote::quote;
//! let path: syn::Path = syn::parse2(quote! { #OptionFP::None }).unwrap();
//! assert!(path.leading_colon.is_some());
//! assert_eq!(path.segments.len(), 4);
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($name:ident => $path:path;)+) => {
        $(
            #[doc = concat!("Expands to `", stringify!($path), "`.")]
            #[derive(Clone, Copy, Debug)]
            pub struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    quote!($path).to_tokens(tokens);
                }
            }
        )+
    };
}

define_full_path! {
    AnyFP => ::core::any::Any;
    CloneFP => ::core::clone::Clone;
    DebugFP => ::core::fmt::Debug;
    OptionFP => ::core::option::Option;
    PartialEqFP => ::core::cmp::PartialEq;
    ResultFP => ::core::result::Result;
    SendFP => ::core::marker::Send;
    SyncFP => ::core::marker::Sync;
    TypeIdFP => ::core::any::TypeId;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(tokens: impl ToTokens) -> String {
        let path: syn::Path = syn::parse2(tokens.to_token_stream()).unwrap();
        assert!(path.leading_colon.is_some());
        let idents: Vec<_> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        idents.join("::")
    }

    #[test]
    fn paths_are_absolute() {
        assert_eq!(segments(ResultFP), "core::result::Result");
        assert_eq!(segments(CloneFP), "core::clone::Clone");
        assert_eq!(segments(TypeIdFP), "core::any::TypeId");
    }
}
