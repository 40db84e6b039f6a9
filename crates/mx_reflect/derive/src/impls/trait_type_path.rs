use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::TypeParser;

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(mx_reflect_path: &syn::Path, parser: &TypeParser) -> TokenStream {
    let trait_type_path_ = crate::path::type_path_(mx_reflect_path);

    let real_ident = parser.real_ident();
    let type_path = parser.type_path();
    let type_name = parser.type_name();

    quote! {
        impl #trait_type_path_ for #real_ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}
