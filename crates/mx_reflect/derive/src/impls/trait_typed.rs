use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::TypeParser;

/// Generate implementation code for `Typed`
///
/// `type_info_tokens` is an expression of type `TypeInfo`, evaluated once.
pub(crate) fn impl_trait_typed(
    mx_reflect_path: &syn::Path,
    parser: &TypeParser,
    type_info_tokens: TokenStream,
) -> TokenStream {
    let trait_typed_ = crate::path::typed_(mx_reflect_path);
    let type_info_ = crate::path::type_info_(mx_reflect_path);
    let info_cell = crate::path::non_generic_type_info_cell_(mx_reflect_path);

    let real_ident = parser.real_ident();

    quote! {
        impl #trait_typed_ for #real_ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #info_cell = #info_cell::new();
                CELL.get_or_init(|| {
                    #type_info_tokens
                })
            }
        }
    }
}
