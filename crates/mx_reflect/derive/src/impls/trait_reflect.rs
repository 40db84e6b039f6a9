use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::TypeParser;

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(
    mx_reflect_path: &syn::Path,
    parser: &TypeParser,
    reflect_kind_token: TokenStream,
    reflect_eq_tokens: TokenStream,
    reflect_debug_tokens: TokenStream,
) -> TokenStream {
    use mx_macro_utils::full_path::{CloneFP, ResultFP};

    let reflect_ = crate::path::reflect_(mx_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(mx_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(mx_reflect_path);

    let real_ident = parser.real_ident();

    quote! {
        impl #reflect_ for #real_ident {
            fn set(&mut self, __value__: #macro_utils_::Box<dyn #reflect_>) -> #ResultFP<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(__value__)?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_clone(&self) -> #macro_utils_::Box<dyn #reflect_> {
                #macro_utils_::Box::new(<Self as #CloneFP>::clone(self))
            }

            #reflect_eq_tokens

            #reflect_debug_tokens
        }
    }
}
