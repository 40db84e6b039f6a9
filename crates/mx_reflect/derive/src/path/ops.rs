use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn set_member_error_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::ops::SetMemberError
    }
}
