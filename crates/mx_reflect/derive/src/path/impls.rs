use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn struct_debug_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::impls::struct_debug
    }
}

#[inline(always)]
pub(crate) fn struct_partial_eq_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::impls::struct_partial_eq
    }
}
