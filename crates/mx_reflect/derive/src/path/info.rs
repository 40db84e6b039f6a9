use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn struct_info_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn opaque_info_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::info::OpaqueInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn property_info_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::info::PropertyInfo
    }
}

#[inline(always)]
pub(crate) fn method_info_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::info::MethodInfo
    }
}

#[inline(always)]
pub(crate) fn receiver_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::info::Receiver
    }
}
