use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{ReflectOpaque, TypeAttributes};

/// Implement full reflect for opaque type.
pub(crate) fn impl_opaque(opaque: &ReflectOpaque) -> TokenStream {
    let mx_reflect_path = &opaque.mx_reflect_path;
    let parser = opaque.type_parser();

    let type_info_ = crate::path::type_info_(mx_reflect_path);
    let opaque_info_ = crate::path::opaque_info_(mx_reflect_path);

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(mx_reflect_path, &parser);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(
        mx_reflect_path,
        &parser,
        quote! { #type_info_::Opaque(#opaque_info_::new::<Self>()) },
    );

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(
        mx_reflect_path,
        &parser,
        quote!(Opaque),
        get_opaque_eq_impl(mx_reflect_path, &opaque.attrs),
        get_opaque_debug_impl(&opaque.attrs),
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Reflect::reflect_partial_eq` implementation tokens.
///
/// Without `partial_eq`, the trait's default is used.
pub(super) fn get_opaque_eq_impl(mx_reflect_path: &syn::Path, attrs: &TypeAttributes) -> TokenStream {
    use mx_macro_utils::full_path::{OptionFP, PartialEqFP};

    if attrs.partial_eq.is_none() {
        return TokenStream::new();
    }

    let reflect_ = crate::path::reflect_(mx_reflect_path);

    quote! {
        fn reflect_partial_eq(&self, __other__: &dyn #reflect_) -> #OptionFP<bool> {
            match <dyn #reflect_>::downcast_ref::<Self>(__other__) {
                #OptionFP::Some(__other__) => #OptionFP::Some(<Self as #PartialEqFP>::eq(self, __other__)),
                #OptionFP::None => #OptionFP::Some(false),
            }
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
///
/// Without `debug`, the trait's default is used.
pub(super) fn get_opaque_debug_impl(attrs: &TypeAttributes) -> TokenStream {
    use mx_macro_utils::full_path::DebugFP;

    if attrs.debug.is_none() {
        return TokenStream::new();
    }

    quote! {
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            <Self as #DebugFP>::fmt(self, f)
        }
    }
}
