use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::LitStr;

use super::opaque_kind::{get_opaque_debug_impl, get_opaque_eq_impl};
use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{ReflectStruct, StructField};

/// Implement full reflect for struct type.
///
/// Everything is wrapped in an anonymous const, so the field glue
/// functions do not leak into the user's namespace.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let mx_reflect_path = info.mx_reflect_path();
    let parser = info.type_parser();

    // glue functions of fields
    let field_glue_tokens = info
        .active_fields()
        .iter()
        .map(|field| get_field_glue(info, field));

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(mx_reflect_path, parser);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(mx_reflect_path, parser, get_struct_info_tokens(info));

    // trait: Reflect
    let reflect_eq_tokens = if info.attrs().partial_eq.is_some() {
        get_opaque_eq_impl(mx_reflect_path, info.attrs())
    } else {
        get_struct_partial_eq_impl(mx_reflect_path)
    };

    let reflect_debug_tokens = if info.attrs().debug.is_some() {
        get_opaque_debug_impl(info.attrs())
    } else {
        get_struct_debug_impl(mx_reflect_path)
    };

    let reflect_trait_tokens = impl_trait_reflect(
        mx_reflect_path,
        parser,
        quote!(Struct),
        reflect_eq_tokens,
        reflect_debug_tokens,
    );

    quote! {
        const _: () = {
            #(#field_glue_tokens)*

            #type_path_trait_tokens

            #typed_trait_tokens

            #reflect_trait_tokens
        };
    }
}

fn getter_ident(field: &StructField) -> syn::Ident {
    format_ident!("__get_field_{}", field.index)
}

fn getter_mut_ident(field: &StructField) -> syn::Ident {
    format_ident!("__get_field_mut_{}", field.index)
}

/// Generate the functions stored in the `NamedField` of `field`.
fn get_field_glue(info: &ReflectStruct, field: &StructField) -> TokenStream {
    use mx_macro_utils::full_path::OptionFP;

    let reflect_ = crate::path::reflect_(info.mx_reflect_path());
    let real_ident = info.type_parser().real_ident();

    let get = getter_ident(field);
    let get_mut = getter_mut_ident(field);
    let member = field.ident;

    quote! {
        fn #get(__this__: &dyn #reflect_) -> #OptionFP<&dyn #reflect_> {
            let __this__ = <dyn #reflect_>::downcast_ref::<#real_ident>(__this__)?;
            #OptionFP::Some(&__this__.#member as &dyn #reflect_)
        }

        fn #get_mut(__this__: &mut dyn #reflect_) -> #OptionFP<&mut dyn #reflect_> {
            let __this__ = <dyn #reflect_>::downcast_mut::<#real_ident>(__this__)?;
            #OptionFP::Some(&mut __this__.#member as &mut dyn #reflect_)
        }
    }
}

/// Generate the `TypeInfo::Struct(...)` expression.
fn get_struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let mx_reflect_path = info.mx_reflect_path();
    let type_info_ = crate::path::type_info_(mx_reflect_path);
    let struct_info_ = crate::path::struct_info_(mx_reflect_path);
    let named_field_ = crate::path::named_field_(mx_reflect_path);

    let fields = info.active_fields().iter().map(|field| {
        let ty = field.ty;
        let name = LitStr::new(&field.ident.to_string(), field.ident.span());
        let get = getter_ident(field);
        let get_mut = getter_mut_ident(field);
        quote! {
            #named_field_::new::<#ty>(#name, #get, #get_mut)
        }
    });

    let members_tokens = if info.attrs().members.is_some() {
        let reflect_members_ = crate::path::reflect_members_(mx_reflect_path);
        quote! {
            .with_properties(<Self as #reflect_members_>::properties())
            .with_methods(<Self as #reflect_members_>::methods())
        }
    } else {
        TokenStream::new()
    };

    quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[
                #(#fields,)*
            ])
            #members_tokens
        )
    }
}

/// Generate `Reflect::reflect_partial_eq` implementation tokens.
fn get_struct_partial_eq_impl(mx_reflect_path: &syn::Path) -> TokenStream {
    use mx_macro_utils::full_path::OptionFP;

    let reflect_ = crate::path::reflect_(mx_reflect_path);
    let struct_partial_eq_ = crate::path::struct_partial_eq_(mx_reflect_path);

    quote! {
        #[inline]
        fn reflect_partial_eq(&self, __other__: &dyn #reflect_) -> #OptionFP<bool> {
            #struct_partial_eq_(self, __other__)
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
fn get_struct_debug_impl(mx_reflect_path: &syn::Path) -> TokenStream {
    let struct_debug_ = crate::path::struct_debug_(mx_reflect_path);

    quote! {
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            #struct_debug_(self, f)
        }
    }
}
