use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemImpl, LitStr};

use crate::derive_data::{Method, MethodReceiver, Property, ReflectMembers};

/// Implement `ReflectMembers` for the self type of an impl block.
///
/// The impl block is emitted first, with its `#[reflect(...)]` markers
/// already removed by the parser.
pub(crate) fn impl_members(item: &ItemImpl, members: &ReflectMembers) -> TokenStream {
    let mx_reflect_path = &members.mx_reflect_path;
    let reflect_members_ = crate::path::reflect_members_(mx_reflect_path);
    let property_info_ = crate::path::property_info_(mx_reflect_path);
    let method_info_ = crate::path::method_info_(mx_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(mx_reflect_path);

    let self_ty = &item.self_ty;

    let glue_tokens = members
        .properties
        .iter()
        .enumerate()
        .map(|(index, property)| get_property_glue(item, members, index, property));

    let property_tokens = members.properties.iter().enumerate().map(|(index, property)| {
        let ty = &property.ty;
        let name = LitStr::new(&property.name, property.span);
        let get = format_ident!("__get_property_{}", index);
        let with_setter = if property.setter.is_some() {
            let set = format_ident!("__set_property_{}", index);
            quote! { .with_setter(#set) }
        } else {
            TokenStream::new()
        };
        quote! {
            #property_info_::new::<#ty>(#name, #get) #with_setter
        }
    });

    let method_tokens = members
        .methods
        .iter()
        .map(|method| get_method_info(item, members, method));

    quote! {
        #item

        const _: () = {
            #(#glue_tokens)*

            impl #reflect_members_ for #self_ty {
                fn properties() -> #macro_utils_::Box<[#property_info_]> {
                    #macro_utils_::Box::new([
                        #(#property_tokens,)*
                    ])
                }

                fn methods() -> #macro_utils_::Box<[#method_info_]> {
                    #macro_utils_::Box::new([
                        #(#method_tokens,)*
                    ])
                }
            }
        };
    }
}

/// Generate the getter and setter glue of a property.
fn get_property_glue(
    item: &ItemImpl,
    members: &ReflectMembers,
    index: usize,
    property: &Property,
) -> TokenStream {
    use mx_macro_utils::full_path::{OptionFP, ResultFP};

    let mx_reflect_path = &members.mx_reflect_path;
    let reflect_ = crate::path::reflect_(mx_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(mx_reflect_path);
    let set_member_error_ = crate::path::set_member_error_(mx_reflect_path);

    let self_ty = &item.self_ty;
    let ty = &property.ty;
    let getter = &property.getter;
    let get = format_ident!("__get_property_{}", index);

    let get_tokens = quote! {
        fn #get(__this__: &dyn #reflect_) -> #OptionFP<#macro_utils_::Box<dyn #reflect_>> {
            let __this__ = <dyn #reflect_>::downcast_ref::<#self_ty>(__this__)?;
            let __value__: #ty = <#self_ty>::#getter(__this__);
            #OptionFP::Some(#macro_utils_::Box::new(__value__))
        }
    };

    let Some((setter, setter_ty)) = &property.setter else {
        return get_tokens;
    };
    let set = format_ident!("__set_property_{}", index);

    // The value is narrowed to the getter type and handed to the setter,
    // so a setter argument of another type fails to compile here.
    quote! {
        #get_tokens

        fn #set(
            __this__: &mut dyn #reflect_,
            __value__: #macro_utils_::Box<dyn #reflect_>,
        ) -> #ResultFP<(), #set_member_error_> {
            let #OptionFP::Some(__this__) = <dyn #reflect_>::downcast_mut::<#self_ty>(__this__) else {
                return #ResultFP::Err(#set_member_error_::Instance(__value__));
            };
            let __value__: #setter_ty = <dyn #reflect_>::take::<#ty>(__value__)
                .map_err(#set_member_error_::Value)?;
            <#self_ty>::#setter(__this__, __value__);
            #ResultFP::Ok(())
        }
    }
}

/// Generate the `MethodInfo` expression of a method.
fn get_method_info(item: &ItemImpl, members: &ReflectMembers, method: &Method) -> TokenStream {
    let mx_reflect_path = &members.mx_reflect_path;
    let method_info_ = crate::path::method_info_(mx_reflect_path);
    let receiver_ = crate::path::receiver_(mx_reflect_path);

    let self_ty = &item.self_ty;
    let name = LitStr::new(&method.name, method.span);
    let ret = match &method.ret {
        Some(ty) => quote! { #ty },
        None => quote! { () },
    };
    let receiver = match method.receiver {
        MethodReceiver::Ref => quote! { #receiver_::Ref },
        MethodReceiver::Mut => quote! { #receiver_::Mut },
    };

    // Referencing the method keeps the name checked by the compiler.
    let ident = &method.ident;
    quote! {
        {
            let _ = <#self_ty>::#ident;
            #method_info_::new::<#self_ty, #ret>(#name, #receiver)
        }
    }
}
