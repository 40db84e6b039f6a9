//! This independent module is used to provide the required path.
//! So as to minimize changes when the `mx_reflect` structure is modified.
//!
//! The only special feature is the path of mx_reflect itself,
//! See [`mx_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `mx_reflect` crate.
///
/// Not all modules can access the reflection crate itself through `mx_reflect`,
/// we have to scan the builder's `cargo.toml`.
///
/// 1. For crates that depend on `mx_reflect`, `::mx_reflect` is returned here`.
/// 2. For crates that depend on `mx_core`, `::mx_core::reflect` is returned here`.
/// 3. For crates that depend on `mx`, `::mx::reflect` is returned here`.
/// 4. For other situations, `::mx_reflect` is returned here, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining read-write lock permissions, querying content...),
/// so the crate path is mainly obtained through parameter passing rather than reacquiring.
pub(crate) fn mx_reflect() -> syn::Path {
    mx_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("mx_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod impls;
mod info;
mod ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use impls::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn macro_utils_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::__macro_exports::macro_utils
    }
}

#[inline(always)]
pub(crate) fn reflect_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_members_(mx_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #mx_reflect_path::ReflectMembers
    }
}
