//! See following macros:
//!
//! - [`Reflect`]
//! - [`reflect_members`]
//! - [`impl_reflect_opaque`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Full Reflection Derivation
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed` and `Reflect` for a
/// non-generic struct with named fields.
///
/// The type must implement [`Clone`], which backs `Reflect::reflect_clone`.
///
/// Every field type must implement `Reflect` and `Typed`. For each field the
/// macro generates glue functions that borrow the field out of a `dyn Reflect`,
/// they are stored in the field's `NamedField`.
///
/// ## Type attributes
///
/// - `#[reflect(members)]`: append the properties and methods declared with
///   [`reflect_members`] to the `StructInfo`.
/// - `#[reflect(debug)]`: use the type's [`Debug`] for `reflect_debug`,
///   instead of a field-by-field output.
/// - `#[reflect(partial_eq)]`: use the type's [`PartialEq`] for
///   `reflect_partial_eq`, instead of a field-by-field comparison.
///
/// ## Field attributes
///
/// - `#[reflect(skip)]`: the field is not listed in the `StructInfo`.
///
/// ## Example
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, Debug)]
/// #[reflect(debug)]
/// struct Foo {
///     name: String,
///     #[reflect(skip)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_full_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_input(&ast) {
        Ok(data) => impls::impl_struct(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// # Properties and Methods
///
/// Applied to an inherent impl block, declares which methods are exposed to
/// reflection. The impl block itself is emitted unchanged, except that the
/// `#[reflect(...)]` markers are removed.
///
/// - `#[reflect(get)]` on `fn name(&self) -> T`: the getter of property `name`.
///   Use `#[reflect(get = "other")]` to choose another property name.
/// - `#[reflect(set)]` on `fn set_name(&mut self, value: T)`: the setter of
///   property `name` (the `set_` prefix is removed).
///   Use `#[reflect(set = "other")]` to choose another property name.
///   A setter requires a getter of the same property.
/// - `#[reflect(method)]` on `fn name(&self)` or `fn name(&mut self)`, with an
///   optional return type and no other argument.
///
/// The macro implements `ReflectMembers`, which is read by `#[derive(Reflect)]`
/// when the type carries `#[reflect(members)]`.
///
/// ## Example
///
/// ```rust, ignore
/// #[reflect_members]
/// impl Foo {
///     #[reflect(get)]
///     fn len(&self) -> usize { self.name.len() }
///
///     #[reflect(get = "label")]
///     fn name(&self) -> String { self.name.clone() }
///
///     #[reflect(set = "label")]
///     fn rename(&mut self, name: String) { self.name = name; }
///
///     #[reflect(method)]
///     fn clear(&mut self) { self.name.clear(); }
/// }
/// ```
#[proc_macro_attribute]
pub fn reflect_members(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "`#[reflect_members]` does not take arguments",
        )
        .into_compile_error()
        .into();
    }

    let mut item = parse_macro_input!(input as ItemImpl);

    match derive_data::ReflectMembers::from_impl(&mut item) {
        Ok(members) => impls::impl_members(&item, &members).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// # Opaque Reflection
///
/// Implements `TypePath`, `Typed` and `Reflect` for a type whose content is
/// invisible to reflection, typically a primitive or a type of another crate.
///
/// Primitive types are written as is, other types need a full path with
/// leading `::`. The flags in parentheses declare which standard traits back
/// the reflection methods:
///
/// - `clone` (required): `Reflect::reflect_clone`.
/// - `debug`: `Reflect::reflect_debug`.
/// - `partial_eq`: `Reflect::reflect_partial_eq`.
///
/// ```rust, ignore
/// impl_reflect_opaque!(u32(clone, debug, partial_eq));
/// impl_reflect_opaque!(::alloc::string::String(clone, debug, partial_eq));
/// ```
#[proc_macro]
pub fn impl_reflect_opaque(input: TokenStream) -> TokenStream {
    let opaque = parse_macro_input!(input as derive_data::ReflectOpaque);

    impls::impl_opaque(&opaque).into()
}
