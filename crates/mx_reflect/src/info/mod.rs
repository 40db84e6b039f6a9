//! Provide compile-time type infomation implementations.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): Full name, a fixed and unique identifier for the type.
//!     - [`type_name`](TypePath::type_name): The short name, may be duplicated.
//!
//! - [`DynamicTypePath`]: Provide dynamic dispatch for `TypePath`.
//!
//! - [`Type`]: A `TypeId` plus the two name functions.
//!
//! - [`TypeInfo`]: A enum representing compile-time type infomations, the inner is one of following:
//!     - [`StructInfo`]: For struct(e.g. `A{..}`) infomation, including fields,
//!       accessor-backed properties and methods.
//!     - [`OpaqueInfo`]: For Internal invisible types(e.g. `i32`, `String`).
//!
//! - Members:
//!     - [`NamedField`]: A struct field, with glue functions to borrow it from a `dyn Reflect`.
//!     - [`PropertyInfo`]: A getter (and optional setter) pair declared with `#[reflect_members]`.
//!     - [`MethodInfo`]: A method without arguments declared with `#[reflect_members]`.
//!
//! - [`ReflectKind`]: representing reflect type kind, `Struct` or `Opaque`.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//!
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.
//!
//! - [`ValueType`]: `Typed` types plus the opaque `Box<dyn Reflect>` slot.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod method_info;
mod opaque_info;
mod property_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use method_info::{MethodInfo, Receiver};
pub use opaque_info::OpaqueInfo;
pub use property_info::PropertyInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed, ValueType};
