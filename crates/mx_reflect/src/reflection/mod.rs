use alloc::boxed::Box;

use crate::info::{MethodInfo, PropertyInfo};

// -----------------------------------------------------------------------------
// Modules

mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub(crate) use reflect::impl_reflect_cast_fn;

pub use reflect::Reflect;

/// A boxed value of any reflected type.
///
/// The box carries the [`TypeId`](core::any::TypeId) of its content, and
/// narrowing it back with [`take`](trait.Reflect.html#method.take) checks
/// that tag without any coercion.
pub type Opaque = Box<dyn Reflect>;

/// The properties and methods of a type, as declared with
/// [`#[reflect_members]`](crate::derive::reflect_members).
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) reads this trait when the
/// type is marked with `#[reflect(members)]`. A type has at most one
/// `#[reflect_members]` impl block.
pub trait ReflectMembers {
    /// Returns the properties in declaration order.
    fn properties() -> Box<[PropertyInfo]>;

    /// Returns the methods in declaration order.
    fn methods() -> Box<[MethodInfo]>;
}
