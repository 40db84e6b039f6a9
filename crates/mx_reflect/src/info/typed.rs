use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use mx_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect, Clone)]
/// struct A {
///     value: i32,
/// }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert_eq!(info.as_struct().unwrap().field_len(), 1);
/// ```
///
/// Manual implementations should store the info in a
/// [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell),
/// so that every call returns the same reference.
pub trait Typed: TypePath {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
///
/// ```
/// use mx_reflect::{Reflect, info::DynamicTyped};
///
/// let x: Box<dyn Reflect> = Box::new(1.5_f32);
/// assert!(x.reflect_type_info().type_is::<f32>());
/// ```
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}

// -----------------------------------------------------------------------------
// ValueType

/// A type that can stand for the value of a member or an expression.
///
/// Implemented for every [`Typed`] type and for the opaque slot
/// `Box<dyn Reflect>`, whose info is the one of `dyn Reflect`.
///
/// ```
/// use mx_reflect::{Opaque, Reflect, info::{Typed, ValueType}};
///
/// assert!(i32::value_info().type_is::<i32>());
/// assert_eq!(
///     Opaque::value_info().ty_id(),
///     <dyn Reflect as Typed>::type_info().ty_id(),
/// );
/// ```
pub trait ValueType: 'static {
    /// Returns the type info used to describe values of this type.
    fn value_info() -> &'static TypeInfo;
}

impl<T: Typed> ValueType for T {
    #[inline]
    fn value_info() -> &'static TypeInfo {
        T::type_info()
    }
}

impl ValueType for Box<dyn Reflect> {
    #[inline]
    fn value_info() -> &'static TypeInfo {
        <dyn Reflect as Typed>::type_info()
    }
}
