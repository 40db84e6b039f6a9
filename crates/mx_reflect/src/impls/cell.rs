//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! - [`NonGenericTypeInfoCell`]: an [`OnceLock<T>`], almost no additional expenses.
//!   There is no `NonGenericTypePathCell` because it can be replaced by a
//!   static string literal.
//! - [`GenericTypeInfoCell`] and [`GenericTypePathCell`]: the `static CELL`
//!   inside a generic function is shared by every instantiation, so these
//!   cells keep one entry per [`TypeId`] behind a [`RwLock`].

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use mx_utils::hash::{FixedHashState, HashMap};

use crate::info::TypeInfo;

mod sealed {
    use alloc::string::String;

    use crate::info::TypeInfo;

    pub trait TypedProperty: Send + Sync + 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Container for static storage of non-generic type information.
///
/// # Example
///
/// ```
/// use mx_reflect::info::{Typed, TypePath, TypeInfo, OpaqueInfo};
/// use mx_reflect::impls::NonGenericTypeInfoCell;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::Foo" }
///     fn type_name() -> &'static str { "Foo" }
/// }
///
/// impl Typed for Foo {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Foo::type_info(), Foo::type_info()));
/// ```
///
/// [`OnceLock<T>`]: std::sync::OnceLock
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Creates a new, empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the [`TypeInfo`] stored in the cell.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of type information with generics.
///
/// See [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(RwLock<HashMap<TypeId, &'static T>>);

/// Container for static storage of the [`TypeInfo`] of generic types.
///
/// # Example
///
/// ```
/// use mx_reflect::impls::GenericTypeInfoCell;
/// use mx_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Wrapper<T>(T);
///
/// impl<T: TypePath> TypePath for Wrapper<T> {
///     fn type_path() -> &'static str { "my_crate::Wrapper" }
///     fn type_name() -> &'static str { "Wrapper" }
/// }
///
/// impl<T: TypePath> Typed for Wrapper<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(<Wrapper<u8>>::type_info().type_is::<Wrapper<u8>>());
/// assert!(<Wrapper<i64>>::type_info().type_is::<Wrapper<i64>>());
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for static storage of the names of generic types.
///
/// # Example
///
/// ```
/// use mx_reflect::impls::{self, GenericTypePathCell};
/// use mx_reflect::info::TypePath;
///
/// struct Wrapper<T>(T);
///
/// impl<T: TypePath> TypePath for Wrapper<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["my_crate::Wrapper<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["Wrapper<", T::type_name(), ">"]))
///     }
/// }
///
/// assert_eq!(<Wrapper<i32>>::type_path(), "my_crate::Wrapper<i32>");
/// assert_eq!(<Wrapper<u8>>::type_name(), "Wrapper<u8>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Creates a new, empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(HashMap::with_hasher(FixedHashState)))
    }

    /// Returns the entry of the type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the given
    /// function and leaked.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }
}
