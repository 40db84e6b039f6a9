use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};
use crate::ops::SetMemberError;

/// Read a property out of an erased instance of its declaring type.
///
/// Returns `None` if the instance is not of the declaring type.
pub type PropertyGetFn = fn(&dyn Reflect) -> Option<Box<dyn Reflect>>;

/// Write a property on an erased instance of its declaring type.
pub type PropertySetFn = fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), SetMemberError>;

/// A property is a value exposed through accessor methods rather than a field.
///
/// Declared with [`#[reflect_members]`](crate::derive::reflect_members) on an
/// inherent impl block, and listed by the declaring type's
/// [`StructInfo`](crate::info::StructInfo) when it derives `Reflect` with
/// `#[reflect(members)]`.
///
/// A property without setter is read-only.
///
/// ```
/// use mx_reflect::{Reflect, derive::{Reflect, reflect_members}, info::Typed};
///
/// #[derive(Reflect, Clone)]
/// #[reflect(members)]
/// struct Counter {
///     #[reflect(skip)]
///     hits: u64,
/// }
///
/// #[reflect_members]
/// impl Counter {
///     #[reflect(get)]
///     fn hits(&self) -> u64 {
///         self.hits
///     }
///
///     #[reflect(set)]
///     fn set_hits(&mut self, hits: u64) {
///         self.hits = hits;
///     }
/// }
///
/// let info = Counter::type_info().as_struct().unwrap();
/// let hits = info.property("hits").unwrap();
/// assert!(hits.is_writable());
///
/// let mut counter = Counter { hits: 1 };
/// hits.set(&mut counter, Box::new(5_u64)).unwrap();
/// assert_eq!(counter.hits, 5);
/// assert_eq!(hits.get(&counter).unwrap().take::<u64>().ok(), Some(5));
/// ```
#[derive(Clone)]
pub struct PropertyInfo {
    ty_id: TypeId,
    name: &'static str,
    type_info: fn() -> &'static TypeInfo,
    get: PropertyGetFn,
    set: Option<PropertySetFn>,
}

impl PropertyInfo {
    /// Creates a read-only property of value type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str, get: PropertyGetFn) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            type_info: T::type_info,
            get,
            set: None,
        }
    }

    /// Attach a setter, making the property writable.
    #[inline]
    pub const fn with_setter(mut self, set: PropertySetFn) -> Self {
        self.set = Some(set);
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeId`] of the property value.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the property value is of type `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the property value.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns `true` if the property has a setter.
    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.set.is_some()
    }

    /// Invoke the getter on `instance`.
    ///
    /// Returns `None` if `instance` is not of the declaring type.
    #[inline]
    pub fn get(&self, instance: &dyn Reflect) -> Option<Box<dyn Reflect>> {
        (self.get)(instance)
    }

    /// Invoke the setter on `instance`.
    ///
    /// A read-only property returns [`SetMemberError::ReadOnly`] and gives
    /// the value back.
    pub fn set(
        &self,
        instance: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), SetMemberError> {
        match self.set {
            Some(set) => set(instance, value),
            None => Err(SetMemberError::ReadOnly(value)),
        }
    }
}

impl fmt::Debug for PropertyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("name", &self.name)
            .field("type", &self.type_info().type_path())
            .field("writable", &self.is_writable())
            .finish()
    }
}
