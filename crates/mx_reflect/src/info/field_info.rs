use core::any::{Any, TypeId};
use core::fmt;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Borrow a field out of an erased instance of its declaring type.
///
/// Returns `None` if the instance is not of the declaring type.
pub type FieldGetFn = fn(&dyn Reflect) -> Option<&dyn Reflect>;

/// Mutably borrow a field out of an erased instance of its declaring type.
///
/// Returns `None` if the instance is not of the declaring type.
pub type FieldGetMutFn = fn(&mut dyn Reflect) -> Option<&mut dyn Reflect>;

/// Field information of a struct, including its name, type and the
/// glue functions generated by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// ```
/// use mx_reflect::{Reflect, derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone)]
/// struct Foo {
///     id: u32,
/// }
///
/// let field = Foo::type_info().as_struct().unwrap().field("id").unwrap();
/// let foo = Foo { id: 7 };
///
/// let value = field.get(&foo).unwrap();
/// assert_eq!(value.downcast_ref::<u32>(), Some(&7));
/// assert!(field.get(&1_u8).is_none());
/// ```
#[derive(Clone)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    get: FieldGetFn,
    get_mut: FieldGetMutFn,
}

impl NamedField {
    /// Creates a new field.
    ///
    /// `get` and `get_mut` must return the field named `name` of type `T`.
    #[inline]
    pub const fn new<T: Typed>(
        name: &'static str,
        get: FieldGetFn,
        get_mut: FieldGetMutFn,
    ) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            get,
            get_mut,
        }
    }

    /// Returns the [`TypeId`] of the field value.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the field value is of type `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeInfo`] of the field value.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Borrow the field out of `instance`.
    #[inline]
    pub fn get<'a>(&self, instance: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        (self.get)(instance)
    }

    /// Mutably borrow the field out of `instance`.
    #[inline]
    pub fn get_mut<'a>(&self, instance: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        (self.get_mut)(instance)
    }
}

impl fmt::Debug for NamedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedField")
            .field("name", &self.name)
            .field("type", &self.type_info().type_path())
            .finish()
    }
}
