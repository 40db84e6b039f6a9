use core::any::TypeId;
use core::fmt;

use crate::info::{Type, TypeInfo, TypePath, Typed};

/// How a method borrows its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receiver {
    /// `&self`
    Ref,
    /// `&mut self`
    Mut,
}

impl fmt::Display for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ref => f.pad("&self"),
            Self::Mut => f.pad("&mut self"),
        }
    }
}

/// A method without arguments declared with
/// [`#[reflect_members]`](crate::derive::reflect_members).
///
/// Two `MethodInfo` compare equal when they have the same declaring type,
/// name and return type, no matter where they were obtained from.
///
/// ```
/// use mx_reflect::{derive::{Reflect, reflect_members}, info::{Receiver, Typed}};
///
/// #[derive(Reflect, Clone)]
/// #[reflect(members)]
/// struct Lamp {
///     on: bool,
/// }
///
/// #[reflect_members]
/// impl Lamp {
///     #[reflect(method)]
///     fn toggle(&mut self) {
///         self.on = !self.on;
///     }
/// }
///
/// let toggle = Lamp::type_info().as_struct().unwrap().method("toggle").unwrap();
/// assert_eq!(toggle.receiver(), Receiver::Mut);
/// assert!(toggle.return_type_info().type_is::<()>());
/// assert!(toggle.declaring_type().is::<Lamp>());
/// ```
#[derive(Clone, Copy)]
pub struct MethodInfo {
    declaring: Type,
    name: &'static str,
    return_ty_id: TypeId,
    return_type_info: fn() -> &'static TypeInfo,
    receiver: Receiver,
}

impl MethodInfo {
    /// Creates a method of type `D` returning `R`.
    #[inline]
    pub const fn new<D: TypePath, R: Typed>(name: &'static str, receiver: Receiver) -> Self {
        Self {
            declaring: Type::of::<D>(),
            name,
            return_ty_id: TypeId::of::<R>(),
            return_type_info: R::type_info,
            receiver,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type that declares this method.
    #[inline]
    pub const fn declaring_type(&self) -> &Type {
        &self.declaring
    }

    /// Returns the [`TypeId`] of the return type.
    #[inline]
    pub const fn return_ty_id(&self) -> TypeId {
        self.return_ty_id
    }

    /// Returns the [`TypeInfo`] of the return type.
    #[inline]
    pub fn return_type_info(&self) -> &'static TypeInfo {
        (self.return_type_info)()
    }

    #[inline]
    pub const fn receiver(&self) -> Receiver {
        self.receiver
    }
}

impl PartialEq for MethodInfo {
    fn eq(&self, other: &Self) -> bool {
        self.declaring == other.declaring
            && self.name == other.name
            && self.return_ty_id == other.return_ty_id
    }
}

impl Eq for MethodInfo {}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}({}) -> {}",
            self.declaring.path(),
            self.name,
            self.receiver,
            self.return_type_info().type_path()
        )
    }
}
