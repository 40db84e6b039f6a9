use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Static names of a reflected type.
///
/// - [`type_path`]: the unique identifier of the type, e.g. `alloc::string::String`.
/// - [`type_name`]: the short name used in messages, e.g. `String` or `Option<u8>`.
///
/// Neither name starts with `::`. [`#[derive(Reflect)`](crate::derive::Reflect)
/// and [`impl_reflect_opaque!`](crate::derive::impl_reflect_opaque) implement
/// this trait, generic containers build their names once per instantiation.
///
/// ```
/// use mx_reflect::info::TypePath;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::foo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
/// }
///
/// assert_eq!(<Option<u8>>::type_name(), "Option<u8>");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the type, unique per type.
    fn type_path() -> &'static str;

    /// Returns the short name of the type, may be shared by several types.
    fn type_name() -> &'static str;
}

/// Object-safe access to [`TypePath`], implemented for every `TypePath` type.
///
/// ```
/// use mx_reflect::Reflect;
///
/// let x: Box<dyn Reflect> = Box::new(1_u8);
/// assert_eq!(x.reflect_type_path(), "u8");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] with the names of the type.
///
/// Equality and hashing only look at the id.
///
/// ```
/// use mx_reflect::info::Type;
///
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// assert_eq!(ty.name(), "String");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_id: TypeId,
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
}

impl Type {
    /// Captures the id and names of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_name: T::type_name,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if this is the type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Forwards the `Type` queries of an info struct.
///
/// With a field name, `ty()` returns that field, otherwise the caller defines `ty()`.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Type, TypePath};

    struct Local;

    impl TypePath for Local {
        fn type_path() -> &'static str {
            "my_crate::nested::Local"
        }
        fn type_name() -> &'static str {
            "Local"
        }
    }

    #[test]
    fn names_come_from_the_type() {
        let ty = Type::of::<Local>();
        assert_eq!(ty.path(), "my_crate::nested::Local");
        assert_eq!(ty.name(), "Local");
        assert!(ty.is::<Local>());
        assert!(!ty.is::<i32>());
    }

    #[test]
    fn equality_only_by_id() {
        assert_eq!(Type::of::<Local>(), Type::of::<Local>());
        assert_ne!(Type::of::<Local>(), Type::of::<u8>());
        assert_eq!(alloc::format!("{:?}", Type::of::<u8>()), "u8");
    }
}
