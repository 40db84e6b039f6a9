use crate::info::{Type, TypePath, impl_type_fn};

/// Container for compile-time opaque type information.
///
/// Opaque types expose no members to reflection, for example `i32`
/// or `String`.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
