use alloc::boxed::Box;

use crate::Reflect;
use crate::derive::impl_reflect_opaque;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

impl_reflect_opaque!(i8(clone, debug, partial_eq));
impl_reflect_opaque!(i16(clone, debug, partial_eq));
impl_reflect_opaque!(i32(clone, debug, partial_eq));
impl_reflect_opaque!(i64(clone, debug, partial_eq));
impl_reflect_opaque!(i128(clone, debug, partial_eq));
impl_reflect_opaque!(isize(clone, debug, partial_eq));
impl_reflect_opaque!(u8(clone, debug, partial_eq));
impl_reflect_opaque!(u16(clone, debug, partial_eq));
impl_reflect_opaque!(u32(clone, debug, partial_eq));
impl_reflect_opaque!(u64(clone, debug, partial_eq));
impl_reflect_opaque!(u128(clone, debug, partial_eq));
impl_reflect_opaque!(usize(clone, debug, partial_eq));
impl_reflect_opaque!(f32(clone, debug, partial_eq));
impl_reflect_opaque!(f64(clone, debug, partial_eq));
impl_reflect_opaque!(bool(clone, debug, partial_eq));
impl_reflect_opaque!(char(clone, debug, partial_eq));
impl_reflect_opaque!(::alloc::string::String(clone, debug, partial_eq));

// `()` is not a path, so the macro cannot name it.

impl TypePath for () {
    #[inline]
    fn type_path() -> &'static str {
        "()"
    }
    #[inline]
    fn type_name() -> &'static str {
        "()"
    }
}

impl Typed for () {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for () {
    impl_reflect_cast_fn!(Opaque);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(())
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.is::<()>())
    }

    fn reflect_debug(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("()")
    }
}

// -----------------------------------------------------------------------------
// Tests
