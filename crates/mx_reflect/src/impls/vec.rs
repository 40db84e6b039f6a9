use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }
}

impl<T: TypePath> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl<T: Reflect + Typed + Clone> Reflect for Vec<T> {
    impl_reflect_cast_fn!(Opaque);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    /// Element-wise, the first result that is not `Some(true)` is returned.
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let Some(other) = other.downcast_ref::<Self>() else {
            return Some(false);
        };
        if self.len() != other.len() {
            return Some(false);
        }
        for (x, y) in self.iter().zip(other) {
            match x.reflect_partial_eq(y) {
                Some(true) => (),
                res => return res,
            }
        }
        Some(true)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter().map(Reflect::as_reflect)).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;
    use alloc::{format, vec};

    use crate::Reflect;
    use crate::info::{TypePath, Typed};

    #[test]
    fn names_follow_the_argument() {
        assert_eq!(<Vec<String>>::type_path(), "alloc::vec::Vec<alloc::string::String>");
        assert_eq!(<Vec<Option<u8>>>::type_name(), "Vec<Option<u8>>");
        assert!(<Vec<u8>>::type_info().type_is::<Vec<u8>>());
    }

    #[test]
    fn element_wise_eq() {
        let value: Box<dyn Reflect> = Box::new(vec![1_i64, 2, 3]);

        assert_eq!(value.reflect_partial_eq(&vec![1_i64, 2, 3]), Some(true));
        assert_eq!(value.reflect_partial_eq(&vec![1_i64, 2]), Some(false));
        assert_eq!(value.reflect_partial_eq(&vec![1_i64, 2, 4]), Some(false));
        assert_eq!(value.reflect_partial_eq(&vec![1_i32, 2, 3]), Some(false));
        assert_eq!(format!("{value:?}"), "[1, 2, 3]");
    }

    #[test]
    fn clone_is_deep() {
        let value = vec![String::from("a")];
        let cloned = value.reflect_clone().take::<Vec<String>>().unwrap();
        assert_eq!(cloned, value);
    }
}
