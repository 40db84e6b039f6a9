//! Provide some utilities for implementing reflection traits.
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`], [`GenericTypePathCell`]: The same for generic types.
//! - [`concat`]: An efficient string concatenation function.
//! - [`struct_partial_eq`], [`struct_debug`]: Used by the derived `Reflect` of structs.
//!
//! ## Implemented Menu
//!
//! - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `bool`, `char`
//! - `String`
//! - `()`
//! - `Option<T>`, `Vec<T>` (opaque, for any reflected `T: Clone`)
//! - `dyn Reflect` (`TypePath` and `Typed` only)
//!
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod native;
mod option;
mod struct_utils;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use struct_utils::{struct_debug, struct_partial_eq};

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath` on generic types.
///
/// ```
/// use mx_reflect::impls;
///
/// let s = impls::concat(&["alloc::vec::Vec", "<", "u8", ">"]);
///
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert_eq!(s.capacity(), 19);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = alloc::string::String::with_capacity(len);
    for item in arr {
        res.push_str(item);
    }
    res
}
