//! Items referenced by the code that `mx_reflect_derive` generates.
//!
//! The caller may be a `no_std` crate without `alloc` in its prelude,
//! so generated code reaches `Box` and friends through this module.

pub mod macro_utils {
    pub use alloc::boxed::Box;
    pub use alloc::string::String;
}
