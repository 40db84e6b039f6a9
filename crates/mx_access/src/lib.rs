#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// `lambda!` resolves this crate through `macro_utils::Manifest`, which yields
// `::mx_access` inside the crate itself.
extern crate self as mx_access;

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod descriptor;
mod error;

pub mod compile;
pub mod expr;
pub mod extract;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use descriptor::{MemberDescriptor, MemberKind};
pub use error::AccessError;
pub use expr::{Expr, ExprError, Expression};

pub use mx_access_macros::lambda;

#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::string::String;
    pub use mx_reflect::Opaque;
    pub use mx_reflect::info::{Typed, ValueType};
}
