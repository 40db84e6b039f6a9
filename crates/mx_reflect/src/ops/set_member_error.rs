use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;

/// A enumeration of all error outcomes that might happen when writing a
/// member through [`PropertyInfo::set`](crate::info::PropertyInfo::set).
///
/// The rejected value is handed back whenever the instance was left untouched.
#[derive(Debug)]
pub enum SetMemberError {
    /// The instance is not of the declaring type.
    Instance(Box<dyn Reflect>),
    /// The value is not of the member's type.
    Value(Box<dyn Reflect>),
    /// The member cannot be written.
    ReadOnly(Box<dyn Reflect>),
}

impl SetMemberError {
    /// Returns the value that was not written.
    pub fn into_value(self) -> Box<dyn Reflect> {
        match self {
            Self::Instance(value) | Self::Value(value) | Self::ReadOnly(value) => value,
        }
    }
}

impl fmt::Display for SetMemberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(_) => f.write_str("instance is not of the declaring type"),
            Self::Value(value) => write!(
                f,
                "value of type `{}` does not match the member type",
                value.reflect_type_path()
            ),
            Self::ReadOnly(_) => f.write_str("member is read-only"),
        }
    }
}

impl core::error::Error for SetMemberError {}
