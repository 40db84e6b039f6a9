//! Provide data operations on reflected values.
//!
//! - [`SetMemberError`]: The failure of writing a member through erased glue.

// -----------------------------------------------------------------------------
// Modules

mod set_member_error;

// -----------------------------------------------------------------------------
// Exports

pub use set_member_error::SetMemberError;
