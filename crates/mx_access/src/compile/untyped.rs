use alloc::boxed::Box;

use mx_reflect::Reflect;

use super::{Readable, UntypedGetter, UntypedSetter, Writable};
use super::{require, write_error};
use crate::{AccessError, MemberDescriptor};

/// Builds a getter reading the member of an erased instance into the opaque slot.
///
/// The getter returns `InstanceTypeMismatch` if the instance is not of the
/// declaring type.
///
/// # Errors
///
/// - `InvalidArgument` if `member` is `None`.
/// - `MemberNotFound` or `MemberTypeMismatch` if the descriptor does not
///   match the declaring type.
/// - `UnsupportedMember` for a method.
pub fn create_untyped_getter<'a>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<UntypedGetter, AccessError> {
    build_getter(member).map_err(|e| e.rejected("create_untyped_getter"))
}

fn build_getter<'a>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<UntypedGetter, AccessError> {
    let member = require(member)?;
    let readable = Readable::new(&member, member.resolve()?)?;

    log::trace!("compiled untyped getter of {member:?}");

    Ok(Box::new(move |instance: &dyn Reflect| {
        readable
            .read(instance)
            .ok_or_else(|| AccessError::InstanceTypeMismatch {
                expected: member.declaring_type().type_path(),
                found: instance.reflect_type_path(),
            })
    }))
}

/// Builds a setter writing the member of an erased instance from the opaque slot.
///
/// The setter checks the instance, then the value, and only then writes.
/// It returns `InstanceTypeMismatch` or `ValueTypeMismatch` on failure.
///
/// # Errors
///
/// Same as [`create_untyped_getter`], except that methods and read-only
/// properties are rejected with `MemberNotSettable`.
pub fn create_untyped_setter<'a>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<UntypedSetter, AccessError> {
    build_setter(member).map_err(|e| e.rejected("create_untyped_setter"))
}

fn build_setter<'a>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<UntypedSetter, AccessError> {
    let member = require(member)?;
    let writable = Writable::new(&member, member.resolve()?)?;

    log::trace!("compiled untyped setter of {member:?}");

    Ok(Box::new(
        move |instance: &mut dyn Reflect, value: Box<dyn Reflect>| {
            let instance_path = instance.reflect_type_path();
            writable
                .write(instance, value)
                .map_err(|e| write_error(&member, instance_path, e))
        },
    ))
}
