use alloc::boxed::Box;

use mx_reflect::Reflect;
use mx_reflect::info::Typed;

use super::{BoxedGetter, BoxedSetter, Readable, Writable};
use super::{check_entity, invariant_violated, require, write_error};
use crate::{AccessError, MemberDescriptor};

/// Builds a getter reading the member of a `T` into the opaque slot.
///
/// # Errors
///
/// See [`create_getter`](super::create_getter), there is no value type to check.
pub fn create_boxed_getter<'a, T>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<BoxedGetter<T>, AccessError>
where
    T: Reflect + Typed,
{
    build_getter(member).map_err(|e| e.rejected("create_boxed_getter"))
}

fn build_getter<'a, T>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<BoxedGetter<T>, AccessError>
where
    T: Reflect + Typed,
{
    let member = require(member)?;
    let resolved = member.resolve()?;
    check_entity::<T>(&member)?;
    let readable = Readable::new(&member, resolved)?;

    log::trace!("compiled boxed getter of {member:?}");

    Ok(Box::new(move |instance: &T| {
        readable
            .read(instance)
            .unwrap_or_else(|| invariant_violated(&member))
    }))
}

/// Builds a setter writing the member of a `T` from the opaque slot.
///
/// The setter returns `ValueTypeMismatch` if the box does not hold exactly
/// the value type of the member, and the instance is left untouched.
///
/// # Errors
///
/// See [`create_setter`](super::create_setter), there is no value type to check.
pub fn create_boxed_setter<'a, T>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<BoxedSetter<T>, AccessError>
where
    T: Reflect + Typed,
{
    build_setter(member).map_err(|e| e.rejected("create_boxed_setter"))
}

fn build_setter<'a, T>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<BoxedSetter<T>, AccessError>
where
    T: Reflect + Typed,
{
    let member = require(member)?;
    let resolved = member.resolve()?;
    check_entity::<T>(&member)?;
    let writable = Writable::new(&member, resolved)?;

    log::trace!("compiled boxed setter of {member:?}");

    Ok(Box::new(move |instance: &mut T, value: Box<dyn Reflect>| {
        writable
            .write(instance, value)
            .map_err(|e| write_error(&member, T::type_path(), e))
    }))
}
