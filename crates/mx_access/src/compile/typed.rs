use alloc::boxed::Box;

use mx_reflect::Reflect;
use mx_reflect::info::{Typed, ValueType};

use super::{Getter, Readable, Setter, Writable};
use super::{check_entity, check_value, invariant_violated, narrow, require};
use crate::{AccessError, Expression, MemberDescriptor};

/// Builds a getter reading the member of a `T` as a `V`.
///
/// `V` is the value type of the member, or [`Opaque`](mx_reflect::Opaque)
/// to box the value.
///
/// # Errors
///
/// - `InvalidArgument` if `member` is `None`.
/// - `MemberNotFound` or `MemberTypeMismatch` if the descriptor does not
///   match the declaring type.
/// - `EntityTypeMismatch` if `T` is not the declaring type.
/// - `MemberTypeMismatch` if `V` is not the value type.
/// - `UnsupportedMember` for a method.
pub fn create_getter<'a, T, V>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<Getter<T, V>, AccessError>
where
    T: Reflect + Typed,
    V: ValueType,
{
    build_getter(member).map_err(|e| e.rejected("create_getter"))
}

fn build_getter<'a, T, V>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<Getter<T, V>, AccessError>
where
    T: Reflect + Typed,
    V: ValueType,
{
    let member = require(member)?;
    let resolved = member.resolve()?;
    check_entity::<T>(&member)?;
    check_value::<V>(&member, true)?;
    let readable = Readable::new(&member, resolved)?;

    log::trace!("compiled typed getter of {member:?}");

    Ok(Box::new(move |instance: &T| {
        match readable.read(instance).and_then(narrow::<V>) {
            Some(value) => value,
            None => invariant_violated(&member),
        }
    }))
}

/// Builds a setter writing the member of a `T` from a `V`.
///
/// `V` must be exactly the value type of the member.
///
/// # Errors
///
/// Same as [`create_getter`], except that methods and read-only
/// properties are rejected with `MemberNotSettable`.
pub fn create_setter<'a, T, V>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<Setter<T, V>, AccessError>
where
    T: Reflect + Typed,
    V: Reflect + Typed,
{
    build_setter(member).map_err(|e| e.rejected("create_setter"))
}

fn build_setter<'a, T, V>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<Setter<T, V>, AccessError>
where
    T: Reflect + Typed,
    V: Reflect + Typed,
{
    let member = require(member)?;
    let resolved = member.resolve()?;
    check_entity::<T>(&member)?;
    check_value::<V>(&member, false)?;

    let setter: Setter<T, V> = match Writable::new(&member, resolved)? {
        Writable::Field(field) => Box::new(move |instance: &mut T, value: V| {
            match field.get_mut(instance).and_then(<dyn Reflect>::downcast_mut::<V>) {
                Some(slot) => *slot = value,
                None => invariant_violated(&member),
            }
        }),
        Writable::Property(property) => Box::new(move |instance: &mut T, value: V| {
            if property.set(instance, Box::new(value)).is_err() {
                invariant_violated(&member);
            }
        }),
    };

    log::trace!("compiled typed setter of {member:?}");

    Ok(setter)
}

/// Builds a getter for the member accessed by `expression`.
///
/// The value type is the result type of the expression, so an
/// `Expression<T>` yields a getter into the opaque slot.
pub fn getter_from<'a, T, R>(
    expression: impl Into<Option<&'a Expression<T, R>>>,
) -> Result<Getter<T, R>, AccessError>
where
    T: Reflect + Typed,
    R: ValueType,
{
    let member = crate::extract::member_info(expression)?;
    create_getter::<T, R>(&member)
}

/// Builds a setter for the member accessed by `expression`.
///
/// The result type of the expression must be the value type of the member.
/// For an `Expression<T>`, use [`create_boxed_setter`](super::create_boxed_setter)
/// with the extracted descriptor.
pub fn setter_from<'a, T, R>(
    expression: impl Into<Option<&'a Expression<T, R>>>,
) -> Result<Setter<T, R>, AccessError>
where
    T: Reflect + Typed,
    R: Reflect + Typed,
{
    let member = crate::extract::member_info(expression)?;
    create_setter::<T, R>(&member)
}

impl<T: Reflect + Typed, R: ValueType> Expression<T, R> {
    /// See [`getter_from`].
    #[inline]
    pub fn create_getter(&self) -> Result<Getter<T, R>, AccessError> {
        getter_from(self)
    }
}

impl<T: Reflect + Typed, R: Reflect + Typed> Expression<T, R> {
    /// See [`setter_from`].
    #[inline]
    pub fn create_setter(&self) -> Result<Setter<T, R>, AccessError> {
        setter_from(self)
    }
}
