//! Build getters and setters for a member.
//!
//! Accessors are specialised on how much is known statically:
//!
//! | entry points | entity | value |
//! |---|---|---|
//! | [`create_getter`], [`create_setter`] | `&T` | `V` |
//! | [`create_boxed_getter`], [`create_boxed_setter`] | `&T` | `Box<dyn Reflect>` |
//! | [`create_untyped_getter`], [`create_untyped_setter`] | `&dyn Reflect` | `Box<dyn Reflect>` |
//! | [`getter_from`], [`setter_from`] | `&T` | the result type of the expression |
//!
//! Every check that can be done without an instance is done when the
//! accessor is built, so typed accessors never fail afterwards. Erased
//! accessors check the instance and the value before writing anything.
//!
//! Accessors are not cached, each call builds a new closure.
//!
//! ```
//! use mx_access::{MemberDescriptor, compile};
//! use mx_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Clone)]
//! struct Item {
//!     count: u32,
//! }
//!
//! let count = MemberDescriptor::find::<Item>("count").unwrap();
//! let get = compile::create_getter::<Item, u32>(&count).unwrap();
//! let set = compile::create_setter::<Item, u32>(&count).unwrap();
//!
//! let mut item = Item { count: 1 };
//! set(&mut item, 5);
//! assert_eq!(get(&item), 5);
//! ```

use alloc::boxed::Box;
use core::any::{Any, TypeId};

use mx_reflect::info::{NamedField, PropertyInfo, TypePath, ValueType};
use mx_reflect::ops::SetMemberError;
use mx_reflect::{Opaque, Reflect};

use crate::descriptor::ResolvedMember;
use crate::{AccessError, MemberDescriptor, MemberKind};

// -----------------------------------------------------------------------------
// Modules

mod boxed;
mod typed;
mod untyped;

// -----------------------------------------------------------------------------
// Exports

pub use boxed::{create_boxed_getter, create_boxed_setter};
pub use typed::{create_getter, create_setter, getter_from, setter_from};
pub use untyped::{create_untyped_getter, create_untyped_setter};

/// Reads a member of a `T` as a `V`.
pub type Getter<T, V> = Box<dyn Fn(&T) -> V + Send + Sync>;

/// Writes a member of a `T` from a `V`.
pub type Setter<T, V> = Box<dyn Fn(&mut T, V) + Send + Sync>;

/// Reads a member of a `T` into the opaque slot.
pub type BoxedGetter<T> = Box<dyn Fn(&T) -> Box<dyn Reflect> + Send + Sync>;

/// Writes a member of a `T` from the opaque slot.
pub type BoxedSetter<T> =
    Box<dyn Fn(&mut T, Box<dyn Reflect>) -> Result<(), AccessError> + Send + Sync>;

/// Reads a member of an erased instance into the opaque slot.
pub type UntypedGetter =
    Box<dyn Fn(&dyn Reflect) -> Result<Box<dyn Reflect>, AccessError> + Send + Sync>;

/// Writes a member of an erased instance from the opaque slot.
pub type UntypedSetter =
    Box<dyn Fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), AccessError> + Send + Sync>;

// -----------------------------------------------------------------------------
// Readable & Writable

/// A member that can be read.
#[derive(Clone, Copy)]
enum Readable {
    Field(&'static NamedField),
    Property(&'static PropertyInfo),
}

impl Readable {
    /// Methods are not readable.
    fn new(member: &MemberDescriptor, resolved: ResolvedMember) -> Result<Self, AccessError> {
        match resolved {
            ResolvedMember::Field(field) => Ok(Self::Field(field)),
            ResolvedMember::Property(property) => Ok(Self::Property(property)),
            ResolvedMember::Method(_) => Err(AccessError::UnsupportedMember {
                name: member.name(),
                kind: MemberKind::Method,
            }),
        }
    }

    /// Returns `None` if `instance` is not of the declaring type.
    ///
    /// Fields are cloned, properties return what their getter returns.
    fn read(self, instance: &dyn Reflect) -> Option<Box<dyn Reflect>> {
        match self {
            Self::Field(field) => field.get(instance).map(|value| value.reflect_clone()),
            Self::Property(property) => property.get(instance),
        }
    }
}

/// A member that can be written.
#[derive(Clone, Copy)]
enum Writable {
    Field(&'static NamedField),
    Property(&'static PropertyInfo),
}

impl Writable {
    /// Methods and read-only properties are not writable.
    fn new(member: &MemberDescriptor, resolved: ResolvedMember) -> Result<Self, AccessError> {
        let not_settable = AccessError::MemberNotSettable {
            name: member.name(),
            kind: member.kind(),
        };
        match resolved {
            ResolvedMember::Field(field) => Ok(Self::Field(field)),
            ResolvedMember::Property(property) if property.is_writable() => {
                Ok(Self::Property(property))
            }
            ResolvedMember::Property(_) | ResolvedMember::Method(_) => Err(not_settable),
        }
    }

    /// The instance and the value are checked before the member is written.
    fn write(self, instance: &mut dyn Reflect, value: Box<dyn Reflect>) -> Result<(), SetMemberError> {
        match self {
            Self::Field(field) => match field.get_mut(instance) {
                Some(slot) => slot.set(value).map_err(SetMemberError::Value),
                None => Err(SetMemberError::Instance(value)),
            },
            Self::Property(property) => property.set(instance, value),
        }
    }
}

// -----------------------------------------------------------------------------
// Checks

fn require<'a>(
    member: impl Into<Option<&'a MemberDescriptor>>,
) -> Result<MemberDescriptor, AccessError> {
    member
        .into()
        .copied()
        .ok_or(AccessError::InvalidArgument { name: "member" })
}

/// `T` must be the declaring type of the member.
fn check_entity<T: TypePath + 'static>(member: &MemberDescriptor) -> Result<(), AccessError> {
    if member.declaring_type().ty_id() == TypeId::of::<T>() {
        Ok(())
    } else {
        Err(AccessError::EntityTypeMismatch {
            expected: member.declaring_type().type_path(),
            found: T::type_path(),
        })
    }
}

/// `V` must be the value type of the member, or the opaque slot if allowed.
fn check_value<V: ValueType>(member: &MemberDescriptor, allow_opaque: bool) -> Result<(), AccessError> {
    if member.value_type().ty_id() == TypeId::of::<V>() || (allow_opaque && is_opaque::<V>()) {
        Ok(())
    } else {
        Err(AccessError::MemberTypeMismatch {
            name: member.name(),
            expected: member.value_type().type_path(),
            found: V::value_info().type_path(),
        })
    }
}

#[inline]
fn is_opaque<V: 'static>() -> bool {
    TypeId::of::<V>() == TypeId::of::<Opaque>()
}

/// Turn a boxed value into `V`, which may itself be the opaque slot.
fn narrow<V: 'static>(value: Box<dyn Reflect>) -> Option<V> {
    if is_opaque::<V>() {
        let slot: Box<dyn Any> = Box::new(value);
        slot.downcast::<V>().ok().map(|value| *value)
    } else {
        value.take::<V>().ok()
    }
}

/// Errors of the glue, as seen from an accessor.
fn write_error(
    member: &MemberDescriptor,
    instance_path: &'static str,
    error: SetMemberError,
) -> AccessError {
    match error {
        SetMemberError::Instance(_) => AccessError::InstanceTypeMismatch {
            expected: member.declaring_type().type_path(),
            found: instance_path,
        },
        SetMemberError::Value(value) => AccessError::ValueTypeMismatch {
            expected: member.value_type().type_path(),
            found: value.reflect_type_path(),
        },
        SetMemberError::ReadOnly(_) => AccessError::MemberNotSettable {
            name: member.name(),
            kind: member.kind(),
        },
    }
}

/// A typed accessor was handed a value its checks ruled out.
#[cold]
#[inline(never)]
fn invariant_violated(member: &MemberDescriptor) -> ! {
    unreachable!("accessor of {member:?} disagrees with the type metadata")
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use mx_reflect::derive::{Reflect, reflect_members};
    use mx_reflect::info::TypePath;
    use mx_reflect::{Opaque, Reflect};

    use super::*;
    use crate::{AccessError, MemberDescriptor, MemberKind};

    #[derive(Reflect, Clone)]
    #[reflect(members)]
    struct Gauge {
        reading: i64,
        unit: String,
    }

    #[reflect_members]
    impl Gauge {
        #[reflect(get)]
        fn doubled(&self) -> i64 {
            self.reading * 2
        }

        #[reflect(method)]
        fn zero(&mut self) {
            self.reading = 0;
        }
    }

    fn gauge() -> Gauge {
        Gauge {
            reading: 7,
            unit: String::from("bar"),
        }
    }

    fn member(name: &str) -> MemberDescriptor {
        MemberDescriptor::find::<Gauge>(name).unwrap()
    }

    #[test]
    fn narrow_keeps_or_unboxes() {
        let value: Box<dyn Reflect> = Box::new(5_i64);
        assert_eq!(narrow::<i64>(value), Some(5));

        let value: Box<dyn Reflect> = Box::new(5_i64);
        assert_eq!(narrow::<u64>(value), None);

        let value: Box<dyn Reflect> = Box::new(5_i64);
        let slot = narrow::<Opaque>(value).unwrap();
        assert_eq!(slot.take::<i64>().ok(), Some(5));
    }

    #[test]
    fn construction_checks_in_order() {
        assert_eq!(
            create_getter::<Gauge, i64>(None::<&MemberDescriptor>).err(),
            Some(AccessError::InvalidArgument { name: "member" })
        );
        assert_eq!(
            create_getter::<Gauge, u8>(&member("reading")).err(),
            Some(AccessError::MemberTypeMismatch {
                name: "reading",
                expected: "i64",
                found: "u8",
            })
        );
        assert_eq!(
            create_boxed_getter::<u8>(&member("reading")).err(),
            Some(AccessError::EntityTypeMismatch {
                expected: Gauge::type_path(),
                found: "u8",
            })
        );
        assert_eq!(
            create_untyped_getter(&member("zero")).err(),
            Some(AccessError::UnsupportedMember {
                name: "zero",
                kind: MemberKind::Method,
            })
        );
        assert_eq!(
            create_untyped_setter(&member("doubled")).err(),
            Some(AccessError::MemberNotSettable {
                name: "doubled",
                kind: MemberKind::Property,
            })
        );
        assert_eq!(
            create_boxed_setter::<Gauge>(&member("zero")).err(),
            Some(AccessError::MemberNotSettable {
                name: "zero",
                kind: MemberKind::Method,
            })
        );
    }

    #[test]
    fn typed_accessors() {
        let get = create_getter::<Gauge, i64>(&member("reading")).unwrap();
        let set = create_setter::<Gauge, i64>(&member("reading")).unwrap();
        let doubled = create_getter::<Gauge, i64>(&member("doubled")).unwrap();

        let mut g = gauge();
        set(&mut g, -3);
        assert_eq!(g.reading, -3);
        assert_eq!(get(&g), -3);
        assert_eq!(doubled(&g), -6);

        let boxed = create_getter::<Gauge, Opaque>(&member("unit")).unwrap();
        assert_eq!(boxed(&g).take::<String>().unwrap(), "bar");
    }

    #[test]
    fn erased_accessors_check_the_instance() {
        let get = create_untyped_getter(&member("unit")).unwrap();
        let set = create_untyped_setter(&member("unit")).unwrap();

        let not_a_gauge = 1_u8;
        assert_eq!(
            get(&not_a_gauge).err(),
            Some(AccessError::InstanceTypeMismatch {
                expected: Gauge::type_path(),
                found: "u8",
            })
        );

        let mut not_a_gauge = 1_u8;
        assert!(matches!(
            set(&mut not_a_gauge, Box::new(String::from("psi"))),
            Err(AccessError::InstanceTypeMismatch { found: "u8", .. })
        ));
        assert_eq!(not_a_gauge, 1);
    }

    #[test]
    fn erased_setter_rejects_wrong_values() {
        let set = create_boxed_setter::<Gauge>(&member("unit")).unwrap();

        let mut g = gauge();
        assert_eq!(
            set(&mut g, Box::new(3_u32)),
            Err(AccessError::ValueTypeMismatch {
                expected: String::type_path(),
                found: "u32",
            })
        );
        assert_eq!(g.unit, "bar");

        set(&mut g, Box::new(String::from("psi"))).unwrap();
        assert_eq!(g.unit, "psi");
    }
}
