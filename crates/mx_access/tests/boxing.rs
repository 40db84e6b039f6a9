mod common;

use common::Widths;
use mx_access::MemberDescriptor;
use mx_access::compile::{create_boxed_getter, create_getter, create_untyped_getter, create_untyped_setter};
use mx_reflect::Opaque;
use mx_reflect::info::Typed;

/// Reads `name` through every erased path and narrows it back to `V`.
fn check<V>(widths: &Widths, name: &str, expected: V)
where
    V: mx_reflect::Reflect + Typed + PartialEq + core::fmt::Debug,
{
    let member = MemberDescriptor::find::<Widths>(name).unwrap();
    assert!(member.value_type().type_is::<V>(), "{name}");

    let boxed = create_boxed_getter::<Widths>(&member).unwrap()(widths);
    assert_eq!(boxed.take::<V>().unwrap(), expected, "{name}");

    let untyped = create_untyped_getter(&member).unwrap()(widths).unwrap();
    assert_eq!(untyped.take::<V>().unwrap(), expected, "{name}");

    let opaque: Opaque = create_getter::<Widths, Opaque>(&member).unwrap()(widths);
    assert_eq!(opaque.take::<V>().unwrap(), expected, "{name}");
}

#[test]
fn narrowing_restores_every_width() {
    let w = Widths::extremes();

    check(&w, "i8", i8::MIN);
    check(&w, "i16", i16::MIN);
    check(&w, "i32", i32::MIN);
    check(&w, "i64", i64::MIN);
    check(&w, "i128", i128::MIN);
    check(&w, "isize", isize::MIN);
    check(&w, "u8", u8::MAX);
    check(&w, "u16", u16::MAX);
    check(&w, "u32", u32::MAX);
    check(&w, "u64", u64::MAX);
    check(&w, "u128", u128::MAX);
    check(&w, "usize", usize::MAX);
    check(&w, "f32", f32::MIN_POSITIVE);
    check(&w, "f64", -f64::EPSILON);
    check(&w, "bool", true);
    check(&w, "char", '\u{10FFFF}');
}

#[test]
fn narrowing_is_exact() {
    let w = Widths::extremes();
    let member = MemberDescriptor::find::<Widths>("u8").unwrap();

    let boxed = create_boxed_getter::<Widths>(&member).unwrap()(&w);
    let boxed = boxed.take::<i8>().unwrap_err();
    let boxed = boxed.take::<u16>().unwrap_err();
    assert_eq!(boxed.take::<u8>().unwrap(), u8::MAX);
}

#[test]
fn erased_writes_keep_the_bits() {
    let mut w = Widths::extremes();
    let set = create_untyped_setter(&MemberDescriptor::find::<Widths>("f64").unwrap()).unwrap();

    set(&mut w, Box::new(f64::NAN)).unwrap();
    assert!(w.f64.is_nan());

    set(&mut w, Box::new(-0.0_f64)).unwrap();
    assert!(w.f64.is_sign_negative() && w.f64 == 0.0);

    assert!(set(&mut w, Box::new(1.0_f32)).is_err());
    assert!(w.f64.is_sign_negative());
}
