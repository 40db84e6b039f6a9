mod common;

use common::Dummy;
use mx_access::compile::{
    create_boxed_getter, create_boxed_setter, create_getter, create_setter,
    create_untyped_getter, create_untyped_setter,
};
use mx_access::{AccessError, MemberDescriptor, MemberKind};
use mx_reflect::info::{TypePath, Typed};
use mx_reflect::{Opaque, Reflect};

fn member(name: &str) -> MemberDescriptor {
    MemberDescriptor::find::<Dummy>(name).unwrap()
}

fn dummy() -> Dummy {
    Dummy {
        string_field: String::from("field"),
        int_field: 7,
        string_backing: String::from("property"),
        int_backing: 123,
    }
}

#[test]
fn typed_getters_read_fields_and_properties() {
    let d = dummy();

    assert_eq!(create_getter::<Dummy, i32>(&member("int_property")).unwrap()(&d), 123);
    assert_eq!(create_getter::<Dummy, i32>(&member("int_field")).unwrap()(&d), 7);
    assert_eq!(
        create_getter::<Dummy, String>(&member("string_property")).unwrap()(&d),
        "property"
    );
    assert_eq!(
        create_getter::<Dummy, String>(&member("string_field")).unwrap()(&d),
        "field"
    );
}

#[test]
fn typed_setters_write_fields_and_properties() {
    let mut d = Dummy::default();

    create_setter::<Dummy, String>(&member("string_field")).unwrap()(&mut d, String::from("abc"));
    assert_eq!(d.string_field, "abc");

    create_setter::<Dummy, i32>(&member("int_field")).unwrap()(&mut d, -4);
    assert_eq!(d.int_field, -4);

    create_setter::<Dummy, String>(&member("string_property")).unwrap()(&mut d, String::from("xyz"));
    assert_eq!(d.string_property(), "xyz");

    create_setter::<Dummy, i32>(&member("int_property")).unwrap()(&mut d, 99);
    assert_eq!(d.int_property(), 99);
}

#[test]
fn every_path_round_trips() {
    for name in ["string_field", "string_property"] {
        let m = member(name);
        let value = String::from(name);

        let mut d = Dummy::default();
        create_setter::<Dummy, String>(&m).unwrap()(&mut d, value.clone());
        assert_eq!(create_getter::<Dummy, String>(&m).unwrap()(&d), value);

        let mut d = Dummy::default();
        create_boxed_setter::<Dummy>(&m).unwrap()(&mut d, Box::new(value.clone())).unwrap();
        let read = create_boxed_getter::<Dummy>(&m).unwrap()(&d);
        assert_eq!(read.take::<String>().unwrap(), value);

        let mut d = Dummy::default();
        create_untyped_setter(&m).unwrap()(&mut d, Box::new(value.clone())).unwrap();
        let read = create_untyped_getter(&m).unwrap()(&d).unwrap();
        assert_eq!(read.take::<String>().unwrap(), value);
    }

    for name in ["int_field", "int_property"] {
        let m = member(name);

        let mut d = Dummy::default();
        create_setter::<Dummy, i32>(&m).unwrap()(&mut d, 42);
        assert_eq!(create_getter::<Dummy, i32>(&m).unwrap()(&d), 42);

        let mut d = Dummy::default();
        create_boxed_setter::<Dummy>(&m).unwrap()(&mut d, Box::new(43_i32)).unwrap();
        assert_eq!(create_boxed_getter::<Dummy>(&m).unwrap()(&d).take::<i32>().unwrap(), 43);

        let mut d = Dummy::default();
        create_untyped_setter(&m).unwrap()(&mut d, Box::new(44_i32)).unwrap();
        let read = create_untyped_getter(&m).unwrap()(&d).unwrap();
        assert_eq!(read.take::<i32>().unwrap(), 44);
    }
}

#[test]
fn paths_agree() {
    let d = dummy();

    for name in ["int_field", "int_property"] {
        let m = member(name);
        let typed = create_getter::<Dummy, i32>(&m).unwrap()(&d);
        let opaque = create_getter::<Dummy, Opaque>(&m).unwrap()(&d);
        let boxed = create_boxed_getter::<Dummy>(&m).unwrap()(&d);
        let untyped = create_untyped_getter(&m).unwrap()(&d).unwrap();

        assert_eq!(opaque.take::<i32>().unwrap(), typed);
        assert_eq!(boxed.take::<i32>().unwrap(), typed);
        assert_eq!(untyped.take::<i32>().unwrap(), typed);
    }
}

#[test]
fn wrong_value_is_not_written() {
    let mut d = dummy();
    let before = d.clone();

    for name in ["string_field", "string_property"] {
        let set = create_boxed_setter::<Dummy>(&member(name)).unwrap();
        assert_eq!(
            set(&mut d, Box::new(5_i32)),
            Err(AccessError::ValueTypeMismatch {
                expected: String::type_path(),
                found: "i32",
            })
        );

        let set = create_untyped_setter(&member(name)).unwrap();
        assert!(matches!(
            set(&mut d, Box::new(5_u8)),
            Err(AccessError::ValueTypeMismatch { found: "u8", .. })
        ));
    }

    let set = create_boxed_setter::<Dummy>(&member("int_field")).unwrap();
    assert!(matches!(
        set(&mut d, Box::new(5_i64)),
        Err(AccessError::ValueTypeMismatch { expected: "i32", found: "i64" })
    ));

    assert_eq!(d, before);
}

#[test]
fn absent_member_is_rejected_everywhere() {
    let none = None::<&MemberDescriptor>;
    let expected = Some(AccessError::InvalidArgument { name: "member" });

    assert_eq!(create_getter::<Dummy, i32>(none).err(), expected);
    assert_eq!(create_setter::<Dummy, i32>(none).err(), expected);
    assert_eq!(create_boxed_getter::<Dummy>(none).err(), expected);
    assert_eq!(create_boxed_setter::<Dummy>(none).err(), expected);
    assert_eq!(create_untyped_getter(none).err(), expected);
    assert_eq!(create_untyped_setter(none).err(), expected);
}

#[test]
fn static_types_are_checked() {
    assert_eq!(
        create_getter::<Dummy, i64>(&member("int_field")).err(),
        Some(AccessError::MemberTypeMismatch {
            name: "int_field",
            expected: "i32",
            found: "i64",
        })
    );

    // the opaque slot is only accepted by getters
    assert!(create_getter::<Dummy, Opaque>(&member("int_field")).is_ok());

    assert_eq!(
        create_setter::<Dummy, u32>(&member("int_property")).err(),
        Some(AccessError::MemberTypeMismatch {
            name: "int_property",
            expected: "i32",
            found: "u32",
        })
    );

    assert_eq!(
        create_boxed_setter::<String>(&member("string_field")).err(),
        Some(AccessError::EntityTypeMismatch {
            expected: Dummy::type_path(),
            found: String::type_path(),
        })
    );
}

#[test]
fn methods_are_neither_read_nor_written() {
    let m = member("int_method");
    assert_eq!(m.kind(), MemberKind::Method);

    assert_eq!(
        create_getter::<Dummy, i32>(&m).err(),
        Some(AccessError::UnsupportedMember {
            name: "int_method",
            kind: MemberKind::Method,
        })
    );
    assert_eq!(
        create_setter::<Dummy, i32>(&m).err(),
        Some(AccessError::MemberNotSettable {
            name: "int_method",
            kind: MemberKind::Method,
        })
    );
    assert!(matches!(
        create_untyped_setter(&member("void_method")),
        Err(AccessError::MemberNotSettable { .. })
    ));
}

#[test]
fn hand_built_descriptors_are_resolved() {
    let missing = MemberDescriptor::new(
        "float_field",
        Dummy::type_info(),
        f32::type_info(),
        MemberKind::Field,
    );
    assert!(matches!(
        create_boxed_getter::<Dummy>(&missing),
        Err(AccessError::MemberNotFound { name: "float_field", kind: MemberKind::Field, .. })
    ));

    let wrong_type = MemberDescriptor::new(
        "int_property",
        Dummy::type_info(),
        i64::type_info(),
        MemberKind::Property,
    );
    assert!(matches!(
        create_untyped_getter(&wrong_type),
        Err(AccessError::MemberTypeMismatch { name: "int_property", .. })
    ));

    let by_info = MemberDescriptor::of_property::<Dummy>(
        Dummy::type_info()
            .as_struct()
            .unwrap()
            .property("int_property")
            .unwrap(),
    );
    assert_eq!(by_info, member("int_property"));
    assert_eq!(create_getter::<Dummy, i32>(&by_info).unwrap()(&dummy()), 123);
}

#[test]
fn erased_instance_must_match() {
    let get = create_untyped_getter(&member("string_field")).unwrap();
    let other: Box<dyn Reflect> = Box::new(String::from("not a dummy"));

    assert_eq!(
        get(&*other).err(),
        Some(AccessError::InstanceTypeMismatch {
            expected: Dummy::type_path(),
            found: String::type_path(),
        })
    );
}

#[test]
fn accessors_are_shareable() {
    fn assert_send_sync<F: Send + Sync>(_: &F) {}

    let get = create_getter::<Dummy, i32>(&member("int_field")).unwrap();
    let set = create_untyped_setter(&member("int_field")).unwrap();
    assert_send_sync(&get);
    assert_send_sync(&set);

    let d = dummy();
    std::thread::scope(|scope| {
        let readers: Vec<_> = (0..4).map(|_| scope.spawn(|| get(&d))).collect();
        for reader in readers {
            assert_eq!(reader.join().unwrap(), 7);
        }
    });
}
