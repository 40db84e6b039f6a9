mod common;

use common::Account;
use mx_access::compile::{
    create_boxed_getter, create_boxed_setter, create_getter, create_setter,
    create_untyped_getter, create_untyped_setter,
};
use mx_access::{AccessError, Expression, MemberDescriptor, MemberKind, extract, lambda};
use mx_reflect::info::{TypePath, Typed};
use mx_reflect::{Opaque, Reflect};

fn member(name: &str) -> MemberDescriptor {
    MemberDescriptor::find::<Account>(name).unwrap()
}

fn account() -> Account {
    Account {
        id: 1,
        nickname: Some(String::from("neo")),
        tag_backing: vec![String::from("a"), String::from("b")],
    }
}

#[test]
fn container_members_are_described() {
    let nickname = member("nickname");
    assert_eq!(nickname.kind(), MemberKind::Field);
    assert!(nickname.value_type().type_is::<Option<String>>());
    assert_eq!(nickname.value_type().type_name(), "Option<String>");

    let tags = member("tags");
    assert_eq!(tags.kind(), MemberKind::Property);
    assert!(tags.value_type().type_is::<Vec<String>>());

    let first_tag = member("first_tag");
    assert_eq!(first_tag.kind(), MemberKind::Method);
    assert!(first_tag.value_type().type_is::<Option<String>>());
}

#[test]
fn typed_accessors() {
    let mut a = account();

    let get_nickname = create_getter::<Account, Option<String>>(&member("nickname")).unwrap();
    let set_nickname = create_setter::<Account, Option<String>>(&member("nickname")).unwrap();
    assert_eq!(get_nickname(&a).as_deref(), Some("neo"));
    set_nickname(&mut a, None);
    assert_eq!(get_nickname(&a), None);

    let get_tags = create_getter::<Account, Vec<String>>(&member("tags")).unwrap();
    let set_tags = create_setter::<Account, Vec<String>>(&member("tags")).unwrap();
    set_tags(&mut a, vec![String::from("z")]);
    assert_eq!(get_tags(&a), ["z"]);
    assert_eq!(a.first_tag().as_deref(), Some("z"));
}

#[test]
fn element_type_is_part_of_the_check() {
    assert_eq!(
        create_getter::<Account, Option<i32>>(&member("nickname")).err(),
        Some(AccessError::MemberTypeMismatch {
            name: "nickname",
            expected: <Option<String>>::type_path(),
            found: <Option<i32>>::type_path(),
        })
    );
    assert!(matches!(
        create_setter::<Account, Vec<i32>>(&member("tags")),
        Err(AccessError::MemberTypeMismatch { .. })
    ));
    assert!(matches!(
        create_getter::<Account, String>(&member("nickname")),
        Err(AccessError::MemberTypeMismatch { .. })
    ));
}

#[test]
fn opaque_paths() {
    let mut a = account();

    let read = create_boxed_getter::<Account>(&member("tags")).unwrap()(&a);
    assert_eq!(read.take::<Vec<String>>().unwrap(), ["a", "b"]);

    let opaque: Opaque = create_getter::<Account, Opaque>(&member("nickname")).unwrap()(&a);
    assert_eq!(opaque.take::<Option<String>>().unwrap().as_deref(), Some("neo"));

    create_boxed_setter::<Account>(&member("nickname")).unwrap()(&mut a, Box::new(None::<String>))
        .unwrap();
    assert_eq!(a.nickname, None);

    let rejected = create_boxed_setter::<Account>(&member("nickname")).unwrap()(
        &mut a,
        Box::new(Some(7_u32)),
    );
    assert!(matches!(rejected, Err(AccessError::ValueTypeMismatch { .. })));
    assert_eq!(a.nickname, None);
}

#[test]
fn erased_paths() {
    let mut a = account();
    let instance: &mut dyn Reflect = &mut a;

    let read = create_untyped_getter(&member("nickname")).unwrap()(instance).unwrap();
    assert_eq!(read.reflect_partial_eq(&Some(String::from("neo"))), Some(true));
    assert_eq!(format!("{read:?}"), "Some(\"neo\")");

    create_untyped_setter(&member("tags")).unwrap()(instance, Box::new(Vec::<String>::new()))
        .unwrap();
    assert!(a.tag_backing.is_empty());

    let wrong: &dyn Reflect = &Some(String::from("not an account"));
    assert!(matches!(
        create_untyped_getter(&member("nickname")).unwrap()(wrong),
        Err(AccessError::InstanceTypeMismatch { .. })
    ));
}

#[test]
fn expressions_over_containers() {
    let mut a = account();

    let nickname: Expression<Account, Option<String>> =
        lambda!(|x: Account| x.nickname).unwrap();
    assert_eq!(extract::field(&nickname).unwrap().name(), "nickname");
    nickname.create_setter().unwrap()(&mut a, Some(String::from("trinity")));
    assert_eq!(nickname.create_getter().unwrap()(&a).as_deref(), Some("trinity"));

    let tags: Expression<Account, Vec<String>> = lambda!(|x: Account| x.tags).unwrap();
    assert_eq!(extract::property(&tags).unwrap().name(), "tags");
    assert_eq!(tags.create_getter().unwrap()(&a).len(), 2);

    let first_tag: Expression<Account, Option<String>> =
        lambda!(|x: Account| x.first_tag()).unwrap();
    let method = extract::method_info(&first_tag).unwrap();
    assert_eq!(method, Account::type_info().as_struct().unwrap().method("first_tag").unwrap());
    assert_eq!(
        first_tag.create_getter().err(),
        Some(AccessError::UnsupportedMember {
            name: "first_tag",
            kind: MemberKind::Method,
        })
    );
}
