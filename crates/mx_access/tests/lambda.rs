mod common;

use common::Dummy;
use mx_access::expr::{ExprKind, Parameter};
use mx_access::{AccessError, Expr, ExprError, Expression, MemberKind, compile, extract, lambda};
use mx_reflect::Opaque;
use mx_reflect::info::Typed;

#[test]
fn getters_from_expressions() {
    let d = Dummy {
        int_backing: 123,
        string_field: String::from("field"),
        ..Dummy::default()
    };

    let int_property: Expression<Dummy, i32> = lambda!(|x: Dummy| x.int_property).unwrap();
    assert_eq!(compile::getter_from(&int_property).unwrap()(&d), 123);
    assert_eq!(int_property.create_getter().unwrap()(&d), 123);

    let string_field: Expression<Dummy, String> = lambda!(|x: Dummy| x.string_field).unwrap();
    assert_eq!(string_field.create_getter().unwrap()(&d), "field");

    let boxed: Expression<Dummy> = lambda!(|x: Dummy| x.int_property).unwrap();
    let read = boxed.create_getter().unwrap()(&d);
    assert_eq!(read.take::<i32>().unwrap(), 123);
}

#[test]
fn setters_from_expressions() {
    let mut d = Dummy::default();

    let string_field: Expression<Dummy, String> = lambda!(|x: Dummy| x.string_field).unwrap();
    compile::setter_from(&string_field).unwrap()(&mut d, String::from("abc"));
    assert_eq!(d.string_field, "abc");

    let int_property: Expression<Dummy, i32> =
        lambda!(|x: Dummy| -> i32 { x.int_property }).unwrap();
    int_property.create_setter().unwrap()(&mut d, 7);
    assert_eq!(d.int_property(), 7);
}

#[test]
fn boxed_expressions_feed_the_erased_paths() {
    let mut d = Dummy::default();

    let boxed: Expression<Dummy> = lambda!(|x: Dummy| x.string_property).unwrap();
    let member = boxed.member_info().unwrap();
    assert_eq!(member.kind(), MemberKind::Property);

    compile::create_boxed_setter::<Dummy>(&member).unwrap()(&mut d, Box::new(String::from("s")))
        .unwrap();
    assert_eq!(d.string_property(), "s");
}

#[test]
fn extracts_members() {
    let field: Expression<Dummy> = lambda!(|x: Dummy| x.int_field).unwrap();
    let property: Expression<Dummy, String> = lambda!(|x: Dummy| x.string_property).unwrap();

    assert_eq!(extract::field(&field).unwrap().name(), "int_field");
    assert_eq!(extract::property(&property).unwrap().name(), "string_property");
    assert_eq!(
        extract::member_info(&field).unwrap(),
        mx_access::MemberDescriptor::find::<Dummy>("int_field").unwrap()
    );

    assert_eq!(
        extract::property(&field).unwrap_err(),
        AccessError::MemberKindMismatch {
            name: "int_field",
            expected: MemberKind::Property,
            found: MemberKind::Field,
        }
    );
    assert!(matches!(
        extract::field(&property),
        Err(AccessError::MemberKindMismatch { found: MemberKind::Property, .. })
    ));
}

#[test]
fn extracts_methods() {
    let info = Dummy::type_info().as_struct().unwrap();

    let void: Expression<Dummy, ()> = lambda!(|x: Dummy| -> () { x.void_method() }).unwrap();
    assert_eq!(extract::method_info(&void).unwrap(), info.method("void_method").unwrap());

    let boxed: Expression<Dummy> = lambda!(|x: Dummy| x.string_method()).unwrap();
    assert_eq!(boxed.body().kind(), ExprKind::Convert);
    assert_eq!(boxed.method_info().unwrap(), info.method("string_method").unwrap());

    let typed: Expression<Dummy, i32> = lambda!(|x: Dummy| x.int_method()).unwrap();
    assert!(typed.method_info().unwrap().return_type_info().type_is::<i32>());
}

#[test]
fn absent_expressions() {
    let none = None::<&Expression<Dummy, i32>>;
    let expected = AccessError::InvalidArgument { name: "expression" };

    assert_eq!(extract::member_info(none).unwrap_err(), expected);
    assert_eq!(extract::property(none).unwrap_err(), expected);
    assert_eq!(extract::field(none).unwrap_err(), expected);
    assert_eq!(extract::method_info(none).unwrap_err(), expected);
    assert_eq!(compile::getter_from(none).err(), Some(expected));
    assert_eq!(compile::setter_from(none).err(), Some(expected));
}

#[test]
fn only_one_hop_is_accepted() {
    let sum: Expression<Dummy> = lambda!(|x: Dummy| x.int_field + 1).unwrap();
    assert_eq!(
        extract::member_info(&sum).unwrap_err(),
        AccessError::MalformedExpression {
            expected: "member access on the parameter",
            found: ExprKind::Binary,
        }
    );

    let chained: Expression<Dummy, bool> = lambda!(|x: Dummy| x.string_field == "abc").unwrap();
    assert!(matches!(
        extract::member_info(&chained),
        Err(AccessError::MalformedExpression { found: ExprKind::Binary, .. })
    ));

    let cast: Expression<Dummy> = lambda!(|x: Dummy| x.int_field as i64).unwrap();
    assert!(matches!(
        extract::member_info(&cast),
        Err(AccessError::MalformedExpression { found: ExprKind::Convert, .. })
    ));

    let bonus = 5;
    let captured: Expression<Dummy, i32> = lambda!(|x: Dummy| x.int_field * bonus).unwrap();
    assert_eq!(captured.to_string(), "|x: Dummy| (x.int_field * 5)");

    let call: Expression<Dummy> = lambda!(|x: Dummy| x.string_method()).unwrap();
    assert!(matches!(
        extract::member_info(&call),
        Err(AccessError::MalformedExpression { found: ExprKind::Call, .. })
    ));
}

#[test]
fn lambda_reports_tree_errors() {
    let missing: Result<Expression<Dummy>, ExprError> = lambda!(|x: Dummy| x.float_field);
    assert_eq!(
        missing.err(),
        Some(ExprError::MemberNotFound {
            type_path: <Dummy as mx_reflect::info::TypePath>::type_path(),
            name: "float_field",
        })
    );

    let mismatch: Result<Expression<Dummy, u8>, ExprError> = lambda!(|x: Dummy| x.int_field);
    assert!(matches!(
        mismatch,
        Err(ExprError::ResultMismatch { expected: "u8", found: "i32" })
    ));

    // methods are not members
    let not_a_field: Result<Expression<Dummy>, ExprError> = lambda!(|x: Dummy| x.int_method);
    assert!(matches!(not_a_field, Err(ExprError::MemberNotFound { .. })));
}

#[test]
fn lambda_matches_hand_built_trees() {
    let by_macro: Expression<Dummy, i32> = lambda!(|d: Dummy| -d.int_property).unwrap();

    let p = Parameter::new::<Dummy>("d");
    let body = Expr::unary(
        mx_access::expr::UnaryOp::Neg,
        Expr::member(Expr::from(p), "int_property").unwrap(),
    );
    let by_hand = Expression::<Dummy, i32>::new(p, body).unwrap();

    assert_eq!(by_macro.to_string(), by_hand.to_string());
    assert_eq!(by_macro.parameter(), by_hand.parameter());

    let unit: Expression<Dummy, ()> = lambda!(|d: Dummy| -> () { d.int_field }).unwrap();
    assert_eq!(unit.body().kind(), ExprKind::Member);

    let opaque: Expression<Dummy, Opaque> = lambda!(|d: Dummy| (d.int_field)).unwrap();
    assert_eq!(opaque.to_string(), "|d: Dummy| (d.int_field as dyn Reflect)");
}
