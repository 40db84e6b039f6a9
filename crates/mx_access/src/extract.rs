//! Find the member referenced by a one-hop lambda.
//!
//! Accepted bodies are `x.member` and `x.method()` where `x` is the lambda
//! parameter, optionally wrapped in a single conversion (the boxing added
//! for an [`Opaque`](mx_reflect::Opaque) result). Nothing else is searched:
//! chained accesses, arithmetic and nested conversions are rejected with
//! [`AccessError::MalformedExpression`].
//!
//! Every function is mirrored by a method of [`Expression`].
//!
//! ```
//! use mx_access::{Expression, MemberKind, extract, lambda};
//! use mx_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Clone)]
//! struct Item {
//!     count: u32,
//! }
//!
//! let expr: Expression<Item> = lambda!(|x: Item| x.count).unwrap();
//! let member = extract::member_info(&expr).unwrap();
//!
//! assert_eq!(member.name(), "count");
//! assert_eq!(member.kind(), MemberKind::Field);
//! assert!(extract::property(&expr).is_err());
//! ```

use mx_reflect::info::{MethodInfo, NamedField, PropertyInfo};

use crate::expr::{Expr, Expression};
use crate::{AccessError, MemberDescriptor, MemberKind};

const MEMBER_ACCESS: &str = "member access on the parameter";
const METHOD_CALL: &str = "method call on the parameter";

fn require<'a, T, R>(
    expression: impl Into<Option<&'a Expression<T, R>>>,
) -> Result<&'a Expression<T, R>, AccessError>
where
    T: 'a,
    R: 'a,
{
    expression.into().ok_or(AccessError::InvalidArgument { name: "expression" })
}

/// The body with at most one conversion removed.
fn strip_convert(body: &Expr) -> &Expr {
    match body {
        Expr::Convert { operand, .. } => operand.as_ref(),
        other => other,
    }
}

fn check_target<T, R>(
    expression: &Expression<T, R>,
    target: &Expr,
    expected: &'static str,
) -> Result<(), AccessError> {
    match target {
        Expr::Parameter(parameter) if parameter == expression.parameter() => Ok(()),
        other => Err(AccessError::MalformedExpression {
            expected,
            found: other.kind(),
        }),
    }
}

fn descriptor_of<T, R>(expression: &Expression<T, R>) -> Result<MemberDescriptor, AccessError> {
    match strip_convert(expression.body()) {
        Expr::Member { target, member } => {
            check_target(expression, target, MEMBER_ACCESS)?;
            Ok(*member)
        }
        other => Err(AccessError::MalformedExpression {
            expected: MEMBER_ACCESS,
            found: other.kind(),
        }),
    }
}

fn expect_kind(member: &MemberDescriptor, expected: MemberKind) -> Result<(), AccessError> {
    if member.kind() == expected {
        Ok(())
    } else {
        Err(AccessError::MemberKindMismatch {
            name: member.name(),
            expected,
            found: member.kind(),
        })
    }
}

/// Returns the descriptor of the field or property accessed by the body.
pub fn member_info<'a, T: 'a, R: 'a>(
    expression: impl Into<Option<&'a Expression<T, R>>>,
) -> Result<MemberDescriptor, AccessError> {
    let expression = require(expression)?;
    descriptor_of(expression).map_err(|e| e.rejected("member_info"))
}

/// Returns the property accessed by the body.
pub fn property<'a, T: 'a, R: 'a>(
    expression: impl Into<Option<&'a Expression<T, R>>>,
) -> Result<&'static PropertyInfo, AccessError> {
    let member = member_info(expression)?;
    expect_kind(&member, MemberKind::Property).map_err(|e| e.rejected("property"))?;

    member
        .declaring_type()
        .as_struct()
        .ok()
        .and_then(|info| info.property(member.name()))
        .ok_or(AccessError::MemberNotFound {
            type_path: member.declaring_type().type_path(),
            name: member.name(),
            kind: MemberKind::Property,
        })
}

/// Returns the field accessed by the body.
pub fn field<'a, T: 'a, R: 'a>(
    expression: impl Into<Option<&'a Expression<T, R>>>,
) -> Result<&'static NamedField, AccessError> {
    let member = member_info(expression)?;
    expect_kind(&member, MemberKind::Field).map_err(|e| e.rejected("field"))?;

    member
        .declaring_type()
        .as_struct()
        .ok()
        .and_then(|info| info.field(member.name()))
        .ok_or(AccessError::MemberNotFound {
            type_path: member.declaring_type().type_path(),
            name: member.name(),
            kind: MemberKind::Field,
        })
}

/// Returns the method called by the body.
///
/// The conversion is unwrapped for every result type, so the same call
/// is found through `Expression<T, ()>`, `Expression<T, Opaque>` or a
/// typed result.
pub fn method_info<'a, T: 'a, R: 'a>(
    expression: impl Into<Option<&'a Expression<T, R>>>,
) -> Result<&'static MethodInfo, AccessError> {
    let expression = require(expression)?;

    let result = match strip_convert(expression.body()) {
        Expr::Call { target, method } => {
            check_target(expression, target, METHOD_CALL).map(|()| *method)
        }
        other => Err(AccessError::MalformedExpression {
            expected: METHOD_CALL,
            found: other.kind(),
        }),
    };
    result.map_err(|e| e.rejected("method_info"))
}

impl<T, R> Expression<T, R> {
    /// See [`extract::member_info`](member_info).
    #[inline]
    pub fn member_info(&self) -> Result<MemberDescriptor, AccessError> {
        member_info(self)
    }

    /// See [`extract::property`](property).
    #[inline]
    pub fn property(&self) -> Result<&'static PropertyInfo, AccessError> {
        property(self)
    }

    /// See [`extract::field`](field).
    #[inline]
    pub fn field(&self) -> Result<&'static NamedField, AccessError> {
        field(self)
    }

    /// See [`extract::method_info`](method_info).
    #[inline]
    pub fn method_info(&self) -> Result<&'static MethodInfo, AccessError> {
        method_info(self)
    }
}

// -----------------------------------------------------------------------------
// Tests
