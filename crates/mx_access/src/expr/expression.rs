use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;

use mx_reflect::Opaque;
use mx_reflect::info::{Typed, ValueType};

use crate::expr::{Expr, ExprError, Parameter};

/// The tree of a typed lambda `|x: T| -> R { body }`.
///
/// `R` is the declared result:
///
/// - a concrete type: the body must have this static type, when known;
/// - [`Opaque`] (the default): any body, a body of another static type is
///   wrapped in a conversion to the opaque slot, which is boxing;
/// - `()`: any body, its value is discarded.
///
/// ```
/// use mx_access::{Expression, expr::{Expr, ExprKind}, lambda};
/// use mx_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone)]
/// struct Item {
///     count: u32,
/// }
///
/// let typed: Expression<Item, u32> = lambda!(|x: Item| x.count).unwrap();
/// assert_eq!(typed.body().kind(), ExprKind::Member);
///
/// let boxed: Expression<Item> = lambda!(|x: Item| x.count).unwrap();
/// assert_eq!(boxed.body().kind(), ExprKind::Convert);
/// assert_eq!(boxed.to_string(), "|x: Item| (x.count as dyn Reflect)");
/// ```
pub struct Expression<T, R = Opaque> {
    parameter: Parameter,
    body: Expr,
    _marker: PhantomData<fn(&T) -> R>,
}

impl<T: Typed, R: ValueType> Expression<T, R> {
    /// Checks the parameter against `T` and the body against `R`.
    pub fn new(parameter: Parameter, body: Expr) -> Result<Self, ExprError> {
        if parameter.type_info().ty_id() != TypeId::of::<T>() {
            return Err(ExprError::ParameterMismatch {
                expected: T::type_path(),
                found: parameter.type_info().type_path(),
            });
        }

        let result = R::value_info();

        let body = if TypeId::of::<R>() == TypeId::of::<()>() {
            body
        } else if TypeId::of::<R>() == TypeId::of::<Opaque>() {
            if body.type_info().is_some() && !body.is_opaque() {
                Expr::convert_to(body, result)
            } else {
                body
            }
        } else {
            match body.type_info() {
                Some(info) if info.ty_id() != result.ty_id() => {
                    return Err(ExprError::ResultMismatch {
                        expected: result.type_path(),
                        found: info.type_path(),
                    });
                }
                _ => body,
            }
        };

        Ok(Self {
            parameter,
            body,
            _marker: PhantomData,
        })
    }
}

impl<T, R> Expression<T, R> {
    #[inline]
    pub const fn parameter(&self) -> &Parameter {
        &self.parameter
    }

    #[inline]
    pub const fn body(&self) -> &Expr {
        &self.body
    }

    #[inline]
    pub fn into_body(self) -> Expr {
        self.body
    }
}

impl<T, R> Clone for Expression<T, R> {
    fn clone(&self) -> Self {
        Self {
            parameter: self.parameter,
            body: self.body.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, R> fmt::Display for Expression<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "|{}: {}| {}",
            self.parameter.name(),
            self.parameter.type_info().type_name(),
            self.body,
        )
    }
}

impl<T, R> fmt::Debug for Expression<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use mx_reflect::Opaque;
    use mx_reflect::derive::Reflect;
    use mx_reflect::info::TypePath;

    use crate::expr::{BinaryOp, Expr, ExprError, ExprKind, Expression, Parameter};

    #[derive(Reflect, Clone)]
    struct Cell {
        value: u8,
        text: String,
    }

    fn value_of(p: Parameter) -> Expr {
        Expr::member(Expr::from(p), "value").unwrap()
    }

    #[test]
    fn parameter_must_match_entity() {
        let p = Parameter::new::<u8>("x");
        let err = Expression::<Cell, u8>::new(p, Expr::from(p)).unwrap_err();
        assert_eq!(
            err,
            ExprError::ParameterMismatch {
                expected: Cell::type_path(),
                found: "u8",
            }
        );
    }

    #[test]
    fn typed_result_must_match_body() {
        let p = Parameter::new::<Cell>("c");

        assert!(Expression::<Cell, u8>::new(p, value_of(p)).is_ok());
        assert_eq!(
            Expression::<Cell, String>::new(p, value_of(p)).unwrap_err(),
            ExprError::ResultMismatch {
                expected: "alloc::string::String",
                found: "u8",
            }
        );

        // unknown static type is accepted
        let indexed = Expr::index(Expr::member(Expr::from(p), "text").unwrap(), Expr::constant(0_usize));
        assert!(Expression::<Cell, String>::new(p, indexed).is_ok());
    }

    #[test]
    fn opaque_result_boxes_once() {
        let p = Parameter::new::<Cell>("c");

        let boxed = Expression::<Cell, Opaque>::new(p, value_of(p)).unwrap();
        let Expr::Convert { operand, .. } = boxed.body() else {
            panic!("expected a conversion");
        };
        assert_eq!(operand.kind(), ExprKind::Member);

        let already = Expr::convert::<Opaque>(value_of(p));
        let kept = Expression::<Cell, Opaque>::new(p, already).unwrap();
        let Expr::Convert { operand, .. } = kept.body() else {
            panic!("expected a conversion");
        };
        assert_eq!(operand.kind(), ExprKind::Member);
    }

    #[test]
    fn unit_result_keeps_body() {
        let p = Parameter::new::<Cell>("c");
        let body = Expr::binary(BinaryOp::Eq, value_of(p), Expr::constant(1_u8));

        let action = Expression::<Cell, ()>::new(p, body).unwrap();
        assert_eq!(action.body().kind(), ExprKind::Binary);
    }
}
