use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use mx_reflect::Reflect;
use mx_reflect::info::{MethodInfo, TypeInfo, Typed, ValueType};

use crate::MemberDescriptor;
use crate::expr::ExprError;

// -----------------------------------------------------------------------------
// Parameter

/// The parameter of a lambda, e.g. `x` in `|x: Dummy| x.int_field`.
///
/// Two parameters are the same when name and type match.
#[derive(Clone, Copy)]
pub struct Parameter {
    name: &'static str,
    type_info: &'static TypeInfo,
}

impl Parameter {
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info(),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.type_info.ty_id() == other.type_info.ty_id()
    }
}

impl Eq for Parameter {}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_info.type_path())
    }
}

// -----------------------------------------------------------------------------
// Operators

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `!x`
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neg => f.write_str("-"),
            Self::Not => f.write_str("!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOp {
    /// Returns `true` for the operators producing a `bool`.
    pub const fn is_boolean(self) -> bool {
        matches!(
            self,
            Self::And | Self::Or | Self::Eq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge
        )
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::And => "&&",
            Self::Or => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// -----------------------------------------------------------------------------
// ExprKind

/// A pure enumeration of the node kinds of [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Parameter,
    Constant,
    Member,
    Call,
    Convert,
    Unary,
    Binary,
    Index,
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Parameter => "parameter",
            Self::Constant => "constant",
            Self::Member => "member access",
            Self::Call => "method call",
            Self::Convert => "conversion",
            Self::Unary => "unary operation",
            Self::Binary => "binary operation",
            Self::Index => "index",
        })
    }
}

// -----------------------------------------------------------------------------
// Expr

/// A node of an expression tree.
pub enum Expr {
    /// The lambda parameter.
    Parameter(Parameter),
    /// A literal value.
    Constant(Box<dyn Reflect>),
    /// `target.member`, a field or a property.
    Member {
        target: Box<Expr>,
        member: MemberDescriptor,
    },
    /// `target.method()`
    Call {
        target: Box<Expr>,
        method: &'static MethodInfo,
    },
    /// `operand as T`, including the implicit boxing into the opaque slot.
    Convert {
        operand: Box<Expr>,
        to: &'static TypeInfo,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `target[index]`
    Index {
        target: Box<Expr>,
        index: Box<Expr>,
    },
}

impl From<Parameter> for Expr {
    #[inline]
    fn from(parameter: Parameter) -> Self {
        Self::Parameter(parameter)
    }
}

impl Expr {
    /// A literal value node.
    #[inline]
    pub fn constant(value: impl Reflect) -> Self {
        Self::Constant(Box::new(value))
    }

    /// `target.name`, a field or, if no field has this name, a property.
    pub fn member(target: Expr, name: &'static str) -> Result<Self, ExprError> {
        let info = target
            .type_info()
            .ok_or(ExprError::UnresolvedTarget { name })?;
        let member = MemberDescriptor::find_in(info, name)
            .filter(|member| member.kind() != crate::MemberKind::Method)
            .ok_or(ExprError::MemberNotFound {
                type_path: info.type_path(),
                name,
            })?;

        Ok(Self::Member {
            target: Box::new(target),
            member,
        })
    }

    /// `target.name()`, a method without arguments.
    pub fn call(target: Expr, name: &'static str) -> Result<Self, ExprError> {
        let info = target
            .type_info()
            .ok_or(ExprError::UnresolvedTarget { name })?;
        let method = info
            .as_struct()
            .ok()
            .and_then(|info| info.method(name))
            .ok_or(ExprError::MemberNotFound {
                type_path: info.type_path(),
                name,
            })?;

        Ok(Self::Call {
            target: Box::new(target),
            method,
        })
    }

    /// `operand as U`. Converting to [`Opaque`](mx_reflect::Opaque) is boxing.
    #[inline]
    pub fn convert<U: ValueType>(operand: Expr) -> Self {
        Self::convert_to(operand, U::value_info())
    }

    #[inline]
    pub(crate) fn convert_to(operand: Expr, to: &'static TypeInfo) -> Self {
        Self::Convert {
            operand: Box::new(operand),
            to,
        }
    }

    #[inline]
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    #[inline]
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    #[inline]
    pub fn index(target: Expr, index: Expr) -> Self {
        Self::Index {
            target: Box::new(target),
            index: Box::new(index),
        }
    }

    pub const fn kind(&self) -> ExprKind {
        match self {
            Self::Parameter(_) => ExprKind::Parameter,
            Self::Constant(_) => ExprKind::Constant,
            Self::Member { .. } => ExprKind::Member,
            Self::Call { .. } => ExprKind::Call,
            Self::Convert { .. } => ExprKind::Convert,
            Self::Unary { .. } => ExprKind::Unary,
            Self::Binary { .. } => ExprKind::Binary,
            Self::Index { .. } => ExprKind::Index,
        }
    }

    /// The static type of the node, if it can be told without evaluation.
    ///
    /// Indexing and arithmetic on operands of different types are unknown.
    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::Parameter(parameter) => Some(parameter.type_info()),
            Self::Constant(value) => Some(value.reflect_type_info()),
            Self::Member { member, .. } => Some(member.value_type()),
            Self::Call { method, .. } => Some(method.return_type_info()),
            Self::Convert { to, .. } => Some(*to),
            Self::Unary { operand, .. } => operand.type_info(),
            Self::Binary { op, .. } if op.is_boolean() => Some(bool::type_info()),
            Self::Binary {
                op: BinaryOp::Shl | BinaryOp::Shr,
                lhs,
                ..
            } => lhs.type_info(),
            Self::Binary { lhs, rhs, .. } => {
                let lhs = lhs.type_info()?;
                (lhs.ty_id() == rhs.type_info()?.ty_id()).then_some(lhs)
            }
            Self::Index { .. } => None,
        }
    }

    /// Returns `true` if the static type is the opaque slot.
    pub(crate) fn is_opaque(&self) -> bool {
        self.type_info()
            .is_some_and(|info| info.ty_id() == TypeId::of::<dyn Reflect>())
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        match self {
            Self::Parameter(parameter) => Self::Parameter(*parameter),
            Self::Constant(value) => Self::Constant(value.reflect_clone()),
            Self::Member { target, member } => Self::Member {
                target: target.clone(),
                member: *member,
            },
            Self::Call { target, method } => Self::Call {
                target: target.clone(),
                method: *method,
            },
            Self::Convert { operand, to } => Self::Convert {
                operand: operand.clone(),
                to: *to,
            },
            Self::Unary { op, operand } => Self::Unary {
                op: *op,
                operand: operand.clone(),
            },
            Self::Binary { op, lhs, rhs } => Self::Binary {
                op: *op,
                lhs: lhs.clone(),
                rhs: rhs.clone(),
            },
            Self::Index { target, index } => Self::Index {
                target: target.clone(),
                index: index.clone(),
            },
        }
    }
}

/// Prints the node in closure syntax, e.g. `(x.int_field as dyn Reflect)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(parameter) => f.write_str(parameter.name()),
            Self::Constant(value) => write!(f, "{value:?}"),
            Self::Member { target, member } => write!(f, "{target}.{}", member.name()),
            Self::Call { target, method } => write!(f, "{target}.{}()", method.name()),
            Self::Convert { operand, to } => write!(f, "({operand} as {})", to.type_name()),
            Self::Unary { op, operand } => write!(f, "{op}{operand}"),
            Self::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
            Self::Index { target, index } => write!(f, "{target}[{index}]"),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use mx_reflect::Opaque;
    use mx_reflect::derive::{Reflect, reflect_members};

    use super::{BinaryOp, Expr, ExprKind, Parameter, UnaryOp};
    use crate::MemberKind;
    use crate::expr::ExprError;

    #[derive(Reflect, Clone)]
    #[reflect(members)]
    struct Node {
        weight: i64,
        name: String,
    }

    #[reflect_members]
    impl Node {
        #[reflect(get)]
        fn heavy(&self) -> bool {
            self.weight > 100
        }

        #[reflect(method)]
        fn label(&self) -> String {
            self.name.clone()
        }
    }

    fn param() -> Expr {
        Expr::from(Parameter::new::<Node>("n"))
    }

    #[test]
    fn member_resolves_fields_then_properties() {
        let weight = Expr::member(param(), "weight").unwrap();
        let Expr::Member { member, .. } = &weight else {
            panic!("expected a member node");
        };
        assert_eq!(member.kind(), MemberKind::Field);
        assert!(weight.type_info().unwrap().type_is::<i64>());

        let heavy = Expr::member(param(), "heavy").unwrap();
        assert!(heavy.type_info().unwrap().type_is::<bool>());

        assert_eq!(
            Expr::member(param(), "label").unwrap_err(),
            ExprError::MemberNotFound {
                type_path: node_path(),
                name: "label",
            }
        );
    }

    fn node_path() -> &'static str {
        use mx_reflect::info::TypePath;
        Node::type_path()
    }

    #[test]
    fn call_resolves_methods() {
        let label = Expr::call(param(), "label").unwrap();
        assert_eq!(label.kind(), ExprKind::Call);
        assert!(label.type_info().unwrap().type_is::<String>());

        assert!(matches!(
            Expr::call(param(), "weight"),
            Err(ExprError::MemberNotFound { name: "weight", .. })
        ));
    }

    #[test]
    fn unknown_targets_are_reported() {
        let indexed = Expr::index(param(), Expr::constant(0_usize));
        assert!(indexed.type_info().is_none());
        assert_eq!(
            Expr::member(indexed, "weight").unwrap_err(),
            ExprError::UnresolvedTarget { name: "weight" }
        );
    }

    #[test]
    fn static_types_of_operators() {
        let weight = || Expr::member(param(), "weight").unwrap();

        let sum = Expr::binary(BinaryOp::Add, weight(), Expr::constant(1_i64));
        assert!(sum.type_info().unwrap().type_is::<i64>());

        let mixed = Expr::binary(BinaryOp::Add, weight(), Expr::constant(1_i32));
        assert!(mixed.type_info().is_none());

        let cmp = Expr::binary(BinaryOp::Lt, weight(), Expr::constant(1_i32));
        assert!(cmp.type_info().unwrap().type_is::<bool>());

        let neg = Expr::unary(UnaryOp::Neg, weight());
        assert!(neg.type_info().unwrap().type_is::<i64>());

        let boxed = Expr::convert::<Opaque>(weight());
        assert!(boxed.is_opaque());
        assert!(!weight().is_opaque());
    }

    #[test]
    fn display_and_clone() {
        let expr = Expr::binary(
            BinaryOp::Mul,
            Expr::unary(UnaryOp::Neg, Expr::member(param(), "weight").unwrap()),
            Expr::constant(2_i64),
        );
        let expr = Expr::convert::<Opaque>(expr);

        assert_eq!(expr.to_string(), "((-n.weight * 2) as dyn Reflect)");
        assert_eq!(expr.clone().to_string(), expr.to_string());
        assert_eq!(Expr::call(param(), "label").unwrap().to_string(), "n.label()");
    }
}
