//! Typed single-parameter lambdas, as trees.
//!
//! An [`Expression<T, R>`] is the tree of `|x: T| -> R { body }`. The body is
//! an [`Expr`], whose member and call nodes are resolved against the static
//! type info of their target when the node is built.
//!
//! Trees are usually written with [`lambda!`](crate::lambda), but every node
//! can be built by hand:
//!
//! ```
//! use mx_access::expr::{Expr, Expression, Parameter};
//! use mx_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Clone)]
//! struct Point {
//!     x: f32,
//! }
//!
//! let p = Parameter::new::<Point>("p");
//! let body = Expr::member(Expr::from(p), "x").unwrap();
//! let expr = Expression::<Point, f32>::new(p, body).unwrap();
//!
//! assert_eq!(expr.member_info().unwrap().name(), "x");
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod expression;
mod node;

// -----------------------------------------------------------------------------
// Exports

pub use error::ExprError;
pub use expression::Expression;
pub use node::{BinaryOp, Expr, ExprKind, Parameter, UnaryOp};
