//! See [`lambda!`].
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::parse_macro_input;

// -----------------------------------------------------------------------------
// Modules

mod lambda;
mod lower;

// -----------------------------------------------------------------------------
// Macros

/// # Expression Trees
///
/// Turns a one-parameter closure into an `Expression`, the tree of the
/// closure body with every member resolved through reflection.
///
/// ```rust, ignore
/// let get: Expression<Dummy, i32> = lambda!(|x: Dummy| x.int_field).unwrap();
/// let call: Expression<Dummy, ()> = lambda!(|x: Dummy| -> () { x.void_method() }).unwrap();
/// ```
///
/// The result type is the declared return type, or is inferred from the
/// context when there is none. The macro evaluates to
/// `Result<Expression<T, R>, ExprError>`.
///
/// Supported syntax in the body:
///
/// - the parameter, field and property access, method calls without arguments;
/// - `as` conversions, unary `-` and `!`, binary operators and indexing;
/// - literals and captured variables, which become constants (captures are cloned).
#[proc_macro]
pub fn lambda(input: TokenStream) -> TokenStream {
    let closure = parse_macro_input!(input as syn::ExprClosure);

    match lambda::Lambda::from_closure(&closure) {
        Ok(lambda) => lambda.expand().into(),
        Err(err) => err.into_compile_error().into(),
    }
}
