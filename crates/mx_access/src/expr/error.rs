use thiserror::Error;

/// Failures when building an expression tree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExprError {
    #[error("Type `{type_path}` has no member named `{name}`")]
    MemberNotFound {
        type_path: &'static str,
        name: &'static str,
    },

    #[error("The type of the target of `{name}` is unknown")]
    UnresolvedTarget { name: &'static str },

    #[error("Parameter has type `{found}`, expected `{expected}`")]
    ParameterMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Body has type `{found}`, expected `{expected}`")]
    ResultMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
