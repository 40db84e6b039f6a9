use thiserror::Error;

use crate::MemberKind;
use crate::expr::ExprKind;

// -----------------------------------------------------------------------------
// Error

/// Failures of member extraction and accessor compilation.
///
/// Construction errors are returned by [`extract`](crate::extract) and the
/// `create_*` functions of [`compile`](crate::compile). `InstanceTypeMismatch`
/// and `ValueTypeMismatch` are returned by the erased accessors themselves.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    #[error("Argument `{name}` is absent")]
    InvalidArgument { name: &'static str },

    #[error("Malformed expression: expected {expected}, found {found}")]
    MalformedExpression {
        expected: &'static str,
        found: ExprKind,
    },

    #[error("Member `{name}` is a {found}, not a {expected}")]
    MemberKindMismatch {
        name: &'static str,
        expected: MemberKind,
        found: MemberKind,
    },

    #[error("Type `{type_path}` has no {kind} named `{name}`")]
    MemberNotFound {
        type_path: &'static str,
        name: &'static str,
        kind: MemberKind,
    },

    #[error("Member `{name}` has type `{expected}`, found `{found}`")]
    MemberTypeMismatch {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Member is declared by `{expected}`, found `{found}`")]
    EntityTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("The {kind} `{name}` can not be written")]
    MemberNotSettable { name: &'static str, kind: MemberKind },

    #[error("The {kind} `{name}` can not be read as a value")]
    UnsupportedMember { name: &'static str, kind: MemberKind },

    #[error("Instance type mismatch: expected `{expected}`, found `{found}`")]
    InstanceTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Value type mismatch: expected `{expected}`, found `{found}`")]
    ValueTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl AccessError {
    /// Log the rejection of a request and hand the error back.
    #[cold]
    pub(crate) fn rejected(self, operation: &str) -> Self {
        log::debug!("{operation} rejected: {self}");
        self
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::AccessError;
    use crate::MemberKind;
    use crate::expr::ExprKind;

    #[test]
    fn messages_name_the_member() {
        let err = AccessError::MemberKindMismatch {
            name: "int_field",
            expected: MemberKind::Property,
            found: MemberKind::Field,
        };
        assert_eq!(err.to_string(), "Member `int_field` is a field, not a property");

        let err = AccessError::MalformedExpression {
            expected: "member access on the parameter",
            found: ExprKind::Binary,
        };
        assert_eq!(
            err.to_string(),
            "Malformed expression: expected member access on the parameter, found binary operation"
        );
    }
}
