use core::fmt;

use mx_reflect::info::{MethodInfo, NamedField, PropertyInfo, StructInfo, TypeInfo, Typed};

use crate::AccessError;

// -----------------------------------------------------------------------------
// MemberKind

/// The kind of a member reachable through an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// A value exposed through getter/setter methods.
    Property,
    /// A struct field.
    Field,
    /// A method without arguments.
    Method,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property => f.pad("property"),
            Self::Field => f.pad("field"),
            Self::Method => f.pad("method"),
        }
    }
}

// -----------------------------------------------------------------------------
// MemberDescriptor

/// Identifies a single member of a reflected type.
///
/// `value_type` is the type read or written through the member, for a
/// method it is the return type.
///
/// Descriptors returned by [`extract`](crate::extract) always name an
/// existing member. A descriptor built by hand with [`MemberDescriptor::new`]
/// is checked against the declaring type when an accessor is compiled.
///
/// Two descriptors are equal when they have the same name, kind, declaring
/// type and value type.
///
/// ```
/// use mx_access::{MemberDescriptor, MemberKind};
/// use mx_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone)]
/// struct Point {
///     x: f32,
/// }
///
/// let x = MemberDescriptor::find::<Point>("x").unwrap();
/// assert_eq!(x.kind(), MemberKind::Field);
/// assert!(x.value_type().type_is::<f32>());
/// assert!(MemberDescriptor::find::<Point>("y").is_none());
/// ```
#[derive(Clone, Copy)]
pub struct MemberDescriptor {
    name: &'static str,
    declaring_type: &'static TypeInfo,
    value_type: &'static TypeInfo,
    kind: MemberKind,
}

/// The metadata a descriptor resolves to.
#[derive(Clone, Copy)]
pub(crate) enum ResolvedMember {
    Field(&'static NamedField),
    Property(&'static PropertyInfo),
    Method(&'static MethodInfo),
}

impl MemberDescriptor {
    /// Creates a descriptor without checking it.
    #[inline]
    pub const fn new(
        name: &'static str,
        declaring_type: &'static TypeInfo,
        value_type: &'static TypeInfo,
        kind: MemberKind,
    ) -> Self {
        Self {
            name,
            declaring_type,
            value_type,
            kind,
        }
    }

    /// Creates the descriptor of a field declared by `T`.
    #[inline]
    pub fn of_field<T: Typed>(field: &NamedField) -> Self {
        Self::new(field.name(), T::type_info(), field.type_info(), MemberKind::Field)
    }

    /// Creates the descriptor of a property declared by `T`.
    #[inline]
    pub fn of_property<T: Typed>(property: &PropertyInfo) -> Self {
        Self::new(
            property.name(),
            T::type_info(),
            property.type_info(),
            MemberKind::Property,
        )
    }

    /// Creates the descriptor of a method declared by `T`.
    #[inline]
    pub fn of_method<T: Typed>(method: &MethodInfo) -> Self {
        Self::new(
            method.name(),
            T::type_info(),
            method.return_type_info(),
            MemberKind::Method,
        )
    }

    /// Look up a member of `T` by name.
    ///
    /// Fields are searched first, then properties, then methods.
    pub fn find<T: Typed>(name: &str) -> Option<Self> {
        Self::find_in(T::type_info(), name)
    }

    /// Same as [`find`](Self::find), on a type info.
    pub fn find_in(declaring_type: &'static TypeInfo, name: &str) -> Option<Self> {
        let info = declaring_type.as_struct().ok()?;

        if let Some(field) = info.field(name) {
            return Some(Self::new(
                field.name(),
                declaring_type,
                field.type_info(),
                MemberKind::Field,
            ));
        }
        if let Some(property) = info.property(name) {
            return Some(Self::new(
                property.name(),
                declaring_type,
                property.type_info(),
                MemberKind::Property,
            ));
        }
        info.method(name).map(|method| {
            Self::new(
                method.name(),
                declaring_type,
                method.return_type_info(),
                MemberKind::Method,
            )
        })
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type exposing the member.
    #[inline]
    pub const fn declaring_type(&self) -> &'static TypeInfo {
        self.declaring_type
    }

    /// Returns the type read or written through the member.
    #[inline]
    pub const fn value_type(&self) -> &'static TypeInfo {
        self.value_type
    }

    #[inline]
    pub const fn kind(&self) -> MemberKind {
        self.kind
    }

    fn not_found(&self) -> AccessError {
        AccessError::MemberNotFound {
            type_path: self.declaring_type.type_path(),
            name: self.name,
            kind: self.kind,
        }
    }

    fn struct_info(&self) -> Result<&'static StructInfo, AccessError> {
        self.declaring_type
            .as_struct()
            .map_err(|_| self.not_found())
    }

    /// Find the metadata of the member and check its value type.
    pub(crate) fn resolve(&self) -> Result<ResolvedMember, AccessError> {
        let info = self.struct_info()?;

        let (member, value_type) = match self.kind {
            MemberKind::Field => {
                let field = info.field(self.name).ok_or_else(|| self.not_found())?;
                (ResolvedMember::Field(field), field.type_info())
            }
            MemberKind::Property => {
                let property = info.property(self.name).ok_or_else(|| self.not_found())?;
                (ResolvedMember::Property(property), property.type_info())
            }
            MemberKind::Method => {
                let method = info.method(self.name).ok_or_else(|| self.not_found())?;
                (ResolvedMember::Method(method), method.return_type_info())
            }
        };

        if value_type.ty_id() != self.value_type.ty_id() {
            return Err(AccessError::MemberTypeMismatch {
                name: self.name,
                expected: value_type.type_path(),
                found: self.value_type.type_path(),
            });
        }

        #[cfg(all(debug_assertions, feature = "debug"))]
        if let ResolvedMember::Method(method) = member {
            debug_assert_eq!(method.declaring_type().id(), self.declaring_type.ty_id());
        }

        Ok(member)
    }
}

impl PartialEq for MemberDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.declaring_type.ty_id() == other.declaring_type.ty_id()
            && self.value_type.ty_id() == other.value_type.ty_id()
    }
}

impl Eq for MemberDescriptor {}

impl fmt::Debug for MemberDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}::{}: {}",
            self.kind,
            self.declaring_type.type_path(),
            self.name,
            self.value_type.type_path(),
        )
    }
}

// -----------------------------------------------------------------------------
// Tests
