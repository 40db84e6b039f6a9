use alloc::boxed::Box;

use mx_utils::hash::HashMap;

use crate::info::{MethodInfo, NamedField, PropertyInfo, Type, TypePath, impl_type_fn};

/// A container for compile-time named struct info.
///
/// Besides the fields, a struct may list properties and methods declared
/// with [`#[reflect_members]`](crate::derive::reflect_members).
///
/// # Examples
///
/// ```
/// use mx_reflect::{derive::Reflect, info::{Typed, StructInfo}};
///
/// #[derive(Reflect, Clone)]
/// struct A {
///     val: f32,
///     name: String,
/// }
///
/// let info: &StructInfo = A::type_info().as_struct().unwrap();
/// assert_eq!(info.field_names(), &["val", "name"]);
/// assert_eq!(info.field_at(1).unwrap().name(), "name");
/// assert!(info.field("val").unwrap().type_is::<f32>());
/// assert!(info.property("val").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: HashMap<&'static str, NamedField>,
    field_names: Box<[&'static str]>,
    properties: Box<[PropertyInfo]>,
    methods: Box<[MethodInfo]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: TypePath>(fields: &[NamedField]) -> Self {
        let field_names: Box<[&'static str]> = fields.iter().map(NamedField::name).collect();
        let fields: HashMap<_, _> = fields.iter().map(|v| (v.name(), v.clone())).collect();

        #[cfg(all(debug_assertions, feature = "debug"))]
        debug_assert_eq!(
            fields.len(),
            field_names.len(),
            "duplicate field name in `{}`",
            T::type_path(),
        );

        Self {
            ty: Type::of::<T>(),
            fields,
            field_names,
            properties: Box::new([]),
            methods: Box::new([]),
        }
    }

    /// Attach the properties of the struct.
    ///
    /// Field lookups take precedence, so a property sharing its name with a
    /// field is only reachable through [`StructInfo::property`].
    pub fn with_properties(mut self, properties: Box<[PropertyInfo]>) -> Self {
        for property in &properties {
            if self.fields.contains_key(property.name()) {
                log::warn!(
                    "property `{}` of `{}` is shadowed by a field with the same name",
                    property.name(),
                    self.ty.path(),
                );
            }
        }
        self.properties = properties;
        self
    }

    /// Attach the methods of the struct.
    pub fn with_methods(mut self, methods: Box<[MethodInfo]>) -> Self {
        self.methods = methods;
        self
    }

    /// Get the field with the given name.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(name)
    }

    /// Get the field at the given index.
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(self.field_names.get(index)?)
    }

    /// Iterate over the fields in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        // field names are always keys of `fields`
        self.field_names.iter().map(|name| &self.fields[name])
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Get the index of the field with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|s| *s == name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.field_names.len()
    }

    /// Get the property with the given name.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Returns all properties in declaration order.
    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Get the method with the given name.
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| m.name() == name)
    }

    /// Returns all methods in declaration order.
    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }
}
