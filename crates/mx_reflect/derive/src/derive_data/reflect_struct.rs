use syn::{Data, DeriveInput, Fields, Ident, Type};

use super::{FieldAttributes, TypeAttributes, TypeParser};

/// A reflected field of a struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// Position among the reflected fields, used to name the glue functions.
    pub index: usize,
}

/// The parsed data of a `#[derive(Reflect)]` struct.
pub(crate) struct ReflectStruct<'a> {
    type_parser: TypeParser<'a>,
    attrs: TypeAttributes,
    mx_reflect_path: syn::Path,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    /// Only non-generic structs with named fields are accepted.
    pub(crate) fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new_spanned(
                        &input.ident,
                        "`Reflect` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(_) | Data::Union(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "`Reflect` can only be derived for structs",
                ));
            }
        };

        if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "`Reflect` can not be derived for generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.skip.is_some() {
                continue;
            }
            // Named fields always have an ident.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            fields.push(StructField {
                ident,
                ty: &field.ty,
                index: fields.len(),
            });
        }

        Ok(Self {
            type_parser: TypeParser::Local(&input.ident),
            attrs,
            mx_reflect_path: crate::path::mx_reflect(),
            fields,
        })
    }

    #[inline]
    pub(crate) fn type_parser(&self) -> &TypeParser<'a> {
        &self.type_parser
    }

    #[inline]
    pub(crate) fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub(crate) fn mx_reflect_path(&self) -> &syn::Path {
        &self.mx_reflect_path
    }

    /// The fields that are not marked with `#[reflect(skip)]`.
    #[inline]
    pub(crate) fn active_fields(&self) -> &[StructField<'a>] {
        &self.fields
    }
}
