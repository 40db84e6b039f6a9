//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_members;
mod reflect_opaque;
mod reflect_struct;
mod type_parser;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, MemberAttribute, TypeAttributes};
pub(crate) use type_parser::TypeParser;

pub(crate) use reflect_members::{Method, MethodReceiver, Property, ReflectMembers};
pub(crate) use reflect_opaque::ReflectOpaque;
pub(crate) use reflect_struct::{ReflectStruct, StructField};
