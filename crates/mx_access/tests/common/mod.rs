#![allow(dead_code, reason = "shared by several test binaries")]

use mx_reflect::derive::{Reflect, reflect_members};

/// Members of every kind, with reference and value types.
#[derive(Reflect, Clone, Debug, Default, PartialEq)]
#[reflect(members)]
pub struct Dummy {
    pub string_field: String,
    pub int_field: i32,
    #[reflect(skip)]
    pub string_backing: String,
    #[reflect(skip)]
    pub int_backing: i32,
}

#[reflect_members]
impl Dummy {
    #[reflect(get)]
    pub fn string_property(&self) -> String {
        self.string_backing.clone()
    }

    #[reflect(set)]
    pub fn set_string_property(&mut self, value: String) {
        self.string_backing = value;
    }

    #[reflect(get)]
    pub fn int_property(&self) -> i32 {
        self.int_backing
    }

    #[reflect(set)]
    pub fn set_int_property(&mut self, value: i32) {
        self.int_backing = value;
    }

    #[reflect(method)]
    pub fn void_method(&self) {}

    #[reflect(method)]
    pub fn string_method(&self) -> String {
        self.string_field.clone()
    }

    #[reflect(method)]
    pub fn int_method(&self) -> i32 {
        self.int_field
    }
}

/// One field per primitive type.
#[derive(Reflect, Clone, Debug, PartialEq)]
pub struct Widths {
    pub i8: i8,
    pub i16: i16,
    pub i32: i32,
    pub i64: i64,
    pub i128: i128,
    pub isize: isize,
    pub u8: u8,
    pub u16: u16,
    pub u32: u32,
    pub u64: u64,
    pub u128: u128,
    pub usize: usize,
    pub f32: f32,
    pub f64: f64,
    pub bool: bool,
    pub char: char,
}

impl Widths {
    pub fn extremes() -> Self {
        Self {
            i8: i8::MIN,
            i16: i16::MIN,
            i32: i32::MIN,
            i64: i64::MIN,
            i128: i128::MIN,
            isize: isize::MIN,
            u8: u8::MAX,
            u16: u16::MAX,
            u32: u32::MAX,
            u64: u64::MAX,
            u128: u128::MAX,
            usize: usize::MAX,
            f32: f32::MIN_POSITIVE,
            f64: -f64::EPSILON,
            bool: true,
            char: '\u{10FFFF}',
        }
    }
}

/// Members whose values are generic containers.
#[derive(Reflect, Clone, Debug, Default, PartialEq)]
#[reflect(members)]
pub struct Account {
    pub id: u32,
    pub nickname: Option<String>,
    #[reflect(skip)]
    pub tag_backing: Vec<String>,
}

#[reflect_members]
impl Account {
    #[reflect(get)]
    pub fn tags(&self) -> Vec<String> {
        self.tag_backing.clone()
    }

    #[reflect(set)]
    pub fn set_tags(&mut self, value: Vec<String>) {
        self.tag_backing = value;
    }

    #[reflect(method)]
    pub fn first_tag(&self) -> Option<String> {
        self.tag_backing.first().cloned()
    }
}
