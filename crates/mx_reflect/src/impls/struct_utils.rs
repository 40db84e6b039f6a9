use core::fmt;

use crate::Reflect;

/// A function use for implementing [`Reflect::reflect_partial_eq`] on structs.
///
/// # Rules
///
/// - If `y` is not of the same type as `x`, return `Some(false)`.
/// - Compare the fields in declaration order with `reflect_partial_eq`,
///   the first result that is not `Some(true)` is returned.
/// - Properties and methods do not take part in the comparison.
pub fn struct_partial_eq(x: &dyn Reflect, y: &dyn Reflect) -> Option<bool> {
    if x.ty_id() != y.ty_id() {
        return Some(false);
    }
    let Ok(info) = x.reflect_type_info().as_struct() else {
        return None;
    };

    for field in info.iter() {
        let (Some(x_field), Some(y_field)) = (field.get(x), field.get(y)) else {
            return None;
        };
        let result = x_field.reflect_partial_eq(y_field);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`] on structs.
///
/// Output looks like the derived [`Debug`], with the type path as name.
pub fn struct_debug(value: &dyn Reflect, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(value.reflect_type_path());

    if let Ok(info) = value.reflect_type_info().as_struct() {
        for field in info.iter() {
            if let Some(field_value) = field.get(value) {
                debug.field(field.name(), &field_value as &dyn fmt::Debug);
            }
        }
    }
    debug.finish()
}
