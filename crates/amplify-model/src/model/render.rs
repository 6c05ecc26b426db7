//! Display form of shapes: `{field1: value1,field2: value2}`.

use super::Shape;

/// Append the render of `shape` to `out`.
///
/// Absent fields are skipped and there is no trailing separator, so an
/// all-absent shape renders as `{}`.
pub fn write_shape<S: Shape + ?Sized>(shape: &S, out: &mut String) {
    out.push('{');
    let mut first = true;
    for field in shape.fields() {
        let Some(value) = field.value else {
            continue;
        };
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(field.name());
        out.push_str(": ");
        value.render_value(out);
    }
    out.push('}');
}
