mod composite;
mod enums;
mod geometry;
mod reference;
mod scalar;
mod sequence;

use crate::classify::{classify, is_supported, Class};
use crate::types::TypeDesc;
use crate::ui::EditorUi;
use crate::value::Value;

/// Draw an editable widget for `value` and hand back the edited value.
///
/// Recurses into sequence elements and composite fields, one indent level
/// per container. Unsupported types render as a read-only annotation and
/// the value comes back untouched.
pub fn draw_edit(ui: &mut dyn EditorUi, label: &str, ty: &TypeDesc, value: Value) -> Value {
    if !is_supported(ty) {
        ui.read_only(label, &format!("{} (unsupported)", ty));
        return value;
    }
    match classify(ty) {
        Class::Primitive => scalar::edit(ui, label, ty, value),
        Class::VectorOrStruct => geometry::edit(ui, label, ty, value),
        Class::Enum(desc) => enums::edit(ui, label, desc, value),
        Class::ObjectRef(class) => reference::edit(ui, label, class, value),
        Class::Sequence(elem) => sequence::edit(ui, label, elem, value),
        Class::Composite(desc) => composite::edit(ui, label, desc, value),
        // guarded by is_supported above
        Class::Unsupported(_) => value,
    }
}

/// Values that don't have the shape the descriptor asks for (a stale Absent,
/// a mismatched variant) restart from the type's default.
fn conform(ty: &TypeDesc, value: Value) -> Value {
    if value.matches(ty) {
        value
    } else {
        Value::default_of(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{vec2, vec3, Color};
    use crate::headless::HeadlessUi;
    use crate::types::EnumDesc;
    use std::sync::Arc;

    fn enum_desc(flags: bool) -> TypeDesc {
        TypeDesc::Enum(Arc::new(EnumDesc {
            name: "Mode",
            variants: vec!["Idle", "Walk", "Run"],
            flags,
        }))
    }

    #[test]
    fn test_unsupported_returns_value_unchanged() {
        let ty = TypeDesc::Opaque("RawHandle");
        let mut ui = HeadlessUi::new();
        let v = Value::Text("keep me".into());
        assert_eq!(draw_edit(&mut ui, "x", &ty, v.clone()), v);
        assert_eq!(ui.annotations, vec!["x: RawHandle (unsupported)"]);
        assert_eq!(ui.depth, 0);
    }

    #[test]
    fn test_no_edit_round_trip_is_identity() {
        let cases = vec![
            (TypeDesc::Bool, Value::Bool(true)),
            (TypeDesc::I32, Value::I32(-3)),
            (TypeDesc::I64, Value::I64(1 << 40)),
            (TypeDesc::U32, Value::U32(7)),
            (TypeDesc::U64, Value::U64(u64::MAX)),
            (TypeDesc::F32, Value::F32(0.5)),
            (TypeDesc::F64, Value::F64(-2.25)),
            (TypeDesc::Text, Value::Text("abc".into())),
            (TypeDesc::Vec2, Value::Vec2(vec2(1.0, 2.0))),
            (TypeDesc::Vec3, Value::Vec3(vec3(1.0, 2.0, 3.0))),
            (TypeDesc::Color, Value::Color(Color::WHITE)),
            (enum_desc(false), Value::Enum(2)),
            (enum_desc(true), Value::Flags(0b101)),
            (TypeDesc::Ref("Camera"), Value::Ref(None)),
            (
                TypeDesc::Seq(Box::new(TypeDesc::I32)),
                Value::Seq(vec![Value::I32(1), Value::I32(2)]),
            ),
        ];
        for (ty, v) in cases {
            let mut ui = HeadlessUi::new();
            let once = draw_edit(&mut ui, "v", &ty, v.clone());
            assert_eq!(once, v, "echoing ui must preserve {:?}", ty);
            let mut ui = HeadlessUi::new();
            let twice = draw_edit(&mut ui, "v", &ty, once);
            assert_eq!(twice, v);
            assert_eq!(ui.depth, 0, "indent must be restored for {:?}", ty);
        }
    }

    #[test]
    fn test_scripted_edit_applies() {
        let mut ui = HeadlessUi::new().edit("hp", Value::I64(12));
        let out = draw_edit(&mut ui, "hp", &TypeDesc::I32, Value::I32(3));
        assert_eq!(out, Value::I32(12));
    }

    #[test]
    fn test_mismatched_value_restarts_from_default() {
        let mut ui = HeadlessUi::new();
        let out = draw_edit(&mut ui, "hp", &TypeDesc::I32, Value::Absent);
        assert_eq!(out, Value::I32(0));
    }

    #[test]
    fn test_plain_enum_index_is_clamped() {
        let mut ui = HeadlessUi::new();
        let out = draw_edit(&mut ui, "mode", &enum_desc(false), Value::Enum(17));
        assert_eq!(out, Value::Enum(2));
    }

    #[test]
    fn test_flags_are_masked_to_declared_variants() {
        let mut ui = HeadlessUi::new();
        let out = draw_edit(&mut ui, "mode", &enum_desc(true), Value::Flags(u64::MAX));
        assert_eq!(out, Value::Flags(0b111));
    }
}
