use super::conform;
use crate::types::TypeDesc;
use crate::ui::EditorUi;
use crate::value::Value;

pub(super) fn edit(ui: &mut dyn EditorUi, label: &str, ty: &TypeDesc, value: Value) -> Value {
    match conform(ty, value) {
        Value::Vec2(v) => Value::Vec2(ui.edit_vec2(label, v)),
        Value::Vec3(v) => Value::Vec3(ui.edit_vec3(label, v)),
        Value::Color(v) => Value::Color(ui.edit_color(label, v)),
        other => other,
    }
}
