use super::conform;
use crate::types::TypeDesc;
use crate::ui::EditorUi;
use crate::value::Value;

pub(super) fn edit(ui: &mut dyn EditorUi, label: &str, ty: &TypeDesc, value: Value) -> Value {
    match conform(ty, value) {
        Value::Bool(v) => Value::Bool(ui.edit_bool(label, v)),
        Value::I32(v) => {
            let v = ui.edit_int(label, v as i64);
            Value::I32(v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
        }
        Value::I64(v) => Value::I64(ui.edit_int(label, v)),
        Value::U32(v) => {
            let v = ui.edit_uint(label, v as u64);
            Value::U32(v.min(u32::MAX as u64) as u32)
        }
        Value::U64(v) => Value::U64(ui.edit_uint(label, v)),
        Value::F32(v) => Value::F32(ui.edit_float(label, v as f64) as f32),
        Value::F64(v) => Value::F64(ui.edit_float(label, v)),
        Value::Text(v) => Value::Text(ui.edit_text(label, v)),
        // conform only hands primitive variants to this branch
        other => other,
    }
}
