use crate::ui::EditorUi;
use crate::value::Value;

pub(super) fn edit(ui: &mut dyn EditorUi, label: &str, class: &'static str, value: Value) -> Value {
    let current = match value {
        Value::Ref(id) => id,
        _ => None,
    };
    Value::Ref(ui.pick_reference(label, class, current))
}
