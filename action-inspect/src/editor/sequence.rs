use super::draw_edit;
use crate::types::TypeDesc;
use crate::ui::{EditorUi, IndentScope};
use crate::value::Value;

/// Length field first; growth appends default-constructed elements, shrink
/// truncates from the end. Surviving elements are then edited in index
/// order, in place, one indent level deeper.
pub(super) fn edit(ui: &mut dyn EditorUi, label: &str, elem: &TypeDesc, value: Value) -> Value {
    let mut items = match value {
        Value::Seq(items) => items,
        _ => Vec::new(),
    };

    let len = ui.edit_len(label, items.len());
    if len < items.len() {
        items.truncate(len);
    } else {
        while items.len() < len {
            items.push(Value::default_of(elem));
        }
    }

    let mut scope = IndentScope::enter(ui);
    for i in 0..items.len() {
        let current = std::mem::replace(&mut items[i], Value::Absent);
        items[i] = draw_edit(scope.ui(), &i.to_string(), elem, current);
    }

    Value::Seq(items)
}
