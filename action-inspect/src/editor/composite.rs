use super::draw_edit;
use crate::types::CompositeDesc;
use crate::ui::{EditorUi, IndentScope};
use crate::value::Value;
use std::sync::Arc;

/// Eligible fields are edited recursively in declaration order; a field is
/// written back only when the edited value differs. Ineligible or
/// unsupported fields render read-only and are never written. An absent
/// value with no construction path stays absent, with a warning annotation.
pub(super) fn edit(
    ui: &mut dyn EditorUi,
    label: &str,
    desc: &Arc<CompositeDesc>,
    value: Value,
) -> Value {
    let mut fields = match value {
        Value::Composite(fields) if fields.len() == desc.fields.len() => fields,
        original => {
            let built = desc.construct.and_then(|make| match make() {
                Value::Composite(fields) if fields.len() == desc.fields.len() => Some(fields),
                _ => None,
            });
            match built {
                Some(fields) => fields,
                None => {
                    ui.warning(&format!("{}: cannot build a default {}", label, desc.name));
                    return original;
                }
            }
        }
    };

    ui.read_only(label, desc.name);
    let mut scope = IndentScope::enter(ui);
    for (slot, field) in fields.iter_mut().zip(&desc.fields) {
        if field.exposed {
            // unsupported field types annotate themselves and come back
            // unchanged, so they are never written either
            let edited = draw_edit(scope.ui(), field.name, &field.ty, slot.clone());
            if edited != *slot {
                *slot = edited;
            }
        } else {
            scope.ui().read_only(field.name, &field.ty.to_string());
        }
    }
    drop(scope);

    Value::Composite(fields)
}
