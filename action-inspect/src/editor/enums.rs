use crate::types::EnumDesc;
use crate::ui::EditorUi;
use crate::value::Value;
use std::sync::Arc;

pub(super) fn edit(
    ui: &mut dyn EditorUi,
    label: &str,
    desc: &Arc<EnumDesc>,
    value: Value,
) -> Value {
    if desc.flags {
        let bits = match value {
            Value::Flags(bits) => bits,
            _ => 0,
        };
        let mask = declared_mask(desc.variants.len());
        Value::Flags(ui.pick_flags(label, &desc.variants, bits & mask) & mask)
    } else {
        let last = desc.variants.len().saturating_sub(1);
        let current = match value {
            Value::Enum(i) => i.min(last),
            _ => 0,
        };
        Value::Enum(ui.pick_variant(label, &desc.variants, current).min(last))
    }
}

fn declared_mask(variants: usize) -> u64 {
    if variants >= 64 {
        u64::MAX
    } else {
        (1u64 << variants) - 1
    }
}
