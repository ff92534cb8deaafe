use crate::geom::{Color, Vec2, Vec3};
use crate::ui::EditorUi;
use crate::value::{ObjId, Value};
use rustc_hash::{FxHashMap, FxHashSet};

/// `EditorUi` without real widgets: every editor echoes the current value
/// unless an input was scripted for its label, and annotations are recorded
/// instead of drawn. Drives the form in tests and headless automation.
///
/// Scripted inputs are consumed on first use, so a second draw pass sees a
/// plain echo. Numeric edits are scripted with the wide variants
/// (`Value::I64`, `Value::U64`, `Value::F64`).
#[derive(Default)]
pub struct HeadlessUi {
    edits: FxHashMap<String, Value>,
    lens: FxHashMap<String, usize>,
    clicks: FxHashSet<String>,
    toggles: FxHashSet<String>,
    picks: FxHashMap<String, Option<ObjId>>,
    pub annotations: Vec<String>,
    pub warnings: Vec<String>,
    pub depth: usize,
}

impl HeadlessUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(mut self, label: &str, v: Value) -> Self {
        self.edits.insert(label.to_string(), v);
        self
    }

    pub fn set_len(mut self, label: &str, len: usize) -> Self {
        self.lens.insert(label.to_string(), len);
        self
    }

    pub fn click(mut self, label: &str) -> Self {
        self.clicks.insert(label.to_string());
        self
    }

    pub fn toggle(mut self, label: &str) -> Self {
        self.toggles.insert(label.to_string());
        self
    }

    pub fn pick(mut self, label: &str, id: Option<ObjId>) -> Self {
        self.picks.insert(label.to_string(), id);
        self
    }

    fn scripted(&mut self, label: &str) -> Option<Value> {
        self.edits.remove(label)
    }
}

impl EditorUi for HeadlessUi {
    fn edit_bool(&mut self, label: &str, v: bool) -> bool {
        match self.scripted(label) {
            Some(Value::Bool(b)) => b,
            _ => v,
        }
    }

    fn edit_int(&mut self, label: &str, v: i64) -> i64 {
        match self.scripted(label) {
            Some(Value::I64(x)) => x,
            Some(Value::I32(x)) => x as i64,
            _ => v,
        }
    }

    fn edit_uint(&mut self, label: &str, v: u64) -> u64 {
        match self.scripted(label) {
            Some(Value::U64(x)) => x,
            Some(Value::U32(x)) => x as u64,
            _ => v,
        }
    }

    fn edit_float(&mut self, label: &str, v: f64) -> f64 {
        match self.scripted(label) {
            Some(Value::F64(x)) => x,
            Some(Value::F32(x)) => x as f64,
            _ => v,
        }
    }

    fn edit_text(&mut self, label: &str, v: String) -> String {
        match self.scripted(label) {
            Some(Value::Text(s)) => s,
            _ => v,
        }
    }

    fn edit_vec2(&mut self, label: &str, v: Vec2) -> Vec2 {
        match self.scripted(label) {
            Some(Value::Vec2(x)) => x,
            _ => v,
        }
    }

    fn edit_vec3(&mut self, label: &str, v: Vec3) -> Vec3 {
        match self.scripted(label) {
            Some(Value::Vec3(x)) => x,
            _ => v,
        }
    }

    fn edit_color(&mut self, label: &str, v: Color) -> Color {
        match self.scripted(label) {
            Some(Value::Color(x)) => x,
            _ => v,
        }
    }

    fn pick_variant(&mut self, label: &str, _variants: &[&'static str], current: usize) -> usize {
        match self.scripted(label) {
            Some(Value::Enum(i)) => i,
            _ => current,
        }
    }

    fn pick_flags(&mut self, label: &str, _variants: &[&'static str], bits: u64) -> u64 {
        match self.scripted(label) {
            Some(Value::Flags(b)) => b,
            _ => bits,
        }
    }

    fn pick_reference(
        &mut self,
        label: &str,
        _class: &str,
        current: Option<ObjId>,
    ) -> Option<ObjId> {
        self.picks.remove(label).unwrap_or(current)
    }

    fn edit_len(&mut self, label: &str, len: usize) -> usize {
        self.lens.remove(label).unwrap_or(len)
    }

    fn read_only(&mut self, label: &str, text: &str) {
        if label.is_empty() {
            self.annotations.push(text.to_string());
        } else {
            self.annotations.push(format!("{}: {}", label, text));
        }
    }

    fn warning(&mut self, text: &str) {
        self.warnings.push(text.to_string());
    }

    fn foldout(&mut self, label: &str, open: bool) -> bool {
        if self.toggles.remove(label) {
            !open
        } else {
            open
        }
    }

    fn button(&mut self, label: &str) -> bool {
        self.clicks.remove(label)
    }

    fn begin_indent(&mut self) {
        self.depth += 1;
    }

    fn end_indent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
