use crate::geom::{Color, Vec2, Vec3};
use crate::value::ObjId;

/// Leaf widget surface the editor draws through: one method per widget
/// shape, each taking a label and the current value and returning the
/// edited value. Hosts are swappable; `EguiUi` is the shipped frontend and
/// `HeadlessUi` the scripted one.
pub trait EditorUi {
    fn edit_bool(&mut self, label: &str, v: bool) -> bool;
    fn edit_int(&mut self, label: &str, v: i64) -> i64;
    fn edit_uint(&mut self, label: &str, v: u64) -> u64;
    fn edit_float(&mut self, label: &str, v: f64) -> f64;
    fn edit_text(&mut self, label: &str, v: String) -> String;
    fn edit_vec2(&mut self, label: &str, v: Vec2) -> Vec2;
    fn edit_vec3(&mut self, label: &str, v: Vec3) -> Vec3;
    fn edit_color(&mut self, label: &str, v: Color) -> Color;
    /// Single-choice picker, returns the selected variant index.
    fn pick_variant(&mut self, label: &str, variants: &[&'static str], current: usize) -> usize;
    /// Multi-select bitmask editor, bit i <=> variants[i].
    fn pick_flags(&mut self, label: &str, variants: &[&'static str], bits: u64) -> u64;
    /// Reference picker over the host's objects of `class`.
    fn pick_reference(&mut self, label: &str, class: &str, current: Option<ObjId>)
        -> Option<ObjId>;
    /// Length field of a sequence.
    fn edit_len(&mut self, label: &str, len: usize) -> usize;
    fn read_only(&mut self, label: &str, text: &str);
    fn warning(&mut self, text: &str);
    /// Disclosure row; returns the new open state.
    fn foldout(&mut self, label: &str, open: bool) -> bool;
    fn button(&mut self, label: &str) -> bool;
    fn begin_indent(&mut self);
    fn end_indent(&mut self);
}

/// One level of visual nesting, restored on drop whatever path the draw
/// took.
pub struct IndentScope<'a> {
    ui: &'a mut dyn EditorUi,
}

impl<'a> IndentScope<'a> {
    pub fn enter(ui: &'a mut dyn EditorUi) -> Self {
        ui.begin_indent();
        IndentScope { ui }
    }

    pub fn ui(&mut self) -> &mut dyn EditorUi {
        &mut *self.ui
    }
}

impl Drop for IndentScope<'_> {
    fn drop(&mut self) {
        self.ui.end_indent();
    }
}
