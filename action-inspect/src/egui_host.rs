use crate::editable::SceneClass;
use crate::geom::{Color, Vec2, Vec3};
use crate::introspect::ObjectStore;
use crate::ui::EditorUi;
use crate::value::ObjId;
use egui::{Color32, ComboBox, DragValue};

/// Enumerates the objects a reference picker can point at.
pub trait RefSource {
    fn candidates(&self, class: &str) -> Vec<(ObjId, String)>;
}

impl<T: SceneClass> RefSource for ObjectStore<T> {
    fn candidates(&self, class: &str) -> Vec<(ObjId, String)> {
        if class != T::CLASS {
            return Vec::new();
        }
        self.ids()
            .into_iter()
            .map(|id| (id, format!("{} {:?}", T::CLASS, id)))
            .collect()
    }
}

/// egui widget host. Indentation is tracked here and applied as leading
/// space on every row.
pub struct EguiUi<'a> {
    ui: &'a mut egui::Ui,
    refs: Option<&'a dyn RefSource>,
    indent: usize,
}

impl<'a> EguiUi<'a> {
    pub fn new(ui: &'a mut egui::Ui) -> Self {
        EguiUi {
            ui,
            refs: None,
            indent: 0,
        }
    }

    pub fn with_refs(mut self, refs: &'a dyn RefSource) -> Self {
        self.refs = Some(refs);
        self
    }

    fn row<R>(&mut self, f: impl FnOnce(&mut egui::Ui) -> R) -> R {
        let pad = self.indent as f32 * 12.0;
        self.ui
            .horizontal(|ui| {
                ui.add_space(pad);
                f(ui)
            })
            .inner
    }
}

impl EditorUi for EguiUi<'_> {
    fn edit_bool(&mut self, label: &str, v: bool) -> bool {
        let mut v = v;
        self.row(|ui| {
            ui.checkbox(&mut v, label);
        });
        v
    }

    fn edit_int(&mut self, label: &str, v: i64) -> i64 {
        let mut v = v;
        self.row(|ui| {
            ui.label(label);
            ui.add(DragValue::new(&mut v));
        });
        v
    }

    fn edit_uint(&mut self, label: &str, v: u64) -> u64 {
        let mut v = v;
        self.row(|ui| {
            ui.label(label);
            ui.add(DragValue::new(&mut v));
        });
        v
    }

    fn edit_float(&mut self, label: &str, v: f64) -> f64 {
        let mut v = v;
        self.row(|ui| {
            ui.label(label);
            ui.add(DragValue::new(&mut v).speed(0.1));
        });
        v
    }

    fn edit_text(&mut self, label: &str, v: String) -> String {
        let mut v = v;
        self.row(|ui| {
            ui.label(label);
            ui.text_edit_singleline(&mut v);
        });
        v
    }

    fn edit_vec2(&mut self, label: &str, v: Vec2) -> Vec2 {
        let mut v = v;
        self.row(|ui| {
            ui.label(label);
            ui.add(DragValue::new(&mut v.x).speed(0.1));
            ui.add(DragValue::new(&mut v.y).speed(0.1));
        });
        v
    }

    fn edit_vec3(&mut self, label: &str, v: Vec3) -> Vec3 {
        let mut v = v;
        self.row(|ui| {
            ui.label(label);
            ui.add(DragValue::new(&mut v.x).speed(0.1));
            ui.add(DragValue::new(&mut v.y).speed(0.1));
            ui.add(DragValue::new(&mut v.z).speed(0.1));
        });
        v
    }

    fn edit_color(&mut self, label: &str, v: Color) -> Color {
        let mut rgba = [v.r, v.g, v.b, v.a];
        self.row(|ui| {
            ui.label(label);
            ui.color_edit_button_rgba_unmultiplied(&mut rgba);
        });
        Color {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        }
    }

    fn pick_variant(&mut self, label: &str, variants: &[&'static str], current: usize) -> usize {
        let mut current = current.min(variants.len().saturating_sub(1));
        self.row(|ui| {
            ui.label(label);
            ComboBox::from_id_source((label, "variant"))
                .selected_text(variants.get(current).copied().unwrap_or(""))
                .show_ui(ui, |ui| {
                    for (i, v) in variants.iter().enumerate() {
                        ui.selectable_value(&mut current, i, *v);
                    }
                });
        });
        current
    }

    fn pick_flags(&mut self, label: &str, variants: &[&'static str], bits: u64) -> u64 {
        let mut bits = bits;
        let summary = flags_summary(variants, bits);
        self.row(|ui| {
            ui.label(label);
            ui.menu_button(summary, |ui| {
                for (i, v) in variants.iter().enumerate() {
                    let mut on = bits & (1 << i) != 0;
                    if ui.checkbox(&mut on, *v).changed() {
                        if on {
                            bits |= 1 << i;
                        } else {
                            bits &= !(1 << i);
                        }
                    }
                }
            });
        });
        bits
    }

    fn pick_reference(
        &mut self,
        label: &str,
        class: &str,
        current: Option<ObjId>,
    ) -> Option<ObjId> {
        let mut current = current;
        let refs = self.refs;
        self.row(|ui| {
            ui.label(label);
            let shown = match current {
                Some(id) => format!("{:?}", id),
                None => "None".to_string(),
            };
            ComboBox::from_id_source((label, class))
                .selected_text(shown)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut current, None, "None");
                    if let Some(refs) = refs {
                        for (id, name) in refs.candidates(class) {
                            ui.selectable_value(&mut current, Some(id), name);
                        }
                    }
                });
        });
        current
    }

    fn edit_len(&mut self, label: &str, len: usize) -> usize {
        let mut len = len;
        self.row(|ui| {
            ui.label(label);
            ui.add(DragValue::new(&mut len));
        });
        len
    }

    fn read_only(&mut self, label: &str, text: &str) {
        let msg = if label.is_empty() {
            text.to_string()
        } else {
            format!("{}: {}", label, text)
        };
        self.row(|ui| {
            ui.weak(msg);
        });
    }

    fn warning(&mut self, text: &str) {
        let text = text.to_string();
        self.row(|ui| {
            ui.colored_label(Color32::YELLOW, text);
        });
    }

    fn foldout(&mut self, label: &str, open: bool) -> bool {
        let mut open = open;
        self.row(|ui| {
            let icon = if open { "⏷" } else { "⏵" };
            if ui
                .selectable_label(false, format!("{} {}", icon, label))
                .clicked()
            {
                open = !open;
            }
        });
        open
    }

    fn button(&mut self, label: &str) -> bool {
        self.row(|ui| ui.button(label).clicked())
    }

    fn begin_indent(&mut self) {
        self.indent += 1;
    }

    fn end_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }
}

fn flags_summary(variants: &[&'static str], bits: u64) -> String {
    let on: Vec<&str> = variants
        .iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << i) != 0)
        .map(|(_, v)| *v)
        .collect();
    if on.is_empty() {
        "None".to_string()
    } else {
        on.join(" | ")
    }
}
