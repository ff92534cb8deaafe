use crate::catalog::{build_catalog, nickname, OperationDescriptor};
use crate::editor::draw_edit;
use crate::fold::{fold_key, FoldStore};
use crate::introspect::Introspector;
use crate::invoke::{run_action, EditorHost};
use crate::ui::{EditorUi, IndentScope};
use crate::value::ObjId;

/// Action form for one inspected selection: built once when the selection
/// changes, drawn on every repaint. Parameterless operations render as a
/// bare button; the rest get a persisted foldout holding the parameter
/// editors and the invoke button.
pub struct ActionPanel {
    ident: String,
    type_name: &'static str,
    ops: Vec<OperationDescriptor>,
}

impl ActionPanel {
    pub fn build(ident: impl Into<String>, intro: &dyn Introspector, folds: &dyn FoldStore) -> Self {
        let ident = ident.into();
        let ops = build_catalog(intro, &ident, folds);
        ActionPanel {
            ident,
            type_name: intro.type_name(),
            ops,
        }
    }

    pub fn operations(&self) -> &[OperationDescriptor] {
        &self.ops
    }

    /// Redraw entry point. Draws every operation's form, updates parameter
    /// values from the widgets, and runs any triggered invocation before
    /// returning control to the host.
    pub fn draw(
        &mut self,
        ui: &mut dyn EditorUi,
        intro: &mut dyn Introspector,
        selection: &[ObjId],
        host: &mut dyn EditorHost,
        folds: &mut dyn FoldStore,
    ) {
        for op in &mut self.ops {
            let mut trigger = false;
            if op.params.is_empty() {
                trigger = ui.button(&op.display_name);
            } else {
                let open = ui.foldout(&op.display_name, op.open);
                if open != op.open {
                    op.open = open;
                    folds.set(&fold_key(&self.ident, self.type_name, op.name), open);
                }
                if open {
                    let mut scope = IndentScope::enter(ui);
                    for p in &mut op.params {
                        let label = nickname(p.name);
                        let current = p.value.clone();
                        p.value = draw_edit(scope.ui(), &label, &p.ty, current);
                    }
                    trigger = scope.ui().button(&op.display_name);
                }
            }
            if trigger {
                run_action(op, selection, intro, host);
            }
        }
    }
}
