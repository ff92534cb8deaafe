use crate::catalog::{OperationDescriptor, TargetKind};
use crate::introspect::Introspector;
use crate::value::{ObjId, Value};

/// Host facilities around an invocation: reversible-action registration and
/// dirty marking. All calls are scoped to one target except the scene flag.
pub trait EditorHost {
    fn register_undo(&mut self, target: ObjId, label: &str);
    fn mark_changed(&mut self, target: ObjId);
    fn mark_scene_changed(&mut self);
    /// Live-simulation mode suppresses the scene dirty flag.
    fn in_simulation(&self) -> bool;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InvokeOutcome {
    pub invoked: usize,
    pub failed: usize,
}

/// Runs one operation with its captured parameter values.
///
/// Statics invoke exactly once with no receiver, even with an empty
/// selection. Instance operations invoke once per selected target in
/// iteration order; the undo step is registered before each invocation and
/// a per-target failure is logged without aborting the remaining targets.
/// Failures never propagate past this point.
pub fn run_action(
    op: &OperationDescriptor,
    selection: &[ObjId],
    intro: &mut dyn Introspector,
    host: &mut dyn EditorHost,
) -> InvokeOutcome {
    let args: Vec<Value> = op.params.iter().map(|p| p.value.clone()).collect();
    let mut out = InvokeOutcome::default();

    match op.target {
        TargetKind::Static => match intro.invoke(op.index, None, &args) {
            Ok(()) => out.invoked += 1,
            Err(e) => {
                out.failed += 1;
                log::error!("action `{}` failed: {}", op.name, e);
            }
        },
        TargetKind::Instance => {
            for &id in selection {
                host.register_undo(id, &op.display_name);
                match intro.invoke(op.index, Some(id), &args) {
                    Ok(()) => {
                        host.mark_changed(id);
                        out.invoked += 1;
                    }
                    Err(e) => {
                        out.failed += 1;
                        log::error!("action `{}` on {:?} failed: {}", op.name, id, e);
                    }
                }
            }
            if !selection.is_empty() && !host.in_simulation() {
                host.mark_scene_changed();
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{build_catalog, MethodDesc, ParamDesc, TargetKind};
    use crate::fold::MemFolds;
    use crate::testutil::{dummy_ids, RecordingHost, ScriptedIntro};
    use crate::types::TypeDesc;

    fn catalog_with(methods: Vec<MethodDesc>) -> (ScriptedIntro, Vec<OperationDescriptor>) {
        let intro = ScriptedIntro::new("Turret", methods);
        let ops = build_catalog(&intro, "sel", &MemFolds::default());
        (intro, ops)
    }

    #[test]
    fn test_static_invokes_once_with_empty_selection() {
        let (mut intro, ops) = catalog_with(vec![MethodDesc {
            name: "reset_all",
            display: None,
            target: TargetKind::Static,
            params: vec![],
        }]);
        let mut host = RecordingHost::default();
        let out = run_action(&ops[0], &[], &mut intro, &mut host);
        assert_eq!(out, InvokeOutcome { invoked: 1, failed: 0 });
        assert_eq!(intro.calls.len(), 1);
        assert_eq!(intro.calls[0].1, None);
        assert!(host.changed.is_empty());
        assert_eq!(host.scene_changed, 0);
    }

    #[test]
    fn test_one_failing_target_does_not_abort_the_others() {
        let (mut intro, ops) = catalog_with(vec![MethodDesc {
            name: "fire",
            display: None,
            target: TargetKind::Instance,
            params: vec![ParamDesc::new("power", TypeDesc::F32)],
        }]);
        let ids = dummy_ids(3);
        intro.fail_on = Some(ids[1]);

        let mut host = RecordingHost::default();
        let out = run_action(&ops[0], &ids, &mut intro, &mut host);

        assert_eq!(out, InvokeOutcome { invoked: 2, failed: 1 });
        assert_eq!(intro.calls.len(), 3);
        assert_eq!(host.changed, vec![ids[0], ids[2]]);
        assert_eq!(host.undo.len(), 3);
        assert_eq!(host.scene_changed, 1);
    }

    #[test]
    fn test_all_targets_get_the_same_captured_args() {
        let (mut intro, mut ops) = catalog_with(vec![MethodDesc {
            name: "fire",
            display: None,
            target: TargetKind::Instance,
            params: vec![ParamDesc::new("power", TypeDesc::F32)],
        }]);
        ops[0].params[0].value = crate::value::Value::F32(3.5);
        let ids = dummy_ids(2);
        let mut host = RecordingHost::default();
        run_action(&ops[0], &ids, &mut intro, &mut host);
        for (_, _, args) in &intro.calls {
            assert_eq!(args, &vec![crate::value::Value::F32(3.5)]);
        }
    }

    #[test]
    fn test_simulation_mode_suppresses_scene_flag() {
        let (mut intro, ops) = catalog_with(vec![MethodDesc {
            name: "fire",
            display: None,
            target: TargetKind::Instance,
            params: vec![],
        }]);
        let ids = dummy_ids(1);
        let mut host = RecordingHost {
            simulating: true,
            ..Default::default()
        };
        run_action(&ops[0], &ids, &mut intro, &mut host);
        assert_eq!(host.scene_changed, 0);
        assert_eq!(host.changed, ids);
    }

    #[test]
    fn test_empty_selection_leaves_scene_flag_alone() {
        let (mut intro, ops) = catalog_with(vec![MethodDesc {
            name: "fire",
            display: None,
            target: TargetKind::Instance,
            params: vec![],
        }]);
        let mut host = RecordingHost::default();
        let out = run_action(&ops[0], &[], &mut intro, &mut host);
        assert_eq!(out, InvokeOutcome::default());
        assert_eq!(host.scene_changed, 0);
    }
}
