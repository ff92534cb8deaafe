use crate::catalog::MethodDesc;
use crate::introspect::{Introspector, InvokeError};
use crate::invoke::EditorHost;
use crate::value::{ObjId, Value};
use slotmap::SlotMap;

/// Introspector fake that records invocations and can be told to fail on
/// one target.
pub(crate) struct ScriptedIntro {
    pub name: &'static str,
    pub methods: Vec<MethodDesc>,
    pub calls: Vec<(usize, Option<ObjId>, Vec<Value>)>,
    pub fail_on: Option<ObjId>,
}

impl ScriptedIntro {
    pub fn new(name: &'static str, methods: Vec<MethodDesc>) -> Self {
        ScriptedIntro {
            name,
            methods,
            calls: Vec::new(),
            fail_on: None,
        }
    }
}

impl Introspector for ScriptedIntro {
    fn type_name(&self) -> &'static str {
        self.name
    }

    fn declared_actions(&self) -> Vec<MethodDesc> {
        self.methods.clone()
    }

    fn invoke(
        &mut self,
        index: usize,
        receiver: Option<ObjId>,
        args: &[Value],
    ) -> Result<(), InvokeError> {
        self.calls.push((index, receiver, args.to_vec()));
        if receiver.is_some() && receiver == self.fail_on {
            return Err(InvokeError::Failed("scripted failure".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingHost {
    pub undo: Vec<(ObjId, String)>,
    pub changed: Vec<ObjId>,
    pub scene_changed: usize,
    pub simulating: bool,
}

impl EditorHost for RecordingHost {
    fn register_undo(&mut self, target: ObjId, label: &str) {
        self.undo.push((target, label.to_string()));
    }

    fn mark_changed(&mut self, target: ObjId) {
        self.changed.push(target);
    }

    fn mark_scene_changed(&mut self) {
        self.scene_changed += 1;
    }

    fn in_simulation(&self) -> bool {
        self.simulating
    }
}

/// Fresh, valid object ids with nothing behind them.
pub(crate) fn dummy_ids(n: usize) -> Vec<ObjId> {
    let mut map: SlotMap<ObjId, ()> = SlotMap::with_key();
    (0..n).map(|_| map.insert(())).collect()
}
