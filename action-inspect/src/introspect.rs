use crate::catalog::MethodDesc;
use crate::value::{ObjId, Value};
use slotmap::SlotMap;
use thiserror::Error;

/// Discovery and invocation surface over the inspected type: the marked
/// methods declared directly on it, and positional invocation of one of
/// them. Satisfied by `#[actions]`-generated `ActionSource` impls through
/// `ObjectStore`, or by hand-built implementations.
pub trait Introspector {
    /// Name of the type the actions are declared on.
    fn type_name(&self) -> &'static str;
    /// Marked methods, in declaration order.
    fn declared_actions(&self) -> Vec<MethodDesc>;
    /// Invoke the action at `index` with positional `args`, on `receiver`
    /// if one is given.
    fn invoke(
        &mut self,
        index: usize,
        receiver: Option<ObjId>,
        args: &[Value],
    ) -> Result<(), InvokeError>;
}

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("no action at index {0}")]
    UnknownAction(usize),
    #[error("target {0:?} is not in the store")]
    MissingTarget(ObjId),
    #[error("action `{0}` needs a receiver")]
    NoReceiver(&'static str),
    #[error("argument `{name}` cannot be read as {expected}")]
    BadArg {
        name: &'static str,
        expected: &'static str,
    },
    #[error("{0}")]
    Failed(String),
}

/// Implemented by `#[actions]` impl blocks: the action descriptors plus the
/// typed trampoline that unpacks positional values and calls the method.
pub trait ActionSource: Sized {
    fn type_name() -> &'static str;
    fn actions() -> Vec<MethodDesc>;
    fn invoke_action(
        this: Option<&mut Self>,
        index: usize,
        args: &[Value],
    ) -> Result<(), InvokeError>;
}

/// Slotmap-backed store of inspectable objects of one type; its keys are
/// the `ObjId`s the reference picker and the selection traffic in.
pub struct ObjectStore<T> {
    objects: SlotMap<ObjId, T>,
}

impl<T> Default for ObjectStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ObjectStore<T> {
    pub fn new() -> Self {
        ObjectStore {
            objects: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, obj: T) -> ObjId {
        self.objects.insert(obj)
    }

    pub fn remove(&mut self, id: ObjId) -> Option<T> {
        self.objects.remove(id)
    }

    pub fn get(&self, id: ObjId) -> Option<&T> {
        self.objects.get(id)
    }

    pub fn get_mut(&mut self, id: ObjId) -> Option<&mut T> {
        self.objects.get_mut(id)
    }

    pub fn ids(&self) -> Vec<ObjId> {
        self.objects.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<T: ActionSource> Introspector for ObjectStore<T> {
    fn type_name(&self) -> &'static str {
        T::type_name()
    }

    fn declared_actions(&self) -> Vec<MethodDesc> {
        T::actions()
    }

    fn invoke(
        &mut self,
        index: usize,
        receiver: Option<ObjId>,
        args: &[Value],
    ) -> Result<(), InvokeError> {
        match receiver {
            Some(id) => {
                let obj = self
                    .objects
                    .get_mut(id)
                    .ok_or(InvokeError::MissingTarget(id))?;
                T::invoke_action(Some(obj), index, args)
            }
            None => T::invoke_action(None, index, args),
        }
    }
}
