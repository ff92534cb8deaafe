use super::Editable;
use crate::types::TypeDesc;
use crate::value::{ObjId, Value};
use std::fmt;
use std::marker::PhantomData;

/// A class of host-managed objects a reference can point at. Usually
/// declared with the `scene_class!` macro.
pub trait SceneClass {
    const CLASS: &'static str;
}

/// Nullable reference to a scene object of class `T`.
pub struct ObjRef<T: SceneClass> {
    pub id: Option<ObjId>,
    _class: PhantomData<fn() -> T>,
}

impl<T: SceneClass> ObjRef<T> {
    pub fn none() -> Self {
        ObjRef {
            id: None,
            _class: PhantomData,
        }
    }

    pub fn to(id: ObjId) -> Self {
        ObjRef {
            id: Some(id),
            _class: PhantomData,
        }
    }
}

impl<T: SceneClass> Clone for ObjRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SceneClass> Copy for ObjRef<T> {}

impl<T: SceneClass> Default for ObjRef<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: SceneClass> PartialEq for ObjRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: SceneClass> fmt::Debug for ObjRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjRef<{}>({:?})", T::CLASS, self.id)
    }
}

impl<T: SceneClass> Editable for ObjRef<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::Ref(T::CLASS)
    }

    fn to_value(&self) -> Value {
        Value::Ref(self.id)
    }

    fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Ref(Some(id)) => Some(Self::to(*id)),
            Value::Ref(None) | Value::Absent => Some(Self::none()),
            _ => None,
        }
    }
}
