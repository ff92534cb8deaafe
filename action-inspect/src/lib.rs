pub mod catalog;
pub mod classify;
pub mod editable;
pub mod editor;
pub mod egui_host;
pub mod fold;
pub mod geom;
pub mod headless;
pub mod introspect;
pub mod invoke;
pub mod panel;
#[cfg(test)]
pub(crate) mod testutil;
pub mod types;
pub mod ui;
pub mod value;

pub use catalog::{
    build_catalog, nickname, MethodDesc, OperationDescriptor, ParamDesc, ParamSlot, TargetKind,
};
pub use classify::{classify, is_supported, Class};
pub use editable::{Editable, ObjRef, SceneClass};
pub use editor::draw_edit;
pub use egui;
pub use egui_host::{EguiUi, RefSource};
pub use fold::{fold_key, FoldFile, FoldStore, MemFolds};
pub use geom::{vec2, vec3, Color, Vec2, Vec3};
pub use headless::HeadlessUi;
pub use introspect::{ActionSource, Introspector, InvokeError, ObjectStore};
pub use invoke::{run_action, EditorHost, InvokeOutcome};
pub use panel::ActionPanel;
pub use types::{CompositeDesc, EnumDesc, FieldDesc, TypeDesc};
pub use ui::{EditorUi, IndentScope};
pub use value::{ObjId, Value};

pub use action_inspect_derive::{actions, Editable};

/// Declares a reference class for `ObjRef<T>` parameters.
#[macro_export]
macro_rules! scene_class {
    ($t:ty) => {
        impl $crate::SceneClass for $t {
            const CLASS: &'static str = stringify!($t);
        }
    };
}

/// Opts a type out of editing: it classifies as unsupported and renders as
/// a read-only annotation wherever it appears.
#[macro_export]
macro_rules! editable_opaque {
    ($t:ty) => {
        impl $crate::Editable for $t {
            fn type_desc() -> $crate::TypeDesc {
                $crate::TypeDesc::Opaque(stringify!($t))
            }

            fn to_value(&self) -> $crate::Value {
                $crate::Value::Absent
            }

            fn from_value(_: &$crate::Value) -> Option<Self> {
                None
            }
        }
    };
}

/// Flags-enum editing for a newtype over `u64`: bit i maps to the i-th
/// listed variant name.
#[macro_export]
macro_rules! editable_flags {
    ($t:ty, [$($variant:literal),+ $(,)?]) => {
        impl $crate::Editable for $t {
            fn type_desc() -> $crate::TypeDesc {
                $crate::TypeDesc::Enum(::std::sync::Arc::new($crate::EnumDesc {
                    name: stringify!($t),
                    variants: vec![$($variant),+],
                    flags: true,
                }))
            }

            fn to_value(&self) -> $crate::Value {
                $crate::Value::Flags(self.0)
            }

            fn from_value(v: &$crate::Value) -> Option<Self> {
                match v {
                    $crate::Value::Flags(bits) => Some(Self(*bits)),
                    _ => None,
                }
            }
        }
    };
}
