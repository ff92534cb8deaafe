mod geometry;
mod reference;
mod scalars;
mod sequence;
mod string;

pub use reference::{ObjRef, SceneClass};

use crate::types::TypeDesc;
use crate::value::Value;

/// Bridge between a static Rust type and the dynamic descriptor/value pair
/// the editor works on. Derivable for plain structs and unit enums; the
/// `editable_flags!` and `editable_opaque!` macros cover the rest.
pub trait Editable: Sized {
    fn type_desc() -> TypeDesc;
    fn to_value(&self) -> Value;
    fn from_value(v: &Value) -> Option<Self>;
}
