use super::Editable;
use crate::geom::{Color, Vec2, Vec3};
use crate::types::TypeDesc;
use crate::value::Value;

macro_rules! geom_editable {
    ($t:ty, $variant:ident) => {
        impl Editable for $t {
            fn type_desc() -> TypeDesc {
                TypeDesc::$variant
            }

            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }

            fn from_value(v: &Value) -> Option<Self> {
                match v {
                    Value::$variant(x) => Some(*x),
                    _ => None,
                }
            }
        }
    };
}

geom_editable!(Vec2, Vec2);
geom_editable!(Vec3, Vec3);
geom_editable!(Color, Color);
