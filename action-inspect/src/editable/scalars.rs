use super::Editable;
use crate::types::TypeDesc;
use crate::value::Value;

macro_rules! scalar_editable {
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

scalar_editable!(bool, Bool);
scalar_editable!(i32, I32);
scalar_editable!(i64, I64);
scalar_editable!(u32, U32);
scalar_editable!(u64, U64);
scalar_editable!(f32, F32);
scalar_editable!(f64, F64);
