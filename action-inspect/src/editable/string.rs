use super::Editable;
use crate::types::TypeDesc;
use crate::value::Value;

impl Editable for String {
    fn type_desc() -> TypeDesc {
        TypeDesc::Text
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}
