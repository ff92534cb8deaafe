use super::Editable;
use crate::types::TypeDesc;
use crate::value::Value;

impl<T: Editable> Editable for Vec<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::Seq(Box::new(T::type_desc()))
    }

    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(Editable::to_value).collect())
    }

    fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Seq(items) => items.iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}
