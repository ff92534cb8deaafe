use crate::geom::{Color, Vec2, Vec3};
use crate::types::TypeDesc;

slotmap::new_key_type! {
    /// Handle to a host-managed scene object.
    pub struct ObjId;
}

/// Dynamic mirror of [`TypeDesc`]: one variant per editable shape, plus
/// [`Value::Absent`] for null references, missing composites and opaques.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Text(String),
    Vec2(Vec2),
    Vec3(Vec3),
    Color(Color),
    /// Selected variant index of a plain enum.
    Enum(usize),
    /// Bitmask of a flags enum, bit i <=> variant i.
    Flags(u64),
    Ref(Option<ObjId>),
    Seq(Vec<Value>),
    /// Field values, parallel to `CompositeDesc::fields`.
    Composite(Vec<Value>),
    Absent,
}

impl Value {
    /// Zero/default value for a type: zeroes and empties for value-semantic
    /// shapes, no target for references, `Absent` when there is no viable
    /// construction path.
    pub fn default_of(ty: &TypeDesc) -> Value {
        match ty {
            TypeDesc::Bool => Value::Bool(false),
            TypeDesc::I32 => Value::I32(0),
            TypeDesc::I64 => Value::I64(0),
            TypeDesc::U32 => Value::U32(0),
            TypeDesc::U64 => Value::U64(0),
            TypeDesc::F32 => Value::F32(0.0),
            TypeDesc::F64 => Value::F64(0.0),
            TypeDesc::Text => Value::Text(String::new()),
            TypeDesc::Vec2 => Value::Vec2(Vec2::ZERO),
            TypeDesc::Vec3 => Value::Vec3(Vec3::ZERO),
            TypeDesc::Color => Value::Color(Color::default()),
            TypeDesc::Enum(desc) => {
                if desc.flags {
                    Value::Flags(0)
                } else {
                    Value::Enum(0)
                }
            }
            TypeDesc::Ref(_) => Value::Ref(None),
            TypeDesc::Seq(_) => Value::Seq(Vec::new()),
            TypeDesc::Composite(desc) => match desc.construct {
                Some(make) => make(),
                None => Value::Absent,
            },
            TypeDesc::Opaque(_) => Value::Absent,
        }
    }

    /// Shallow shape check against a type descriptor.
    pub(crate) fn matches(&self, ty: &TypeDesc) -> bool {
        match (self, ty) {
            (Value::Bool(_), TypeDesc::Bool) => true,
            (Value::I32(_), TypeDesc::I32) => true,
            (Value::I64(_), TypeDesc::I64) => true,
            (Value::U32(_), TypeDesc::U32) => true,
            (Value::U64(_), TypeDesc::U64) => true,
            (Value::F32(_), TypeDesc::F32) => true,
            (Value::F64(_), TypeDesc::F64) => true,
            (Value::Text(_), TypeDesc::Text) => true,
            (Value::Vec2(_), TypeDesc::Vec2) => true,
            (Value::Vec3(_), TypeDesc::Vec3) => true,
            (Value::Color(_), TypeDesc::Color) => true,
            (Value::Enum(_), TypeDesc::Enum(desc)) => !desc.flags,
            (Value::Flags(_), TypeDesc::Enum(desc)) => desc.flags,
            (Value::Ref(_), TypeDesc::Ref(_)) => true,
            (Value::Seq(_), TypeDesc::Seq(_)) => true,
            (Value::Composite(fields), TypeDesc::Composite(desc)) => {
                fields.len() == desc.fields.len()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompositeDesc, EnumDesc, FieldDesc};
    use std::sync::Arc;

    #[test]
    fn test_defaults() {
        assert_eq!(Value::default_of(&TypeDesc::I32), Value::I32(0));
        assert_eq!(Value::default_of(&TypeDesc::Text), Value::Text(String::new()));
        assert_eq!(Value::default_of(&TypeDesc::Ref("Camera")), Value::Ref(None));
        assert_eq!(
            Value::default_of(&TypeDesc::Seq(Box::new(TypeDesc::F32))),
            Value::Seq(vec![])
        );
        assert_eq!(Value::default_of(&TypeDesc::Opaque("Mystery")), Value::Absent);

        let flags = TypeDesc::Enum(Arc::new(EnumDesc {
            name: "Damage",
            variants: vec!["Fire", "Ice"],
            flags: true,
        }));
        assert_eq!(Value::default_of(&flags), Value::Flags(0));
    }

    #[test]
    fn test_composite_default_goes_through_construct() {
        let desc = TypeDesc::Composite(Arc::new(CompositeDesc {
            name: "P",
            fields: vec![FieldDesc {
                name: "x",
                ty: TypeDesc::F32,
                exposed: true,
            }],
            construct: Some(|| Value::Composite(vec![Value::F32(1.5)])),
        }));
        assert_eq!(
            Value::default_of(&desc),
            Value::Composite(vec![Value::F32(1.5)])
        );

        let no_ctor = TypeDesc::Composite(Arc::new(CompositeDesc {
            name: "P",
            fields: vec![],
            construct: None,
        }));
        assert_eq!(Value::default_of(&no_ctor), Value::Absent);
    }
}
