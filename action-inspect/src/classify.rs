use crate::types::{CompositeDesc, EnumDesc, TypeDesc};
use std::sync::Arc;

/// Shape class of a type. Single source of truth for both the support
/// predicate and the editor dispatch, so the two cannot drift apart.
#[derive(Debug)]
pub enum Class<'a> {
    Primitive,
    VectorOrStruct,
    Enum(&'a Arc<EnumDesc>),
    ObjectRef(&'static str),
    Sequence(&'a TypeDesc),
    Composite(&'a Arc<CompositeDesc>),
    Unsupported(&'static str),
}

/// Total and deterministic: every type maps to exactly one class.
pub fn classify(ty: &TypeDesc) -> Class<'_> {
    match ty {
        TypeDesc::Bool
        | TypeDesc::I32
        | TypeDesc::I64
        | TypeDesc::U32
        | TypeDesc::U64
        | TypeDesc::F32
        | TypeDesc::F64
        | TypeDesc::Text => Class::Primitive,
        TypeDesc::Vec2 | TypeDesc::Vec3 | TypeDesc::Color => Class::VectorOrStruct,
        TypeDesc::Enum(desc) => Class::Enum(desc),
        TypeDesc::Ref(class) => Class::ObjectRef(class),
        TypeDesc::Seq(elem) => Class::Sequence(elem.as_ref()),
        TypeDesc::Composite(desc) => Class::Composite(desc),
        TypeDesc::Opaque(name) => Class::Unsupported(name),
    }
}

/// Whether the editor can produce an editable widget for this type. A
/// sequence is only supported if its element type is; a composite always is,
/// since fields it cannot edit degrade to read-only annotations.
pub fn is_supported(ty: &TypeDesc) -> bool {
    match classify(ty) {
        Class::Unsupported(_) => false,
        Class::Sequence(elem) => is_supported(elem),
        _ => true,
    }
}
