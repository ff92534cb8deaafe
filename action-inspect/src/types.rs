use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Runtime descriptor of an editable type. Closed set: extending support
/// means adding a variant here and its handlers in `classify` and `editor`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDesc {
    Bool,
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    Text,
    Vec2,
    Vec3,
    Color,
    Enum(Arc<EnumDesc>),
    /// Reference to a host-managed object of the named class.
    Ref(&'static str),
    Seq(Box<TypeDesc>),
    Composite(Arc<CompositeDesc>),
    /// Anything the editor does not know how to edit, kept by name for
    /// diagnostics and read-only annotations.
    Opaque(&'static str),
}

#[derive(Debug)]
pub struct EnumDesc {
    pub name: &'static str,
    pub variants: Vec<&'static str>,
    /// Flags enums are edited as a multi-select bitmask.
    pub flags: bool,
}

// Nominal equality: descriptors describe named types.
impl PartialEq for EnumDesc {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[derive(Debug)]
pub struct CompositeDesc {
    pub name: &'static str,
    /// Declaration order.
    pub fields: Vec<FieldDesc>,
    /// Default-construction path. `None` means construction fails and an
    /// absent value stays absent.
    pub construct: Option<fn() -> Value>,
}

impl PartialEq for CompositeDesc {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDesc {
    pub name: &'static str,
    pub ty: TypeDesc,
    /// Public field, or non-public explicitly marked for editing.
    pub exposed: bool,
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDesc::Bool => f.write_str("bool"),
            TypeDesc::I32 => f.write_str("i32"),
            TypeDesc::I64 => f.write_str("i64"),
            TypeDesc::U32 => f.write_str("u32"),
            TypeDesc::U64 => f.write_str("u64"),
            TypeDesc::F32 => f.write_str("f32"),
            TypeDesc::F64 => f.write_str("f64"),
            TypeDesc::Text => f.write_str("String"),
            TypeDesc::Vec2 => f.write_str("Vec2"),
            TypeDesc::Vec3 => f.write_str("Vec3"),
            TypeDesc::Color => f.write_str("Color"),
            TypeDesc::Enum(desc) => f.write_str(desc.name),
            TypeDesc::Ref(class) => write!(f, "&{}", class),
            TypeDesc::Seq(elem) => write!(f, "Vec<{}>", elem),
            TypeDesc::Composite(desc) => f.write_str(desc.name),
            TypeDesc::Opaque(name) => f.write_str(name),
        }
    }
}
