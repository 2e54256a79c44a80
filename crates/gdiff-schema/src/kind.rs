use serde::{Deserialize, Serialize};

/// The closed set of semantic field kinds the engine can compare.
///
/// Every declared field of every struct definition carries exactly one of
/// these. Dispatch in the engine is a single match over this enum, so a new
/// kind cannot be added without the compiler pointing at every comparison
/// site that must handle it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Boolean flag.
    Bool,
    /// Signed integer.
    Int,
    /// Floating-point number.
    Float,
    /// Plain string.
    Str,
    /// Localized text, compared by its rendered string.
    Text,
    /// Symbolic name (bone names, socket names).
    Name,
    /// Integer-backed enum; the payload names the [`EnumDef`] to render
    /// values with.
    ///
    /// [`EnumDef`]: crate::descriptor::EnumDef
    Enum(String),
    /// Reference to another object, compared by the referent's name.
    ObjectRef,
    /// Reference to a class/type, compared by the referent's name.
    ClassRef,
    /// Soft (lazy) object reference, compared by its path string without
    /// resolving it.
    SoftRef,
    /// Nested struct; the payload names the [`StructDef`] to recurse into.
    ///
    /// [`StructDef`]: crate::descriptor::StructDef
    Struct(String),
    /// Ordered array of one element kind, compared strictly by index.
    Array(Box<FieldKind>),
}

impl FieldKind {
    /// Returns `true` for kinds compared as a single stringified value
    /// (everything except `Struct` and `Array`).
    pub fn is_leaf(&self) -> bool {
        !matches!(self, FieldKind::Struct(_) | FieldKind::Array(_))
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Bool => write!(f, "Bool"),
            FieldKind::Int => write!(f, "Int"),
            FieldKind::Float => write!(f, "Float"),
            FieldKind::Str => write!(f, "Str"),
            FieldKind::Text => write!(f, "Text"),
            FieldKind::Name => write!(f, "Name"),
            FieldKind::Enum(name) => write!(f, "Enum({name})"),
            FieldKind::ObjectRef => write!(f, "ObjectRef"),
            FieldKind::ClassRef => write!(f, "ClassRef"),
            FieldKind::SoftRef => write!(f, "SoftRef"),
            FieldKind::Struct(name) => write!(f, "Struct({name})"),
            FieldKind::Array(inner) => write!(f, "Array<{inner}>"),
        }
    }
}
