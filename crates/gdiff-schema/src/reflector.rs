use crate::descriptor::FieldDescriptor;

/// What the comparison engine needs from a type schema.
///
/// All implementations must satisfy these invariants:
/// - `fields_of` returns only user-editable fields, in declaration order,
///   and returns the same sequence for the same type name for the lifetime
///   of the reflector.
/// - Enum name lookups are pure: the same (enum, value) pair always yields
///   the same result.
/// - Implementations are immutable once built, so concurrent reads from
///   independent comparison runs are always safe.
pub trait TypeReflector: Send + Sync {
    /// The editable fields of a named struct type, in declaration order.
    ///
    /// Returns `None` when no definition with that name is registered.
    fn fields_of(&self, type_name: &str) -> Option<Vec<&FieldDescriptor>>;

    /// The authored entry name of an enum value, `None` when either the
    /// enum or the value is unknown.
    fn authored_name(&self, enum_name: &str, value: i64) -> Option<String>;

    /// The display name of an enum value. `None` when the enum or value is
    /// unknown, or when no distinct display name was declared.
    fn display_name(&self, enum_name: &str, value: i64) -> Option<String>;
}
