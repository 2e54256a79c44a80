use serde::{Deserialize, Serialize};

use crate::kind::FieldKind;

/// Describes one field of a struct definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Internal field name, unique within its struct.
    pub name: String,
    /// Human-facing name, when it differs from the internal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Declared semantic kind.
    pub kind: FieldKind,
    /// Whether the field is user-editable. Only editable fields are
    /// surfaced for comparison.
    #[serde(default = "default_editable")]
    pub editable: bool,
}

fn default_editable() -> bool {
    true
}

impl FieldDescriptor {
    /// Create an editable descriptor with no distinct display name.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            kind,
            editable: true,
        }
    }

    /// Set a distinct display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Mark the field as not user-editable (hidden from comparison).
    pub fn hidden(mut self) -> Self {
        self.editable = false;
        self
    }
}

/// A named struct definition: its fields in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDef {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl StructDef {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// One entry of an enum definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntry {
    /// Underlying integer value.
    pub value: i64,
    /// Authored entry name (the identifier in the enum declaration).
    pub authored: String,
    /// Optional human-facing display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// A named integer-backed enum definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    pub entries: Vec<EnumEntry>,
}

impl EnumDef {
    pub fn new(name: impl Into<String>, entries: Vec<EnumEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Find the entry with the given underlying value.
    pub fn entry(&self, value: i64) -> Option<&EnumEntry> {
        self.entries.iter().find(|e| e.value == value)
    }
}
