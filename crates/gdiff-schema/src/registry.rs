use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::{EnumDef, FieldDescriptor, StructDef};
use crate::error::{SchemaError, SchemaResult};
use crate::reflector::TypeReflector;

/// Map-backed schema registry, the standard [`TypeReflector`].
///
/// Built programmatically with [`register_struct`]/[`register_enum`] or
/// deserialized from a JSON schema file. Immutable once handed to the
/// engine (the engine only holds `&dyn TypeReflector`).
///
/// [`register_struct`]: SchemaRegistry::register_struct
/// [`register_enum`]: SchemaRegistry::register_enum
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SchemaRegistry {
    #[serde(default)]
    structs: BTreeMap<String, StructDef>,
    #[serde(default)]
    enums: BTreeMap<String, EnumDef>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a struct definition. Duplicate names are rejected.
    pub fn register_struct(&mut self, def: StructDef) -> SchemaResult<()> {
        if self.structs.contains_key(&def.name) {
            return Err(SchemaError::DuplicateStruct(def.name));
        }
        self.structs.insert(def.name.clone(), def);
        Ok(())
    }

    /// Register an enum definition. Duplicate names are rejected.
    pub fn register_enum(&mut self, def: EnumDef) -> SchemaResult<()> {
        if self.enums.contains_key(&def.name) {
            return Err(SchemaError::DuplicateEnum(def.name));
        }
        self.enums.insert(def.name.clone(), def);
        Ok(())
    }

    /// Look up a struct definition by name.
    pub fn struct_def(&self, name: &str) -> Option<&StructDef> {
        self.structs.get(name)
    }

    /// Look up an enum definition by name.
    pub fn enum_def(&self, name: &str) -> Option<&EnumDef> {
        self.enums.get(name)
    }

    /// Registered struct names, sorted.
    pub fn struct_names(&self) -> impl Iterator<Item = &str> {
        self.structs.keys().map(String::as_str)
    }

    /// Registered enum names, sorted.
    pub fn enum_names(&self) -> impl Iterator<Item = &str> {
        self.enums.keys().map(String::as_str)
    }

    /// Parse a registry from a JSON string.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a registry from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl TypeReflector for SchemaRegistry {
    fn fields_of(&self, type_name: &str) -> Option<Vec<&FieldDescriptor>> {
        let def = self.structs.get(type_name)?;
        Some(def.fields.iter().filter(|f| f.editable).collect())
    }

    fn authored_name(&self, enum_name: &str, value: i64) -> Option<String> {
        let entry = self.enums.get(enum_name)?.entry(value)?;
        Some(entry.authored.clone())
    }

    fn display_name(&self, enum_name: &str, value: i64) -> Option<String> {
        let entry = self.enums.get(enum_name)?.entry(value)?;
        match entry.display.as_deref() {
            Some("") | None => None,
            Some(display) => Some(display.to_string()),
        }
    }
}
