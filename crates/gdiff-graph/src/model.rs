use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A named sub-resource of a subobject (a mesh, a skeleton, ...).
///
/// Resources form chains (`mesh` → `skeleton`) and may expose a symbol
/// namespace (`symbols`, e.g. a skeleton's bone names) that cross-checks
/// resolve references against.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Identity of the resource (typically its asset path).
    pub name: String,
    /// Symbols this resource defines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symbols: Vec<String>,
    /// Nested resources, keyed by role ("skeleton", "physics", ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resources: BTreeMap<String, Resource>,
}

impl Resource {
    /// Create a resource with a name and no symbols or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the symbol namespace.
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a nested resource under a role name.
    pub fn with_resource(mut self, role: impl Into<String>, resource: Resource) -> Self {
        self.resources.insert(role.into(), resource);
        self
    }

    /// Returns `true` if the namespace contains `symbol`.
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }
}

/// One constituent component of a graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subobject {
    /// Instance name within the graph.
    pub name: String,
    /// Runtime type name; resolved against the schema for field
    /// enumeration and used for bucket classification.
    pub type_name: String,
    /// Field values, keyed by internal field name.
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
    /// Sub-resources, keyed by role.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resources: BTreeMap<String, Resource>,
}

impl Subobject {
    /// Create a subobject with no fields or resources.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            fields: BTreeMap::new(),
            resources: BTreeMap::new(),
        }
    }

    /// Set a field value.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Attach a resource under a role name.
    pub fn with_resource(mut self, role: impl Into<String>, resource: Resource) -> Self {
        self.resources.insert(role.into(), resource);
        self
    }

    /// Field value by internal name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A composite object graph: an ordered tree of components.
///
/// Subobjects are enumerated in stored order; the comparison engine pairs
/// them positionally, so order is significant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Graph name (shown in count-mismatch listings).
    pub name: String,
    /// Constituent components, in enumeration order.
    #[serde(default)]
    pub subobjects: Vec<Subobject>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subobjects: Vec::new(),
        }
    }

    /// Append a subobject, preserving enumeration order.
    pub fn with_subobject(mut self, subobject: Subobject) -> Self {
        self.subobjects.push(subobject);
        self
    }

    /// Subobjects whose runtime type matches `type_name`, in order.
    pub fn subobjects_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a Subobject> {
        self.subobjects
            .iter()
            .filter(move |s| s.type_name == type_name)
    }
}
