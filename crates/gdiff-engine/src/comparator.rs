//! Field-level recursive comparison.
//!
//! [`Comparator`] holds the reflector and the log for one run and walks two
//! values of a declared kind in lock-step. Leaf kinds are stringified per
//! side and a Difference is recorded only when the two strings are unequal;
//! structs and arrays recurse with path segments appended on both sides.

use std::collections::BTreeMap;

use gdiff_graph::Value;
use gdiff_schema::{FieldDescriptor, FieldKind, TypeReflector};
use gdiff_types::{path, DifferenceLog};

/// Stringify a float for comparison and display.
///
/// Policy: fixed six fractional digits, trailing zeros trimmed, at least
/// one fractional digit kept (`1.0 -> "1.0"`, `0.25 -> "0.25"`). Two floats
/// that render identically under this policy are treated as equal even when
/// their raw representations differ; drift below the sixth fractional digit
/// is suppressed. Non-finite values use the standard `Display` form.
pub fn stringify_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{value:.6}");
    let trimmed = rendered.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// The recursive property comparator of one run.
///
/// Owns the [`DifferenceLog`] for the duration of the run; there is no
/// ambient accumulator. Reads the schema through `&dyn TypeReflector`
/// only, so the same engine works against any statically-declared schema.
pub struct Comparator<'a> {
    reflector: &'a dyn TypeReflector,
    log: DifferenceLog,
}

impl<'a> Comparator<'a> {
    /// Create a comparator with an empty log.
    pub fn new(reflector: &'a dyn TypeReflector) -> Self {
        Self {
            reflector,
            log: DifferenceLog::new(),
        }
    }

    /// The log accumulated so far.
    pub fn log(&self) -> &DifferenceLog {
        &self.log
    }

    /// Mutable access for run-level narration and warnings.
    pub fn log_mut(&mut self) -> &mut DifferenceLog {
        &mut self.log
    }

    /// Finish the run, yielding the accumulated log.
    pub fn into_log(self) -> DifferenceLog {
        self.log
    }

    /// Compare one declared field of two corresponding values.
    ///
    /// `path_a`/`path_b` identify the owners of the field on each side; the
    /// field's own label (and any struct/array segments below it) is
    /// appended here. Appends zero or more records to the log.
    pub fn compare_field(
        &mut self,
        path_a: &str,
        path_b: &str,
        descriptor: &FieldDescriptor,
        value_a: &Value,
        value_b: &Value,
    ) {
        match &descriptor.kind {
            FieldKind::Struct(struct_name) => match (value_a, value_b) {
                (Value::Struct(fields_a), Value::Struct(fields_b)) => {
                    self.compare_struct(path_a, path_b, struct_name, fields_a, fields_b);
                }
                _ => self.shape_error(path_a, descriptor, value_a, value_b),
            },
            FieldKind::Array(element_kind) => match (value_a, value_b) {
                (Value::Array(items_a), Value::Array(items_b)) => {
                    self.compare_array(
                        path_a,
                        path_b,
                        descriptor,
                        element_kind,
                        items_a,
                        items_b,
                    );
                }
                _ => self.shape_error(path_a, descriptor, value_a, value_b),
            },
            leaf => {
                let display = descriptor.display_name.as_deref();
                let labeled_a = path::append_label(path_a, &descriptor.name, display);
                let labeled_b = path::append_label(path_b, &descriptor.name, display);
                self.compare_leaf(&labeled_a, &labeled_b, leaf, value_a, value_b);
            }
        }
    }

    fn shape_error(
        &mut self,
        path: &str,
        descriptor: &FieldDescriptor,
        value_a: &Value,
        value_b: &Value,
    ) {
        let labeled = path::append_label(path, &descriptor.name, descriptor.display_name.as_deref());
        self.log.error(format!(
            "No comparison done for {labeled}: declared {} but found {} and {}",
            descriptor.kind,
            value_a.shape(),
            value_b.shape()
        ));
    }

    /// Compare one array element. The incoming paths already carry the
    /// `name[i]` segment, so leaf elements do not append a further label.
    fn compare_element(
        &mut self,
        path_a: &str,
        path_b: &str,
        element_kind: &FieldKind,
        value_a: &Value,
        value_b: &Value,
    ) {
        match element_kind {
            FieldKind::Struct(struct_name) => match (value_a, value_b) {
                (Value::Struct(fields_a), Value::Struct(fields_b)) => {
                    self.compare_struct(path_a, path_b, struct_name, fields_a, fields_b);
                }
                _ => self.log.error(format!(
                    "No comparison done for {path_a}: declared {element_kind} but found {} and {}",
                    value_a.shape(),
                    value_b.shape()
                )),
            },
            // Nested arrays are rejected before iteration in compare_array.
            FieldKind::Array(_) => {}
            leaf => self.compare_leaf(path_a, path_b, leaf, value_a, value_b),
        }
    }

    /// Recurse into every declared field of a struct, with the struct's
    /// type name appended as a path segment on both sides.
    fn compare_struct(
        &mut self,
        path_a: &str,
        path_b: &str,
        struct_name: &str,
        fields_a: &BTreeMap<String, Value>,
        fields_b: &BTreeMap<String, Value>,
    ) {
        let reflector = self.reflector;
        let Some(descriptors) = reflector.fields_of(struct_name) else {
            self.log
                .error(format!("No struct definition for {struct_name} at {path_a}"));
            return;
        };
        let descriptors: Vec<FieldDescriptor> = descriptors.into_iter().cloned().collect();

        let struct_path_a = path::append_segment(path_a, struct_name);
        let struct_path_b = path::append_segment(path_b, struct_name);

        for descriptor in &descriptors {
            match (fields_a.get(&descriptor.name), fields_b.get(&descriptor.name)) {
                (Some(value_a), Some(value_b)) => {
                    self.compare_field(&struct_path_a, &struct_path_b, descriptor, value_a, value_b);
                }
                _ => self.log.error(format!(
                    "No value for field {} of {struct_name} at {struct_path_a}",
                    descriptor.name
                )),
            }
        }
    }

    fn compare_array(
        &mut self,
        path_a: &str,
        path_b: &str,
        descriptor: &FieldDescriptor,
        element_kind: &FieldKind,
        items_a: &[Value],
        items_b: &[Value],
    ) {
        if items_a.len() != items_b.len() {
            let display = descriptor.display_name.as_deref();
            let labeled_a = path::append_label(path_a, &descriptor.name, display);
            let labeled_b = path::append_label(path_b, &descriptor.name, display);
            self.log.warning(format!(
                "{labeled_a} has {} elements, {labeled_b} has {}",
                items_a.len(),
                items_b.len()
            ));
        }

        if matches!(element_kind, FieldKind::Array(_)) {
            self.log.error(format!(
                "No comparison done for nested array field {} at {path_a}",
                descriptor.name
            ));
            return;
        }

        let shared = items_a.len().min(items_b.len());
        for index in 0..shared {
            let indexed_a = path::append_index(path_a, &descriptor.name, index);
            let indexed_b = path::append_index(path_b, &descriptor.name, index);
            self.compare_element(
                &indexed_a,
                &indexed_b,
                element_kind,
                &items_a[index],
                &items_b[index],
            );
        }
    }

    /// Stringify both sides of a leaf and record a Difference when the two
    /// strings are unequal. Change detection happens after stringification:
    /// values that render identically never produce a record.
    fn compare_leaf(
        &mut self,
        path_a: &str,
        path_b: &str,
        kind: &FieldKind,
        value_a: &Value,
        value_b: &Value,
    ) {
        let rendered_a = self.render_leaf(kind, value_a);
        let rendered_b = self.render_leaf(kind, value_b);
        match (rendered_a, rendered_b) {
            (Some((label, string_a)), Some((_, string_b))) => {
                if string_a != string_b {
                    self.log
                        .difference(path_a, path_b, label, string_a, string_b);
                }
            }
            _ => self.log.error(format!(
                "No comparison done for {path_a}: declared {kind} but found {} and {}",
                value_a.shape(),
                value_b.shape()
            )),
        }
    }

    /// Render one leaf value as its (kind label, display string) pair, or
    /// `None` when the value's shape does not match the declared kind.
    fn render_leaf(&self, kind: &FieldKind, value: &Value) -> Option<(&'static str, String)> {
        match (kind, value) {
            (FieldKind::Bool, Value::Bool(v)) => {
                Some(("Bool", if *v { "true" } else { "false" }.to_string()))
            }
            (FieldKind::Int, Value::Int(v)) => Some(("Numeric/int", v.to_string())),
            (FieldKind::Float, Value::Float(v)) => Some(("Numeric/float", stringify_float(*v))),
            (FieldKind::Str, Value::Str(v)) => Some(("String", format!("\"{v}\""))),
            (FieldKind::Text, Value::Text(v)) => Some(("Text", format!("\"{v}\""))),
            (FieldKind::Name, Value::Name(v)) => Some(("Name", format!("\"{v}\""))),
            (FieldKind::Enum(enum_name), Value::Enum(v)) => {
                Some(("Enum", self.render_enum(enum_name, *v)))
            }
            // Integer-backed enums may arrive as plain integers.
            (FieldKind::Enum(enum_name), Value::Int(v)) => {
                Some(("Numeric/Enum", self.render_enum(enum_name, *v)))
            }
            (FieldKind::ObjectRef, Value::ObjectRef(referent)) => Some((
                "Object",
                referent.clone().unwrap_or_else(|| "NULL".to_string()),
            )),
            (FieldKind::ClassRef, Value::ClassRef(referent)) => Some((
                "Class",
                referent.clone().unwrap_or_else(|| "NULL".to_string()),
            )),
            (FieldKind::SoftRef, Value::SoftRef(path)) => Some(("SoftObject", path.clone())),
            _ => None,
        }
    }

    /// Render an enum value: the authored name (decimal fallback when the
    /// value is not in the definition), with the display name appended in
    /// parentheses only when it is non-empty and differs from the authored
    /// name.
    fn render_enum(&self, enum_name: &str, value: i64) -> String {
        let authored = self
            .reflector
            .authored_name(enum_name, value)
            .unwrap_or_else(|| value.to_string());
        match self.reflector.display_name(enum_name, value) {
            Some(display) if display != authored => format!("{authored}({display})"),
            _ => authored,
        }
    }
}
