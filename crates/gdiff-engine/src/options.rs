use serde::{Deserialize, Serialize};

/// Configuration of one comparison run.
///
/// Buckets name the runtime types worth comparing; cross-checks verify
/// symbolic references between buckets within each graph. The default is
/// empty: nothing is compared until the caller registers buckets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareOptions {
    #[serde(default)]
    pub buckets: Vec<BucketSpec>,
    #[serde(default)]
    pub cross_checks: Vec<CrossCheck>,
}

impl CompareOptions {
    /// Parse options from a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The bucket spec with the given label, if any.
    pub fn bucket(&self, label: &str) -> Option<&BucketSpec> {
        self.buckets.iter().find(|b| b.label == label)
    }
}

/// One comparable runtime type: subobjects of `type_name` are collected
/// into this bucket and paired positionally across the two graphs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSpec {
    /// Human label used in records ("vehicle movement components").
    pub label: String,
    /// Runtime type name subobjects are classified by.
    pub type_name: String,
}

/// A per-graph consistency check: ordered entries of one bucket carry a
/// symbolic reference into a namespace exposed by another bucket's
/// resource chain.
///
/// In the vehicle domain: each wheel setup of the movement component names
/// a bone that must exist in the mesh component's skeleton.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCheck {
    /// Label of the bucket holding the referencing entries.
    pub source_bucket: String,
    /// Array-of-struct field on the source subobject.
    pub entries_field: String,
    /// Name field within each entry carrying the symbol.
    pub symbol_field: String,
    /// Label of the bucket exposing the namespace.
    pub target_bucket: String,
    /// Resource roles that must merely exist on the target subobject
    /// (presence check only, e.g. a physics asset).
    #[serde(default)]
    pub required: Vec<String>,
    /// Resource roles walked from the target subobject down to the
    /// namespace resource (e.g. `["mesh", "skeleton"]`).
    pub resource_chain: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let options = CompareOptions::default();
        assert!(options.buckets.is_empty());
        assert!(options.cross_checks.is_empty());
    }

    #[test]
    fn parse_from_toml() {
        let text = r#"
            [[buckets]]
            label = "vehicle movement components"
            type_name = "WheeledVehicleMovementComponent"

            [[buckets]]
            label = "skeletal mesh components"
            type_name = "SkeletalMeshComponent"

            [[cross_checks]]
            source_bucket = "vehicle movement components"
            entries_field = "WheelSetups"
            symbol_field = "BoneName"
            target_bucket = "skeletal mesh components"
            required = ["physics"]
            resource_chain = ["mesh", "skeleton"]
        "#;

        let options = CompareOptions::from_toml(text).unwrap();
        assert_eq!(options.buckets.len(), 2);
        assert_eq!(options.cross_checks.len(), 1);
        assert_eq!(
            options.bucket("skeletal mesh components").unwrap().type_name,
            "SkeletalMeshComponent"
        );
        assert_eq!(options.cross_checks[0].resource_chain, ["mesh", "skeleton"]);
    }

    #[test]
    fn required_defaults_to_empty() {
        let text = r#"
            [[cross_checks]]
            source_bucket = "a"
            entries_field = "Entries"
            symbol_field = "Symbol"
            target_bucket = "b"
            resource_chain = ["mesh"]
        "#;
        let options = CompareOptions::from_toml(text).unwrap();
        assert!(options.cross_checks[0].required.is_empty());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(CompareOptions::from_toml("buckets = 3").is_err());
    }
}
