//! One full comparison run over two graph identifiers.
//!
//! Resolves both roots, classifies subobjects into the configured buckets,
//! pairs bucket members positionally, compares every editable field of each
//! pair, and finally runs the configured per-graph symbol cross-checks.

use gdiff_graph::{Graph, GraphLoader, Subobject, Value};
use gdiff_schema::TypeReflector;
use gdiff_types::{path, DifferenceLog};
use tracing::debug;

use crate::comparator::Comparator;
use crate::options::{CompareOptions, CrossCheck};

/// Compare the graphs behind two identifiers and return the run's log.
///
/// Only root resolution is fatal: an identifier that fails to resolve
/// yields a log holding exactly one Error record. Every other failure mode
/// (unknown type definitions, shape mismatches, missing resources) is
/// recorded and the run continues.
///
/// Bucket members are paired by position, not by name: reordering
/// subobjects between the two graphs shows up as value differences.
pub fn compare_graphs(
    loader: &dyn GraphLoader,
    reflector: &dyn TypeReflector,
    options: &CompareOptions,
    identifier_a: &str,
    identifier_b: &str,
) -> DifferenceLog {
    let mut comparator = Comparator::new(reflector);

    let mut graphs: Vec<Graph> = Vec::with_capacity(2);
    for identifier in [identifier_a, identifier_b] {
        match loader.load(identifier) {
            Ok(Some(graph)) => graphs.push(graph),
            Ok(None) => {
                comparator
                    .log_mut()
                    .error(format!("Cannot load graph \"{identifier}\""));
                return comparator.into_log();
            }
            Err(err) => {
                comparator
                    .log_mut()
                    .error(format!("Cannot load graph \"{identifier}\": {err}"));
                return comparator.into_log();
            }
        }
    }

    comparator
        .log_mut()
        .info(format!("Comparing {identifier_a} with {identifier_b}"));
    debug!(identifier_a, identifier_b, "comparison run started");

    // Classify subobjects into buckets, preserving enumeration order.
    let buckets: Vec<[Vec<&Subobject>; 2]> = options
        .buckets
        .iter()
        .map(|spec| {
            [
                graphs[0].subobjects_of_type(&spec.type_name).collect(),
                graphs[1].subobjects_of_type(&spec.type_name).collect(),
            ]
        })
        .collect();

    let mut listing_needed = false;
    if graphs[0].subobjects.len() != graphs[1].subobjects.len() {
        comparator
            .log_mut()
            .warning("Graph subobject (component) count is different");
        listing_needed = true;
    }
    for (spec, members) in options.buckets.iter().zip(&buckets) {
        if members[0].len() != members[1].len() {
            comparator
                .log_mut()
                .warning(format!("{} count is different", spec.label));
            listing_needed = true;
        }
    }
    if listing_needed {
        for graph in &graphs {
            comparator
                .log_mut()
                .warning(format!("Graph subobjects for {}", graph.name));
            for subobject in &graph.subobjects {
                comparator
                    .log_mut()
                    .warning(format!("   subobject {}", subobject.name));
            }
        }
    }

    let root_a = path::root_label(identifier_a);
    let root_b = path::root_label(identifier_b);

    for (spec, members) in options.buckets.iter().zip(&buckets) {
        let shared = members[0].len().min(members[1].len());
        for index in 0..shared {
            let sub_a = members[0][index];
            let sub_b = members[1][index];
            let pair_path_a = path::append_segment(root_a, &sub_a.name);
            let pair_path_b = path::append_segment(root_b, &sub_b.name);
            comparator.log_mut().info(format!(
                "Comparing {} {pair_path_a} with {pair_path_b}",
                spec.label
            ));
            compare_subobject(&mut comparator, reflector, &pair_path_a, &pair_path_b, sub_a, sub_b);
        }
    }

    // Cross-checks run per graph independently, not across the pair.
    for check in &options.cross_checks {
        for (graph, identifier) in graphs.iter().zip([identifier_a, identifier_b]) {
            run_cross_check(&mut comparator, options, check, graph, identifier);
        }
    }

    comparator.into_log()
}

/// Compare every editable field of two positionally-paired subobjects.
fn compare_subobject(
    comparator: &mut Comparator<'_>,
    reflector: &dyn TypeReflector,
    path_a: &str,
    path_b: &str,
    sub_a: &Subobject,
    sub_b: &Subobject,
) {
    let Some(descriptors) = reflector.fields_of(&sub_a.type_name) else {
        comparator.log_mut().error(format!(
            "No struct definition for {} at {path_a}",
            sub_a.type_name
        ));
        return;
    };
    let descriptors: Vec<_> = descriptors.into_iter().cloned().collect();

    for descriptor in &descriptors {
        match (sub_a.field(&descriptor.name), sub_b.field(&descriptor.name)) {
            (Some(value_a), Some(value_b)) => {
                comparator.compare_field(path_a, path_b, descriptor, value_a, value_b);
            }
            _ => comparator.log_mut().error(format!(
                "No value for field {} of {} at {path_a}",
                descriptor.name, sub_a.type_name
            )),
        }
    }
}

/// Verify that the symbolic references of one graph's source bucket resolve
/// in the namespace exposed by its target bucket's resource chain.
fn run_cross_check(
    comparator: &mut Comparator<'_>,
    options: &CompareOptions,
    check: &CrossCheck,
    graph: &Graph,
    identifier: &str,
) {
    let Some(source_spec) = options.bucket(&check.source_bucket) else {
        comparator.log_mut().error(format!(
            "Unknown bucket \"{}\" in cross-check",
            check.source_bucket
        ));
        return;
    };
    let Some(target_spec) = options.bucket(&check.target_bucket) else {
        comparator.log_mut().error(format!(
            "Unknown bucket \"{}\" in cross-check",
            check.target_bucket
        ));
        return;
    };

    let sources: Vec<&Subobject> = graph.subobjects_of_type(&source_spec.type_name).collect();
    let targets: Vec<&Subobject> = graph.subobjects_of_type(&target_spec.type_name).collect();

    let shared = sources.len().min(targets.len());
    for index in 0..shared {
        check_symbols(comparator, check, identifier, sources[index], targets[index]);
    }
}

fn check_symbols(
    comparator: &mut Comparator<'_>,
    check: &CrossCheck,
    identifier: &str,
    source: &Subobject,
    target: &Subobject,
) {
    for role in &check.required {
        if !target.resources.contains_key(role) {
            comparator.log_mut().error(format!(
                "No {role} for {} {identifier}/{}",
                target.type_name, target.name
            ));
            return;
        }
    }

    let mut chain = check.resource_chain.iter();
    let Some(first_role) = chain.next() else {
        comparator.log_mut().error(format!(
            "Empty resource chain in cross-check for {}",
            check.entries_field
        ));
        return;
    };
    let Some(mut namespace) = target.resources.get(first_role) else {
        comparator.log_mut().error(format!(
            "No {first_role} for {} {identifier}/{}",
            target.type_name, target.name
        ));
        return;
    };
    for role in chain {
        match namespace.resources.get(role) {
            Some(next) => namespace = next,
            None => {
                comparator.log_mut().error(format!(
                    "No {role} for {} {identifier}/{}",
                    target.type_name, target.name
                ));
                return;
            }
        }
    }

    let Some(entries_value) = source.field(&check.entries_field) else {
        comparator.log_mut().error(format!(
            "No value for field {} of {} at {identifier}/{}",
            check.entries_field, source.type_name, source.name
        ));
        return;
    };
    let Value::Array(entries) = entries_value else {
        comparator.log_mut().error(format!(
            "No comparison done for {}: expected an array, found {}",
            check.entries_field,
            entries_value.shape()
        ));
        return;
    };

    for (index, entry) in entries.iter().enumerate() {
        let Value::Struct(fields) = entry else {
            comparator.log_mut().error(format!(
                "No comparison done for {}[{index}]: expected a struct, found {}",
                check.entries_field,
                entry.shape()
            ));
            continue;
        };
        match fields.get(&check.symbol_field) {
            Some(Value::Name(symbol)) if symbol == "None" => {
                comparator.log_mut().warning(format!(
                    "{}[{index}] has None for {}",
                    check.entries_field, check.symbol_field
                ));
            }
            Some(Value::Name(symbol)) if symbol.is_empty() => {
                comparator.log_mut().warning(format!(
                    "{}[{index}] has empty {}",
                    check.entries_field, check.symbol_field
                ));
            }
            Some(Value::Name(symbol)) => {
                if !namespace.has_symbol(symbol) {
                    comparator.log_mut().warning(format!(
                        "{identifier} {}[{index}] has {} \"{symbol}\", this symbol does not exist in {}",
                        check.entries_field, check.symbol_field, namespace.name
                    ));
                }
            }
            _ => comparator.log_mut().error(format!(
                "No value for field {} of {}[{index}]",
                check.symbol_field, check.entries_field
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BucketSpec;
    use gdiff_graph::{InMemoryGraphLoader, Resource};
    use gdiff_schema::{FieldDescriptor, FieldKind, SchemaRegistry, StructDef};
    use gdiff_types::Record;

    fn registry() -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        registry
            .register_struct(StructDef::new(
                "FVector",
                vec![
                    FieldDescriptor::new("X", FieldKind::Float),
                    FieldDescriptor::new("Y", FieldKind::Float),
                    FieldDescriptor::new("Z", FieldKind::Float),
                ],
            ))
            .unwrap();
        registry
            .register_struct(StructDef::new(
                "FWheelSetup",
                vec![
                    FieldDescriptor::new("BoneName", FieldKind::Name),
                    FieldDescriptor::new("Offset", FieldKind::Struct("FVector".into())),
                ],
            ))
            .unwrap();
        registry
            .register_struct(StructDef::new(
                "WheeledVehicleMovementComponent",
                vec![
                    FieldDescriptor::new("Mass", FieldKind::Float),
                    FieldDescriptor::new("bTractionControl", FieldKind::Bool),
                    FieldDescriptor::new(
                        "WheelSetups",
                        FieldKind::Array(Box::new(FieldKind::Struct("FWheelSetup".into()))),
                    ),
                ],
            ))
            .unwrap();
        registry
            .register_struct(StructDef::new(
                "SkeletalMeshComponent",
                vec![FieldDescriptor::new("MeshPath", FieldKind::SoftRef)],
            ))
            .unwrap();
        registry
    }

    fn options() -> CompareOptions {
        CompareOptions {
            buckets: vec![
                BucketSpec {
                    label: "vehicle movement components".into(),
                    type_name: "WheeledVehicleMovementComponent".into(),
                },
                BucketSpec {
                    label: "skeletal mesh components".into(),
                    type_name: "SkeletalMeshComponent".into(),
                },
            ],
            cross_checks: vec![CrossCheck {
                source_bucket: "vehicle movement components".into(),
                entries_field: "WheelSetups".into(),
                symbol_field: "BoneName".into(),
                target_bucket: "skeletal mesh components".into(),
                required: vec!["physics".into()],
                resource_chain: vec!["mesh".into(), "skeleton".into()],
            }],
        }
    }

    fn wheel(bone: &str) -> Value {
        Value::struct_of([
            ("BoneName", Value::Name(bone.into())),
            (
                "Offset",
                Value::struct_of([
                    ("X", Value::Float(0.0)),
                    ("Y", Value::Float(0.0)),
                    ("Z", Value::Float(0.0)),
                ]),
            ),
        ])
    }

    fn mesh_component(bones: &[&str]) -> Subobject {
        Subobject::new("Mesh0", "SkeletalMeshComponent")
            .with_field("MeshPath", Value::SoftRef("/Game/Meshes/SK_Car".into()))
            .with_resource("physics", Resource::new("/Game/Physics/PA_Car"))
            .with_resource(
                "mesh",
                Resource::new("/Game/Meshes/SK_Car").with_resource(
                    "skeleton",
                    Resource::new("/Game/Meshes/SK_Car_Skeleton")
                        .with_symbols(bones.iter().copied()),
                ),
            )
    }

    fn vehicle_graph(name: &str, mass: f64, bones: &[&str], wheels: &[&str]) -> Graph {
        Graph::new(name)
            .with_subobject(mesh_component(bones))
            .with_subobject(
                Subobject::new("Movement0", "WheeledVehicleMovementComponent")
                    .with_field("Mass", Value::Float(mass))
                    .with_field("bTractionControl", Value::Bool(true))
                    .with_field(
                        "WheelSetups",
                        Value::Array(wheels.iter().map(|b| wheel(b)).collect()),
                    ),
            )
    }

    fn loader_with(graphs: &[(&str, Graph)]) -> InMemoryGraphLoader {
        let loader = InMemoryGraphLoader::new();
        for (identifier, graph) in graphs {
            loader.insert(*identifier, graph.clone());
        }
        loader
    }

    const BONES: &[&str] = &["root", "wheel_fl", "wheel_fr"];

    #[test]
    fn self_comparison_produces_no_differences() {
        let graph = vehicle_graph("BP_Car", 1500.0, BONES, &["wheel_fl", "wheel_fr"]);
        let loader = loader_with(&[
            ("/Game/Vehicles/BP_Car", graph.clone()),
            ("/Game/Vehicles/BP_CarCopy", graph),
        ]);
        let registry = registry();

        let log = compare_graphs(
            &loader,
            &registry,
            &options(),
            "/Game/Vehicles/BP_Car",
            "/Game/Vehicles/BP_CarCopy",
        );
        assert_eq!(log.differences(), 0);
        assert_eq!(log.errors(), 0);
        assert_eq!(log.warnings(), 0);
    }

    #[test]
    fn run_is_deterministic() {
        let car = vehicle_graph("BP_Car", 1500.0, BONES, &["wheel_fl", "wheel_fr"]);
        let truck = vehicle_graph("BP_Truck", 4200.0, BONES, &["wheel_fl", "wheel_rl"]);
        let loader = loader_with(&[("A", car), ("B", truck)]);
        let registry = registry();
        let options = options();

        let first = compare_graphs(&loader, &registry, &options, "A", "B");
        let second = compare_graphs(&loader, &registry, &options, "A", "B");
        assert_eq!(first, second);
    }

    #[test]
    fn unresolvable_root_is_exactly_one_error() {
        let graph = vehicle_graph("BP_Car", 1500.0, BONES, &[]);
        let loader = loader_with(&[("/Game/Vehicles/BP_Car", graph)]);
        let registry = registry();

        let log = compare_graphs(
            &loader,
            &registry,
            &options(),
            "/Game/Vehicles/BP_Car",
            "/Game/Vehicles/BP_Missing",
        );
        assert_eq!(log.len(), 1);
        match &log.records()[0] {
            Record::Error { message } => {
                assert_eq!(message, "Cannot load graph \"/Game/Vehicles/BP_Missing\"");
            }
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn value_mismatch_reports_both_rooted_paths() {
        let car = vehicle_graph("BP_Car", 1500.0, BONES, &[]);
        let truck = vehicle_graph("BP_Truck", 4200.0, BONES, &[]);
        let loader = loader_with(&[
            ("/Game/Vehicles/BP_Car", car),
            ("/Game/Vehicles/BP_Truck", truck),
        ]);
        let registry = registry();

        let log = compare_graphs(
            &loader,
            &registry,
            &options(),
            "/Game/Vehicles/BP_Car",
            "/Game/Vehicles/BP_Truck",
        );
        assert_eq!(log.differences(), 1);
        let diff = log.iter().find(|r| r.is_difference()).unwrap();
        match diff {
            Record::Difference { path_a, path_b, value_a, value_b, .. } => {
                assert_eq!(path_a, "BP_Car/Movement0/Mass");
                assert_eq!(path_b, "BP_Truck/Movement0/Mass");
                assert_eq!(value_a, "1500.0");
                assert_eq!(value_b, "4200.0");
            }
            other => panic!("expected Difference, got {:?}", other),
        }
    }

    #[test]
    fn bucket_count_mismatch_warns_and_lists_subobjects() {
        let car = vehicle_graph("BP_Car", 1500.0, BONES, &[]);
        let mut two_movements = vehicle_graph("BP_Kart", 300.0, BONES, &[]);
        two_movements = two_movements.with_subobject(
            Subobject::new("Movement1", "WheeledVehicleMovementComponent")
                .with_field("Mass", Value::Float(300.0))
                .with_field("bTractionControl", Value::Bool(true))
                .with_field("WheelSetups", Value::Array(vec![])),
        );
        let loader = loader_with(&[("A", car), ("B", two_movements)]);
        let registry = registry();

        let log = compare_graphs(&loader, &registry, &options(), "A", "B");
        let messages: Vec<&str> = log
            .iter()
            .filter(|r| r.is_warning())
            .filter_map(|r| r.message())
            .collect();
        assert!(messages.contains(&"Graph subobject (component) count is different"));
        assert!(messages.contains(&"vehicle movement components count is different"));
        assert!(messages.contains(&"Graph subobjects for BP_Kart"));
        assert!(messages.contains(&"   subobject Movement1"));
    }

    #[test]
    fn pairing_is_positional_not_by_name() {
        // Same two movement components, opposite order: paired positionally,
        // so the mass difference is reported twice (once per position).
        let movement = |name: &str, mass: f64| {
            Subobject::new(name, "WheeledVehicleMovementComponent")
                .with_field("Mass", Value::Float(mass))
                .with_field("bTractionControl", Value::Bool(true))
                .with_field("WheelSetups", Value::Array(vec![]))
        };
        let first = Graph::new("G1")
            .with_subobject(movement("Front", 100.0))
            .with_subobject(movement("Rear", 200.0));
        let second = Graph::new("G2")
            .with_subobject(movement("Rear", 200.0))
            .with_subobject(movement("Front", 100.0));
        let loader = loader_with(&[("G1", first), ("G2", second)]);
        let registry = registry();
        let options = CompareOptions {
            buckets: vec![BucketSpec {
                label: "vehicle movement components".into(),
                type_name: "WheeledVehicleMovementComponent".into(),
            }],
            cross_checks: vec![],
        };

        let log = compare_graphs(&loader, &registry, &options, "G1", "G2");
        assert_eq!(log.differences(), 2);
    }

    #[test]
    fn unknown_type_definition_is_nonfatal_error() {
        let graph = Graph::new("G")
            .with_subobject(Subobject::new("Widget0", "UnreflectableComponent"));
        let loader = loader_with(&[("A", graph.clone()), ("B", graph)]);
        let registry = registry();
        let options = CompareOptions {
            buckets: vec![BucketSpec {
                label: "widgets".into(),
                type_name: "UnreflectableComponent".into(),
            }],
            cross_checks: vec![],
        };

        let log = compare_graphs(&loader, &registry, &options, "A", "B");
        assert_eq!(log.errors(), 1);
        assert_eq!(log.differences(), 0);
    }

    #[test]
    fn cross_check_missing_required_resource_is_error() {
        let mut graph = vehicle_graph("BP_Car", 1500.0, BONES, &["wheel_fl"]);
        graph.subobjects[0].resources.remove("physics");
        let loader = loader_with(&[("A", graph.clone()), ("B", graph)]);
        let registry = registry();

        let log = compare_graphs(&loader, &registry, &options(), "A", "B");
        // Both graphs fail the same check independently.
        assert_eq!(log.errors(), 2);
        let message = log
            .iter()
            .find(|r| r.is_error())
            .and_then(|r| r.message())
            .unwrap();
        assert_eq!(message, "No physics for SkeletalMeshComponent A/Mesh0");
    }

    #[test]
    fn cross_check_missing_chain_link_is_error() {
        let mut graph = vehicle_graph("BP_Car", 1500.0, BONES, &["wheel_fl"]);
        let mesh = graph.subobjects[0].resources.get_mut("mesh").unwrap();
        mesh.resources.remove("skeleton");
        let loader = loader_with(&[("A", graph.clone()), ("B", graph)]);
        let registry = registry();

        let log = compare_graphs(&loader, &registry, &options(), "A", "B");
        assert_eq!(log.errors(), 2);
        let message = log
            .iter()
            .find(|r| r.is_error())
            .and_then(|r| r.message())
            .unwrap();
        assert_eq!(message, "No skeleton for SkeletalMeshComponent A/Mesh0");
    }

    #[test]
    fn cross_check_flags_none_empty_and_unresolved_symbols() {
        let graph = vehicle_graph(
            "BP_Car",
            1500.0,
            BONES,
            &["None", "", "wheel_fl", "wheel_rl"],
        );
        let loader = loader_with(&[("A", graph.clone()), ("B", graph)]);
        let registry = registry();

        let log = compare_graphs(&loader, &registry, &options(), "A", "B");
        let warnings: Vec<&str> = log
            .iter()
            .filter(|r| r.is_warning())
            .filter_map(|r| r.message())
            .collect();
        // Three findings per graph: None, empty, unresolved. wheel_fl resolves.
        assert_eq!(warnings.len(), 6);
        assert!(warnings.contains(&"WheelSetups[0] has None for BoneName"));
        assert!(warnings.contains(&"WheelSetups[1] has empty BoneName"));
        assert!(warnings.contains(
            &"A WheelSetups[3] has BoneName \"wheel_rl\", this symbol does not exist in /Game/Meshes/SK_Car_Skeleton"
        ));
    }

    #[test]
    fn cross_check_warnings_fire_even_on_self_comparison() {
        // A graph with an unresolvable bone warns per graph, not per pair.
        let graph = vehicle_graph("BP_Car", 1500.0, BONES, &["wheel_rl"]);
        let loader = loader_with(&[("A", graph.clone()), ("B", graph)]);
        let registry = registry();

        let log = compare_graphs(&loader, &registry, &options(), "A", "B");
        assert_eq!(log.differences(), 0);
        assert_eq!(log.warnings(), 2);
    }
}

#[cfg(test)]
mod determinism {
    use super::*;
    use crate::options::BucketSpec;
    use gdiff_graph::InMemoryGraphLoader;
    use gdiff_schema::{FieldDescriptor, FieldKind, SchemaRegistry, StructDef};
    use proptest::prelude::*;

    fn registry() -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        registry
            .register_struct(StructDef::new(
                "Probe",
                vec![
                    FieldDescriptor::new("Mass", FieldKind::Float),
                    FieldDescriptor::new("Gears", FieldKind::Array(Box::new(FieldKind::Int))),
                    FieldDescriptor::new("bFlag", FieldKind::Bool),
                ],
            ))
            .unwrap();
        registry
    }

    fn probe_graph(mass: f64, gears: &[i64], flag: bool) -> Graph {
        Graph::new("Probe").with_subobject(
            Subobject::new("Probe0", "Probe")
                .with_field("Mass", Value::Float(mass))
                .with_field(
                    "Gears",
                    Value::Array(gears.iter().map(|g| Value::Int(*g)).collect()),
                )
                .with_field("bFlag", Value::Bool(flag)),
        )
    }

    proptest! {
        #[test]
        fn identical_logs_across_repeated_runs(
            mass_a in -1.0e6f64..1.0e6,
            mass_b in -1.0e6f64..1.0e6,
            gears_a in prop::collection::vec(-100i64..100, 0..6),
            gears_b in prop::collection::vec(-100i64..100, 0..6),
            flag_a: bool,
            flag_b: bool,
        ) {
            let loader = InMemoryGraphLoader::new();
            loader.insert("A", probe_graph(mass_a, &gears_a, flag_a));
            loader.insert("B", probe_graph(mass_b, &gears_b, flag_b));
            let registry = registry();
            let options = CompareOptions {
                buckets: vec![BucketSpec { label: "probes".into(), type_name: "Probe".into() }],
                cross_checks: vec![],
            };

            let first = compare_graphs(&loader, &registry, &options, "A", "B");
            let second = compare_graphs(&loader, &registry, &options, "A", "B");
            prop_assert_eq!(first, second);
        }

        #[test]
        fn self_comparison_never_differs(
            mass in -1.0e6f64..1.0e6,
            gears in prop::collection::vec(-100i64..100, 0..6),
            flag: bool,
        ) {
            let loader = InMemoryGraphLoader::new();
            let graph = probe_graph(mass, &gears, flag);
            loader.insert("A", graph.clone());
            loader.insert("B", graph);
            let registry = registry();
            let options = CompareOptions {
                buckets: vec![BucketSpec { label: "probes".into(), type_name: "Probe".into() }],
                cross_checks: vec![],
            };

            let log = compare_graphs(&loader, &registry, &options, "A", "B");
            prop_assert_eq!(log.differences(), 0);
        }
    }
}
