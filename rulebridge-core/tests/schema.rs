use std::collections::BTreeSet;

use rulebridge_core::params::OperationParams;
use rulebridge_core::schema::{node_schema, visible_fields, FIELDS};
use rulebridge_core::{FieldValues, Operation, Resource};

fn names(resource: Resource, op: Operation, values: &FieldValues) -> Vec<&'static str> {
    visible_fields(resource, op, values)
        .into_iter()
        .map(|f| f.name)
        .collect()
}

#[test]
fn every_operation_belongs_to_exactly_one_resource() {
    for op in Operation::ALL {
        let owners = Resource::ALL
            .iter()
            .filter(|r| r.operations().contains(&op))
            .count();
        assert_eq!(owners, 1, "{op} listed under {owners} resources");
    }
}

#[test]
fn default_operation_belongs_to_its_resource() {
    for r in Resource::ALL {
        assert_eq!(r.default_operation().resource(), r);
    }
}

#[test]
fn fields_of_foreign_operation_are_never_shown() {
    let values = FieldValues::new();
    assert!(visible_fields(Resource::Solve, Operation::GetRule, &values).is_empty());
    assert!(visible_fields(Resource::Job, Operation::Solve, &values).is_empty());
}

#[test]
fn solve_shows_options_rule_id_and_version() {
    let v = names(Resource::Solve, Operation::Solve, &FieldValues::new());
    assert_eq!(v, vec!["solveOptions", "ruleId", "ruleVersion"]);
}

#[test]
fn identifier_discriminator_switches_rule_fields() {
    let by_id = names(Resource::ManagementRule, Operation::GetRule, &FieldValues::new());
    assert_eq!(by_id, vec!["identifierType", "ruleId", "ruleVersion"]);

    let by_path = names(
        Resource::ManagementRule,
        Operation::GetRule,
        &FieldValues::new().with("identifierType", "path"),
    );
    assert_eq!(by_path, vec!["identifierType", "path", "ruleVersion"]);
}

#[test]
fn folder_discriminator_switches_node_and_path() {
    let values = FieldValues::new().with("identifierTypeFolder", "path");
    let v = names(Resource::ManagementFolder, Operation::DeleteFolder, &values);
    assert_eq!(v, vec!["identifierTypeFolder", "pathFolder", "deleteAll"]);

    let v = names(Resource::ManagementFolder, Operation::RenameFolder, &FieldValues::new());
    assert_eq!(v, vec!["identifierTypeFolder", "nodeId", "newName"]);
}

#[test]
fn same_named_fields_never_overlap() {
    for op in Operation::ALL {
        for disc in ["id", "path"] {
            let values = FieldValues::new()
                .with("identifierType", disc)
                .with("identifierTypeFolder", disc);
            let shown = names(op.resource(), op, &values);
            let unique: BTreeSet<_> = shown.iter().collect();
            assert_eq!(unique.len(), shown.len(), "{op}: duplicate field in {shown:?}");
        }
    }
}

#[test]
fn schema_fields_match_the_fields_each_operation_reads() {
    for op in Operation::ALL {
        let mut shown = BTreeSet::new();
        for disc in ["id", "path"] {
            let values = FieldValues::new()
                .with("identifierType", disc)
                .with("identifierTypeFolder", disc);
            shown.extend(names(op.resource(), op, &values));
        }
        let read: BTreeSet<_> = OperationParams::field_names(op).iter().copied().collect();
        assert_eq!(shown, read, "{op}");
    }
}

#[test]
fn rule_version_is_optional_everywhere() {
    for f in FIELDS.iter().filter(|f| f.name == "ruleVersion") {
        assert!(!f.required);
    }
}

#[test]
fn node_schema_serializes() {
    let schema = node_schema();
    assert_eq!(schema.len(), 6);
    let json = serde_json::to_value(&schema).unwrap();
    assert_eq!(json[0]["value"], "solve");
    assert_eq!(json[0]["operations"][0]["value"], "solve");

    let fields = serde_json::to_value(FIELDS).unwrap();
    let solve_options = &fields[0];
    assert_eq!(solve_options["name"], "solveOptions");
    assert_eq!(solve_options["type"], "collection");
    assert_eq!(solve_options["default"], serde_json::json!({}));
}

#[test]
fn resource_names_accept_host_spelling() {
    assert_eq!("solveRes".parse::<Resource>().unwrap(), Resource::Solve);
    assert_eq!("managementFolder".parse::<Resource>().unwrap(), Resource::ManagementFolder);
    assert!("nope".parse::<Resource>().is_err());
    let r: Resource = serde_json::from_str("\"managementTagRes\"").unwrap();
    assert_eq!(r, Resource::ManagementTag);
}
