use rulebridge_core::schema::{node_schema, resource_schema, ResourceSchema, FIELDS};
use rulebridge_core::{FieldSpec, Operation, Resource};

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::OutputArgs;

pub fn schema_cmd(resource: Option<&str>, operation: Option<&str>, output: OutputArgs) -> i32 {
    let fail = |message: String| {
        print_error(output.format, output.quiet, &message);
        exit_codes::VALIDATION_FAILED
    };
    let resource = match resource.map(str::parse::<Resource>).transpose() {
        Ok(r) => r,
        Err(e) => return fail(e.to_string()),
    };
    let operation = match operation.map(str::parse::<Operation>).transpose() {
        Ok(o) => o,
        Err(e) => return fail(e.to_string()),
    };

    match (resource, operation) {
        (resource, Some(op)) => {
            let resource = resource.unwrap_or(op.resource());
            if op.resource() != resource {
                return fail(format!("operation {op} does not belong to resource {resource}"));
            }
            let fields: Vec<&FieldSpec> = FIELDS
                .iter()
                .filter(|f| f.show.is_some_and(|s| s.operations.contains(&op)))
                .collect();
            if output.format == OutputFormat::Text && !output.quiet {
                print_fields_text(op, &fields);
            } else {
                print_result(output.format, output.quiet, &fields);
            }
        }
        (Some(resource), None) => {
            let schema = resource_schema(resource);
            if output.format == OutputFormat::Text && !output.quiet {
                print_resource_text(&schema);
            } else {
                print_result(output.format, output.quiet, &schema);
            }
        }
        (None, None) => {
            let schema = node_schema();
            if output.format == OutputFormat::Text && !output.quiet {
                for r in &schema {
                    print_resource_text(r);
                }
            } else {
                print_result(output.format, output.quiet, &schema);
            }
        }
    }
    exit_codes::SUCCESS
}

fn print_resource_text(schema: &ResourceSchema) {
    println!("{} ({})", schema.value, schema.name);
    for op in &schema.operations {
        let marker = if op.value == schema.default_operation { "*" } else { " " };
        println!("  {marker} {:<26} {}", op.value.as_str(), op.description);
    }
}

fn print_fields_text(op: Operation, fields: &[&FieldSpec]) {
    println!("{op}: {} [{} {}]", op.description(), op.method(), op.key_kind());
    for f in fields {
        let required = if f.required { "required" } else { "optional" };
        let when = f
            .show
            .and_then(|s| s.when)
            .map(|(d, v)| format!(" when {d}={v}"))
            .unwrap_or_default();
        println!("  {:<22} {required}{when}", f.name);
    }
}
