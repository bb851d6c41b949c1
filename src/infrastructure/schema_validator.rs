use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static ROUTES_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/routes_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid routes schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile routes schema")
});

/// Validate the shape of a routes file. Airport codes are taken as-is.
pub fn validate_routes_file(routes: &Value) -> Result<()> {
    match ROUTES_SCHEMA.validate(routes) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Routes file validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}
