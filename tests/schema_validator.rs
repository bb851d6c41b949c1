use anyhow::Result;
use serde_json::json;

use airline_route_optimizer::infrastructure::schema_validator::validate_routes_file;

#[test]
fn validate_sample_fixture_integration() -> Result<()> {
    let raw = std::fs::read_to_string("tests/resources/sample_routes.json")?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;

    validate_routes_file(&value)?;
    Ok(())
}

#[test]
fn validate_mixed_route_forms_integration() -> Result<()> {
    let routes = json!({
        "routes": [
            ["DSM", "ORD"],
            {"from": "ORD", "to": "BGI", "carrier": "XX"}
        ],
        "name": "mixed"
    });

    validate_routes_file(&routes)?;
    Ok(())
}

#[test]
fn validate_invalid_routes_integration() {
    let not_an_array = json!({"routes": {"DSM": "ORD"}});
    assert!(validate_routes_file(&not_an_array).is_err());

    let numeric = json!({"routes": [{"from": 1, "to": 2}]});
    assert!(validate_routes_file(&numeric).is_err());
}
