use crate::infrastructure::schema_validator::validate_routes_file;
use crate::usecase::report::RouteReport;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoutesFileDto {
    pub routes: Vec<RouteDto>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A route is either `["DSM", "ORD"]` or `{"from": "DSM", "to": "ORD"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteDto {
    Pair(String, String),
    Named { from: String, to: String },
}

impl RouteDto {
    pub fn into_pair(self) -> (String, String) {
        match self {
            RouteDto::Pair(from, to) | RouteDto::Named { from, to } => (from, to),
        }
    }
}

impl RoutesFileDto {
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.routes.into_iter().map(RouteDto::into_pair).collect()
    }
}

pub async fn read_routes_value(path: &str) -> Result<Value> {
    let raw = fs::read_to_string(path).await?;
    let value: Value = serde_json::from_str(&raw)?;
    Ok(value)
}

/// Reads, shape-checks and decodes a routes file.
pub async fn read_routes_file(path: &str) -> Result<RoutesFileDto> {
    let value = read_routes_value(path).await?;
    validate_routes_file(&value)?;
    let dto: RoutesFileDto = serde_json::from_value(value)?;
    Ok(dto)
}

pub async fn write_report_file(path: &str, report: &RouteReport) -> Result<()> {
    let pretty = serde_json::to_string_pretty(report)?;
    fs::write(path, pretty)
        .await
        .with_context(|| format!("writing {path}"))?;
    Ok(())
}
