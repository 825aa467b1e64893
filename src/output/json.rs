//! JSON output of subnet results.

use crate::models::{Cidr, SubnetResult};
use serde::Serialize;
use std::error::Error;

/// One calculation as printed with `--json`.
#[derive(Serialize, Debug)]
pub struct JsonReport<'a> {
    pub input: &'a Cidr,
    #[serde(flatten)]
    pub result: &'a SubnetResult,
}

/// Render one calculation as a single JSON line.
pub fn format_json(cidr: &Cidr, result: &SubnetResult) -> Result<String, Box<dyn Error>> {
    let report = JsonReport {
        input: cidr,
        result,
    };
    serde_json::to_string(&report).map_err(|e| format!("Error serializing JSON: {e}").into())
}
