//! Output formatting for subnet results.
//!
//! - [`terminal`] - human readable report with colours
//! - [`json`] - one JSON object per calculation

mod json;
mod terminal;

pub use json::{format_json, JsonReport};
pub use terminal::{format_error, format_label, format_report};

use crate::models::{Cidr, SubnetResult};
use std::error::Error;

/// How results are rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a calculation in the chosen format.
pub fn render(
    format: OutputFormat,
    cidr: &Cidr,
    result: &SubnetResult,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Text => Ok(format_report(cidr, result)),
        OutputFormat::Json => format_json(cidr, result),
    }
}
