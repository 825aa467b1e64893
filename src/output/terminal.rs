//! Terminal output of subnet results.

use crate::models::{address_to_string, Cidr, SubnetResult};
use colored::Colorize;

const RULE: &str =
    "================================================================================";

/// Label column width of the report.
const LABEL_WIDTH: usize = 19;

/// Format a label left aligned to the report column.
///
/// # Arguments
/// * `label` - The label text, a `:` is appended
/// * `width` - The minimum width including the colon
pub fn format_label(label: &str, width: usize) -> String {
    let with_colon = format!("{label}:");
    format!("{with_colon:<width$}")
}

/// Render the multi line report for one calculation.
pub fn format_report(cidr: &Cidr, result: &SubnetResult) -> String {
    let mut lines = vec![
        format!("{} {}", "Input:".bold(), cidr),
        RULE.to_string(),
    ];
    let mut row = |label: &str, value: String| {
        lines.push(format!("{}{}", format_label(label, LABEL_WIDTH).cyan(), value));
    };
    row("Network address", address_to_string(result.network));
    row("Broadcast address", address_to_string(result.broadcast));
    row("Subnet mask", address_to_string(result.subnet_mask));
    row("Wildcard mask", address_to_string(result.wildcard_mask));
    row("Usable hosts", result.host_count.to_string());
    if let Some(range) = result.range {
        row(
            "Host range",
            format!(
                "{} - {}",
                address_to_string(range.start),
                address_to_string(range.end)
            ),
        );
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

/// Render an input error line.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    format!("{}: {err}", "Invalid IP address".red())
}
