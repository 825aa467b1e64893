//! IPv4 subnet calculator.
//!
//! Parses `w.x.y.z/n`, validates it and derives network, broadcast, masks,
//! usable host range and host count.
//!
//! # Module Structure
//! - [`models`] - address, CIDR and result types, bit conversion
//! - [`processing`] - validation and subnet calculation
//! - [`output`] - terminal and JSON rendering
//! - [`config`] - environment configuration
//! - [`shell`] - interactive and one-shot front ends
//! - [`cli`] - command line arguments

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod shell;

use models::{CidrBounds, Octets};

pub use error::CidrError;
pub use models::{Cidr, HostRange, SubnetResult};
pub use processing::{calculate, calculate_octets};

/// Validate `input` and return its octets and prefix length.
///
/// This is the entry point a front end calls before [`calculate_octets`].
pub fn validate_and_parse(input: &str, bounds: &CidrBounds) -> Result<(Octets, u8), CidrError> {
    processing::validate(input, bounds)
}
