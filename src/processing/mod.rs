//! Subnet calculation logic.
//!
//! - [`validate`] - checking and parsing of `w.x.y.z/n` input
//! - [`calculate`] - deriving masks, addresses and host counts

mod calculate;
mod validate;

// Re-export public functions
pub use calculate::{calculate, calculate_octets, host_count, subnet_mask, wildcard_mask};
pub use validate::{parse, validate};
