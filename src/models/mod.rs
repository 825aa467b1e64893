//! Domain models for the subnet calculator.
//!
//! - [`Cidr`] - validated address with prefix length
//! - [`SubnetResult`] and [`HostRange`] - calculated subnet properties
//! - bit conversion helpers between octets and `u32` addresses

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    address_to_string, format_octets, from_address32, serialize_address, to_address32, Cidr,
    CidrBounds, Octets, MAX_LENGTH,
};
pub use subnet::{HostRange, SubnetResult};
