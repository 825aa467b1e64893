//! Subnet calculation result.

use super::ipv4::serialize_address;
use serde::Serialize;

/// First and last usable host address of a subnet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct HostRange {
    #[serde(serialize_with = "serialize_address")]
    pub start: u32,
    #[serde(serialize_with = "serialize_address")]
    pub end: u32,
}

/// Properties derived from an address and prefix length.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// Address with all host bits cleared.
    #[serde(serialize_with = "serialize_address")]
    pub network: u32,
    /// Address with all host bits set.
    #[serde(serialize_with = "serialize_address")]
    pub broadcast: u32,
    #[serde(serialize_with = "serialize_address")]
    pub subnet_mask: u32,
    #[serde(serialize_with = "serialize_address")]
    pub wildcard_mask: u32,
    /// Usable hosts, absent for /31 and /32.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<HostRange>,
    /// Number of usable hosts.
    pub host_count: u64,
}
