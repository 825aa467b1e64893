//! IPv4 address and CIDR notation utilities.
//!
//! Addresses are carried as plain `u32` values. The helpers here convert
//! between that form, the four octets and the dotted-quad text.

use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// The four octets of an address in order w, x, y, z.
pub type Octets = [u8; 4];

/// Pack four octets into a 32 bit address.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::to_address32;
/// assert_eq!(to_address32([192, 168, 0, 1]), 0xC0A80001);
/// ```
pub fn to_address32(octets: Octets) -> u32 {
    (u32::from(octets[0]) << 24)
        | (u32::from(octets[1]) << 16)
        | (u32::from(octets[2]) << 8)
        | u32::from(octets[3])
}

/// Split a 32 bit address into its four octets.
pub fn from_address32(addr: u32) -> Octets {
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = ((addr >> (8 * (3 - i))) & 0xFF) as u8;
    }
    octets
}

/// Join four octets with `.`.
pub fn format_octets(octets: Octets) -> String {
    itertools::join(octets.iter(), ".")
}

/// Dotted-quad text for a 32 bit address.
pub fn address_to_string(addr: u32) -> String {
    format_octets(from_address32(addr))
}

/// Serialize a `u32` address as dotted-quad text.
pub fn serialize_address<S>(addr: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&address_to_string(*addr))
}

/// Inclusive bound on accepted prefix lengths.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CidrBounds {
    pub min: u8,
    pub max: u8,
}

impl CidrBounds {
    /// Build a bound, rejecting `min > max` and anything above /32.
    pub fn new(min: u8, max: u8) -> Result<CidrBounds, CidrError> {
        if max > MAX_LENGTH {
            return Err(CidrError::Config(format!(
                "maximum prefix {max} is above {MAX_LENGTH}"
            )));
        }
        if min > max {
            return Err(CidrError::Config(format!(
                "minimum prefix {min} is above maximum prefix {max}"
            )));
        }
        Ok(CidrBounds { min, max })
    }

    pub fn contains(&self, prefix: u8) -> bool {
        (self.min..=self.max).contains(&prefix)
    }
}

impl Default for CidrBounds {
    fn default() -> Self {
        CidrBounds {
            min: 0,
            max: MAX_LENGTH,
        }
    }
}

/// A validated IPv4 address with its prefix length.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as entered (host bits are kept).
    pub addr: u32,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// Parse and validate `w.x.y.z/n` against `bounds`.
    pub fn new(addr_cidr: &str, bounds: &CidrBounds) -> Result<Cidr, CidrError> {
        let (octets, prefix) = crate::processing::validate(addr_cidr, bounds)?;
        Ok(Cidr {
            addr: to_address32(octets),
            prefix,
        })
    }

    pub fn octets(&self) -> Octets {
        from_address32(self.addr)
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s, &CidrBounds::default())
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", address_to_string(self.addr), self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::from_str(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
