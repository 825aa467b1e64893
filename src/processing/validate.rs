//! Input validation and parsing of `w.x.y.z/n` strings.

use crate::error::CidrError;
use crate::models::{CidrBounds, Octets};
use regex::Regex;
use std::sync::OnceLock;

/// Lexical shape of a CIDR string. Numeric bounds are checked separately.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}/[0-9]{1,2}$")
            .expect("Invalid Regex")
    })
}

/// Split `w.x.y.z/n` into raw octet values and prefix.
///
/// No range checks are done here; octets come back as `u16` so that values
/// such as `300` survive until [`validate`] can report them.
/// Returns `None` if the text does not split into four numbers and a prefix.
pub fn parse(input: &str) -> Option<([u16; 4], u8)> {
    let (addr, prefix) = input.trim().split_once('/')?;
    let prefix: u8 = prefix.parse().ok()?;

    let mut octets = [0u16; 4];
    let mut parts = addr.split('.');
    for octet in octets.iter_mut() {
        *octet = parts.next()?.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some((octets, prefix))
}

/// Check shape and ranges of `input`, returning octets and prefix.
///
/// # Errors
/// * [`CidrError::Format`] if the text is not `w.x.y.z/n`
/// * [`CidrError::OctetRange`] for the first octet above 255
/// * [`CidrError::PrefixRange`] if the prefix is outside `bounds`
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::CidrBounds;
/// use ipv4_subnet_calc::processing::validate;
/// let (octets, prefix) = validate("10.0.0.5/30", &CidrBounds::default()).unwrap();
/// assert_eq!(octets, [10, 0, 0, 5]);
/// assert_eq!(prefix, 30);
/// ```
pub fn validate(input: &str, bounds: &CidrBounds) -> Result<(Octets, u8), CidrError> {
    let input = input.trim();
    log::debug!("validate({input})");

    if !get_cidr_regex().is_match(input) {
        return Err(CidrError::Format(input.to_string()));
    }
    let (raw, prefix) = parse(input).ok_or_else(|| CidrError::Format(input.to_string()))?;

    let mut octets = [0u8; 4];
    for (position, (octet, value)) in octets.iter_mut().zip(raw).enumerate() {
        *octet = u8::try_from(value).map_err(|_| CidrError::octet_range(position, value))?;
    }

    if !bounds.contains(prefix) {
        return Err(CidrError::PrefixRange {
            prefix,
            min: bounds.min,
            max: bounds.max,
        });
    }
    log::trace!("parsed octets={octets:?} prefix={prefix}");
    Ok((octets, prefix))
}
