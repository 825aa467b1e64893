//! Subnet calculation from an address and prefix length.

use crate::models::{to_address32, HostRange, Octets, SubnetResult, MAX_LENGTH};

/// Convert a CIDR prefix length to a subnet mask.
///
/// Prefixes above 32 are treated as 32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::processing::subnet_mask;
/// assert_eq!(subnet_mask(24), 0xFFFFFF00);
/// assert_eq!(subnet_mask(0), 0);
/// ```
pub fn subnet_mask(prefix: u8) -> u32 {
    let right_len = MAX_LENGTH - prefix.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    // shift in 64 bits so /0 (shift by 32) is defined
    ((all_bits << right_len) & all_bits) as u32
}

/// Host bits of the mask, the complement of [`subnet_mask`].
pub fn wildcard_mask(prefix: u8) -> u32 {
    !subnet_mask(prefix)
}

/// Number of usable hosts for a prefix length.
///
/// Network and broadcast addresses are excluded, so /31 and /32 give 0.
pub fn host_count(prefix: u8) -> u64 {
    let right_len = MAX_LENGTH - prefix.min(MAX_LENGTH);
    (1u64 << right_len).saturating_sub(2)
}

/// Derive all subnet properties of `addr` with `prefix`.
pub fn calculate(addr: u32, prefix: u8) -> SubnetResult {
    debug_assert!(prefix <= MAX_LENGTH, "prefix /{prefix} not validated");
    let mask = subnet_mask(prefix);
    let wildcard = wildcard_mask(prefix);
    let network = addr & mask;
    let broadcast = addr | wildcard;

    // /31 and /32 leave no room between network and broadcast
    let range = if prefix < MAX_LENGTH - 1 {
        Some(HostRange {
            start: network + 1,
            end: broadcast - 1,
        })
    } else {
        None
    };

    let result = SubnetResult {
        network,
        broadcast,
        subnet_mask: mask,
        wildcard_mask: wildcard,
        range,
        host_count: host_count(prefix),
    };
    log::debug!("calculate({addr:#010x}/{prefix}) = {result:?}");
    result
}

/// [`calculate`] for an address given as octets.
pub fn calculate_octets(octets: Octets, prefix: u8) -> SubnetResult {
    calculate(to_address32(octets), prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::address_to_string;

    #[test]
    fn test_subnet_mask() {
        assert_eq!(subnet_mask(0), 0x00000000);
        assert_eq!(subnet_mask(1), 0x80000000);
        assert_eq!(subnet_mask(8), 0xFF000000);
        assert_eq!(subnet_mask(16), 0xFFFF0000);
        assert_eq!(subnet_mask(24), 0xFFFFFF00);
        assert_eq!(subnet_mask(31), 0xFFFFFFFE);
        assert_eq!(subnet_mask(32), 0xFFFFFFFF);
    }

    #[test]
    fn test_mask_xor_wildcard() {
        for prefix in 0..=MAX_LENGTH {
            assert_eq!(subnet_mask(prefix) ^ wildcard_mask(prefix), u32::MAX);
            assert_eq!(subnet_mask(prefix).count_ones(), prefix as u32);
        }
    }

    #[test]
    fn test_host_count() {
        assert_eq!(host_count(0), 4294967294);
        assert_eq!(host_count(8), 16777214);
        assert_eq!(host_count(16), 65534);
        assert_eq!(host_count(24), 254);
        assert_eq!(host_count(30), 2);
        assert_eq!(host_count(31), 0);
        assert_eq!(host_count(32), 0);
    }

    #[test]
    fn test_calculate_24() {
        let result = calculate_octets([192, 168, 0, 1], 24);
        assert_eq!(address_to_string(result.network), "192.168.0.0");
        assert_eq!(address_to_string(result.broadcast), "192.168.0.255");
        assert_eq!(address_to_string(result.subnet_mask), "255.255.255.0");
        assert_eq!(address_to_string(result.wildcard_mask), "0.0.0.255");
        let range = result.range.unwrap();
        assert_eq!(address_to_string(range.start), "192.168.0.1");
        assert_eq!(address_to_string(range.end), "192.168.0.254");
        assert_eq!(result.host_count, 254);
    }

    #[test]
    fn test_calculate_30() {
        let result = calculate_octets([10, 0, 0, 5], 30);
        assert_eq!(address_to_string(result.network), "10.0.0.4");
        assert_eq!(address_to_string(result.broadcast), "10.0.0.7");
        assert_eq!(result.host_count, 2);
        assert_eq!(
            result.range,
            Some(HostRange {
                start: 0x0A000005,
                end: 0x0A000006
            })
        );
    }

    #[test]
    fn test_calculate_no_range() {
        let r31 = calculate_octets([10, 0, 0, 5], 31);
        assert_eq!(address_to_string(r31.network), "10.0.0.4");
        assert_eq!(address_to_string(r31.broadcast), "10.0.0.5");
        assert_eq!(r31.range, None);
        assert_eq!(r31.host_count, 0);

        let r32 = calculate_octets([10, 0, 0, 5], 32);
        assert_eq!(r32.network, r32.broadcast);
        assert_eq!(r32.range, None);
        assert_eq!(r32.host_count, 0);
    }

    #[test]
    fn test_calculate_zero_prefix() {
        let result = calculate_octets([172, 16, 5, 4], 0);
        assert_eq!(result.subnet_mask, 0);
        assert_eq!(result.wildcard_mask, u32::MAX);
        assert_eq!(result.network, 0);
        assert_eq!(result.broadcast, u32::MAX);
        assert_eq!(result.host_count, 4294967294);
        assert_eq!(
            result.range,
            Some(HostRange {
                start: 1,
                end: u32::MAX - 1
            })
        );
    }

    #[test]
    fn test_calculate_extremes() {
        let top = calculate(u32::MAX, 8);
        assert_eq!(address_to_string(top.network), "255.0.0.0");
        assert_eq!(address_to_string(top.broadcast), "255.255.255.255");
        let bottom = calculate(0, 30);
        assert_eq!(address_to_string(bottom.broadcast), "0.0.0.3");
    }
}
