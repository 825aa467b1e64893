//! Integration tests for ipv4-subnet-calc
//!
//! These tests go through the public entry points from input text to
//! formatted addresses.

use ipv4_subnet_calc::{
    calculate_octets,
    models::{address_to_string, from_address32, to_address32, CidrBounds},
    processing::{host_count, subnet_mask, wildcard_mask},
    validate_and_parse, CidrError,
};

fn describe(input: &str) -> Vec<String> {
    let (octets, prefix) =
        validate_and_parse(input, &CidrBounds::default()).expect("Failed to validate input");
    let result = calculate_octets(octets, prefix);
    let mut fields = vec![
        address_to_string(result.network),
        address_to_string(result.broadcast),
        address_to_string(result.subnet_mask),
        address_to_string(result.wildcard_mask),
        result.host_count.to_string(),
    ];
    if let Some(range) = result.range {
        fields.push(address_to_string(range.start));
        fields.push(address_to_string(range.end));
    }
    fields
}

#[test]
fn test_full_workflow_24() {
    assert_eq!(
        describe("192.168.0.1/24"),
        vec![
            "192.168.0.0",
            "192.168.0.255",
            "255.255.255.0",
            "0.0.0.255",
            "254",
            "192.168.0.1",
            "192.168.0.254",
        ]
    );
}

#[test]
fn test_full_workflow_30() {
    assert_eq!(
        describe("10.0.0.5/30"),
        vec![
            "10.0.0.4",
            "10.0.0.7",
            "255.255.255.252",
            "0.0.0.3",
            "2",
            "10.0.0.5",
            "10.0.0.6",
        ]
    );
}

#[test]
fn test_full_workflow_edges() {
    let zero = describe("8.8.8.8/0");
    assert_eq!(zero[0], "0.0.0.0");
    assert_eq!(zero[1], "255.255.255.255");
    assert_eq!(zero[4], "4294967294");

    assert_eq!(describe("172.16.0.9/31").len(), 5, "No host range for /31");
    assert_eq!(describe("172.16.0.9/32")[0], "172.16.0.9");
}

#[test]
fn test_rejected_inputs() {
    let bounds = CidrBounds::default();
    assert!(matches!(
        validate_and_parse("256.1.1.1/24", &bounds),
        Err(CidrError::OctetRange {
            position: 0,
            label: 'w',
            ..
        })
    ));
    assert!(matches!(
        validate_and_parse("192.168.1.1/33", &bounds),
        Err(CidrError::PrefixRange { prefix: 33, .. })
    ));
    assert!(matches!(
        validate_and_parse("abc", &bounds),
        Err(CidrError::Format(_))
    ));
}

#[test]
fn test_bit_laws() {
    for prefix in 0..=32u8 {
        assert_eq!(subnet_mask(prefix) ^ wildcard_mask(prefix), 0xFFFFFFFF);
    }
    assert_eq!(host_count(31), 0);
    assert_eq!(host_count(32), 0);
    assert_eq!(host_count(24), 254);
    assert_eq!(host_count(0), 4294967294);

    for octets in [[0, 0, 0, 0], [127, 0, 0, 1], [255, 255, 255, 255], [1, 2, 3, 4]] {
        assert_eq!(from_address32(to_address32(octets)), octets);
    }
}
