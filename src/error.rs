//! Error types for CIDR validation and configuration.

use thiserror::Error;

/// Labels used when reporting which octet is out of range.
pub const OCTET_LABELS: [char; 4] = ['w', 'x', 'y', 'z'];

/// Errors raised while turning user input into a [`crate::models::Cidr`].
///
/// All variants are input errors; none of them are fatal to an interactive
/// session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// Input does not have the shape `w.x.y.z/n`.
    #[error("invalid format '{0}', expected w.x.y.z/n")]
    Format(String),

    /// One octet is outside 0-255.
    #[error("octet {label} must be between 0 and 255, got {value}")]
    OctetRange {
        /// Zero based position of the octet.
        position: usize,
        /// Positional label (w, x, y or z).
        label: char,
        /// The rejected value.
        value: u16,
    },

    /// Prefix length outside the configured bound.
    #[error("prefix /{prefix} must be between {min} and {max}")]
    PrefixRange { prefix: u8, min: u8, max: u8 },

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CidrError {
    pub(crate) fn octet_range(position: usize, value: u16) -> Self {
        CidrError::OctetRange {
            position,
            label: OCTET_LABELS[position],
            value,
        }
    }
}
