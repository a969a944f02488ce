//! Errors for input that arrives as text or raw bytes.
//!
//! Contract violations inside the algorithms (mixed address families, a
//! prefix beyond the address width) panic instead; see the crate docs.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddrError {
    #[error("invalid CIDR format: {0}")]
    InvalidCidr(String),

    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("invalid prefix length: {0}")]
    InvalidPrefix(String),

    #[error("Network length /{prefix} is too long for a {bits} bit address")]
    PrefixTooLong { prefix: u8, bits: u8 },

    #[error("address buffer must be 4 or 16 bytes, got {0}")]
    BufferLength(usize),

    #[error("mask of {mask_len} bytes does not fit a {addr_len} byte address")]
    MaskLength { mask_len: usize, addr_len: usize },

    #[error("network mask is not contiguous")]
    NonContiguousMask,

    #[error("IP versions must be the same: {0} and {1}")]
    FamilyMismatch(String, String),
}
