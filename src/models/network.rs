//! IP network (address plus prefix length) for either address family.
//!
//! Provides [`IpNetwork`], the type the public operations take and return,
//! with CIDR text parsing and formatting and conversions from raw
//! big-endian byte buffers.

use super::{AddrBits, Uint128};
use crate::error::AddrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length of an IPv4 network.
pub const IPV4_BITS: u8 = 32;
/// Maximum prefix length of an IPv6 network.
pub const IPV6_BITS: u8 = 128;

/// Runs `$body` with `$n` bound to the family-specific [`Net`] of `$net`.
///
/// `$body` is compiled once per family, so it must produce the same type for
/// `Net<u32>` and `Net<Uint128>`.
macro_rules! on_family {
    ($net:expr, $n:ident => $body:expr) => {
        match $net.addr {
            std::net::IpAddr::V4(a) => {
                let $n = $crate::models::Net::<u32>::new(u32::from(a), $net.prefix);
                $body
            }
            std::net::IpAddr::V6(a) => {
                let $n = $crate::models::Net::<$crate::models::Uint128>::new(
                    $crate::models::Uint128::from(a),
                    $net.prefix,
                );
                $body
            }
        }
    };
}
pub(crate) use on_family;

/// An IPv4 or IPv6 network in CIDR notation.
///
/// `addr` may carry host bits (`10.1.1.42/24`); [`IpNetwork::trunc`] clears
/// them. Ordering sorts IPv4 before IPv6, then by address, then by prefix.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct IpNetwork {
    /// The network (or any contained) address.
    pub addr: IpAddr,
    /// The prefix length (0-32 or 0-128).
    pub prefix: u8,
}

impl IpNetwork {
    /// Parse `addr/prefix`; a bare address is taken as a single-address
    /// network (`/32` or `/128`).
    ///
    /// # Examples
    /// ```
    /// use subnet_algebra::IpNetwork;
    /// let net = IpNetwork::new("10.0.0.0/24").unwrap();
    /// assert_eq!(net.prefix, 24);
    /// assert_eq!(IpNetwork::new("2001:db8::1").unwrap().prefix, 128);
    /// ```
    pub fn new(addr_cidr: &str) -> Result<IpNetwork, AddrError> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, prefix_part) = match addr_cidr.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (addr_cidr, None),
        };
        if addr_part.is_empty() || prefix_part.is_some_and(|p| p.contains('/')) {
            return Err(AddrError::InvalidCidr(addr_cidr.to_string()));
        }
        let addr: IpAddr = addr_part
            .parse()
            .map_err(|_| AddrError::InvalidAddress(addr_part.to_string()))?;
        let prefix = match prefix_part {
            Some(p) => p
                .parse::<u8>()
                .map_err(|_| AddrError::InvalidPrefix(p.to_string()))?,
            None => max_prefix(addr),
        };
        IpNetwork::try_from_parts(addr, prefix)
    }

    /// # Errors
    /// [`AddrError::PrefixTooLong`] when `prefix` exceeds the address width.
    pub fn try_from_parts(addr: IpAddr, prefix: u8) -> Result<IpNetwork, AddrError> {
        let bits = max_prefix(addr);
        if prefix > bits {
            return Err(AddrError::PrefixTooLong { prefix, bits });
        }
        Ok(IpNetwork { addr, prefix })
    }

    /// # Panics
    /// If `prefix` exceeds the address width.
    pub fn from_parts(addr: IpAddr, prefix: u8) -> IpNetwork {
        IpNetwork::try_from_parts(addr, prefix).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Build from a 4- or 16-byte big-endian address buffer.
    pub fn from_bytes(bytes: &[u8], prefix: u8) -> Result<IpNetwork, AddrError> {
        IpNetwork::try_from_parts(addr_from_bytes(bytes)?, prefix)
    }

    /// Build from an address and a same-length netmask buffer
    /// (e.g. `255.255.255.0`). The mask must be contiguous.
    pub fn from_mask(addr: IpAddr, mask: &[u8]) -> Result<IpNetwork, AddrError> {
        let addr_len = usize::from(max_prefix(addr) / 8);
        if mask.len() != addr_len {
            return Err(AddrError::MaskLength {
                mask_len: mask.len(),
                addr_len,
            });
        }
        let prefix = match addr {
            IpAddr::V4(_) => contiguous_prefix(u32::from_be_slice(mask)),
            IpAddr::V6(_) => contiguous_prefix(Uint128::from_be_slice(mask)),
        }
        .ok_or(AddrError::NonContiguousMask)?;
        IpNetwork::try_from_parts(addr, prefix)
    }

    /// Address width: 32 for IPv4, 128 for IPv6.
    pub fn max_prefix(&self) -> u8 {
        max_prefix(self.addr)
    }

    pub fn is_ipv4(&self) -> bool {
        self.addr.is_ipv4()
    }

    pub fn is_ipv6(&self) -> bool {
        self.addr.is_ipv6()
    }

    /// True when both networks belong to the same address family.
    pub fn same_family(&self, other: &IpNetwork) -> bool {
        self.is_ipv4() == other.is_ipv4()
    }

    /// The same network with host bits cleared.
    pub fn trunc(&self) -> IpNetwork {
        on_family!(self, n => IpNetwork::from(n.normalized()))
    }

    /// Get the lowest (network) address in the network.
    pub fn lo(&self) -> IpAddr {
        on_family!(self, n => n.first().to_ip())
    }

    /// Get the highest (broadcast) address in the network.
    pub fn hi(&self) -> IpAddr {
        on_family!(self, n => n.last().to_ip())
    }

    /// Check if an IP address is contained within this network.
    /// Addresses of the other family are never contained.
    pub fn contains(&self, ip: IpAddr) -> bool {
        on_family!(self, n => n.contains_ip(ip))
    }

    /// The netmask as an address (`255.255.255.0` for a `/24`).
    pub fn netmask(&self) -> IpAddr {
        on_family!(self, n => n.mask().to_ip())
    }

    /// The netmask as a big-endian byte buffer of the address length.
    pub fn mask_bytes(&self) -> Vec<u8> {
        match self.netmask() {
            IpAddr::V4(m) => m.octets().to_vec(),
            IpAddr::V6(m) => m.octets().to_vec(),
        }
    }
}

/// Address width for the family of `addr`.
pub fn max_prefix(addr: IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => IPV4_BITS,
        IpAddr::V6(_) => IPV6_BITS,
    }
}

/// Read an address from a 4- or 16-byte big-endian buffer.
pub fn addr_from_bytes(bytes: &[u8]) -> Result<IpAddr, AddrError> {
    match bytes.len() {
        4 => Ok(IpAddr::V4(Ipv4Addr::from(u32::from_be_slice(bytes)))),
        16 => Ok(IpAddr::V6(Ipv6Addr::from(Uint128::from_be_slice(bytes)))),
        len => Err(AddrError::BufferLength(len)),
    }
}

/// Write an address as a big-endian buffer of 4 or 16 bytes.
pub fn addr_to_bytes(addr: IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(a) => a.octets().to_vec(),
        IpAddr::V6(a) => a.octets().to_vec(),
    }
}

/// Prefix length of a mask made of leading ones followed by zeros.
fn contiguous_prefix<B: AddrBits>(mask: B) -> Option<u8> {
    let ones = mask.bit_not().leading_zeros();
    let prefix = u8::try_from(ones).ok()?;
    (B::prefix_mask(prefix) == mask).then_some(prefix)
}

impl FromStr for IpNetwork {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpNetwork::new(s)
    }
}

impl fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for IpNetwork {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IpNetwork {
    fn deserialize<D>(deserializer: D) -> Result<IpNetwork, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpNetwork::new(&s).map_err(de::Error::custom)
    }
}
