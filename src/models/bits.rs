//! Width policy shared by the IPv4 and IPv6 code paths.
//!
//! [`AddrBits`] exposes the handful of fixed-width operations the set
//! algorithms need, so collapse, exclude, summarize and the step cursors are
//! written once and instantiated for `u32` (IPv4) and [`Uint128`] (IPv6).

use super::Uint128;
use std::fmt::Debug;
use std::hash::Hash;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Unsigned integer of a fixed address width with wraparound arithmetic.
pub trait AddrBits: Copy + Eq + Ord + Hash + Debug {
    /// Address width in bits (32 or 128).
    const BITS: u8;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn wrapping_add(self, other: Self) -> Self;
    fn wrapping_sub(self, other: Self) -> Self;
    /// Left shift; a shift of `BITS` or more yields zero.
    fn shl_bits(self, bits: u32) -> Self;
    /// Logical right shift; a shift of `BITS` or more yields zero.
    fn shr_bits(self, bits: u32) -> Self;
    fn bit_and(self, other: Self) -> Self;
    fn bit_or(self, other: Self) -> Self;
    fn bit_not(self) -> Self;
    fn trailing_zeros(self) -> u32;
    fn leading_zeros(self) -> u32;

    /// `value` modulo 2^BITS.
    fn from_u64_wrapping(value: u64) -> Self;
    /// `None` when `value` does not fit in `BITS`.
    fn checked_from_u64(value: u64) -> Option<Self>;

    /// Read a big-endian buffer of exactly `BITS / 8` bytes.
    ///
    /// # Panics
    /// If the buffer length does not match the width.
    fn from_be_slice(bytes: &[u8]) -> Self;
    /// Write into a big-endian buffer of exactly `BITS / 8` bytes.
    ///
    /// # Panics
    /// If the buffer length does not match the width.
    fn write_be(self, out: &mut [u8]);

    /// `None` when the address belongs to the other family.
    fn from_ip(addr: IpAddr) -> Option<Self>;
    fn to_ip(self) -> IpAddr;

    /// 2^n, or zero when `n >= BITS`.
    fn pow2(n: u32) -> Self {
        Self::ONE.shl_bits(n)
    }

    /// Host part mask for a prefix: the low `BITS - prefix` bits set.
    fn host_mask(prefix: u8) -> Self {
        check_prefix::<Self>(prefix);
        if prefix == 0 {
            return Self::MAX;
        }
        Self::pow2(u32::from(Self::BITS - prefix)).wrapping_sub(Self::ONE)
    }

    /// Network mask for a prefix: the high `prefix` bits set.
    fn prefix_mask(prefix: u8) -> Self {
        check_prefix::<Self>(prefix);
        // 1 << BITS is not representable, /0 has to be spelled out
        if prefix == 0 {
            return Self::ZERO;
        }
        Self::host_mask(prefix).bit_not()
    }
}

fn check_prefix<B: AddrBits>(prefix: u8) {
    assert!(
        prefix <= B::BITS,
        "prefix /{prefix} is longer than the {} bit address width",
        B::BITS
    );
}

fn check_len(len: usize, bits: u8) {
    assert_eq!(
        len,
        usize::from(bits / 8),
        "a {bits} bit address needs a {} byte buffer",
        bits / 8
    );
}

impl AddrBits for u32 {
    const BITS: u8 = 32;
    const ZERO: u32 = 0;
    const ONE: u32 = 1;
    const MAX: u32 = u32::MAX;

    fn wrapping_add(self, other: u32) -> u32 {
        u32::wrapping_add(self, other)
    }

    fn wrapping_sub(self, other: u32) -> u32 {
        u32::wrapping_sub(self, other)
    }

    fn shl_bits(self, bits: u32) -> u32 {
        self.checked_shl(bits).unwrap_or(0)
    }

    fn shr_bits(self, bits: u32) -> u32 {
        self.checked_shr(bits).unwrap_or(0)
    }

    fn bit_and(self, other: u32) -> u32 {
        self & other
    }

    fn bit_or(self, other: u32) -> u32 {
        self | other
    }

    fn bit_not(self) -> u32 {
        !self
    }

    fn trailing_zeros(self) -> u32 {
        u32::trailing_zeros(self)
    }

    fn leading_zeros(self) -> u32 {
        u32::leading_zeros(self)
    }

    fn from_u64_wrapping(value: u64) -> u32 {
        value as u32
    }

    fn checked_from_u64(value: u64) -> Option<u32> {
        u32::try_from(value).ok()
    }

    fn from_be_slice(bytes: &[u8]) -> u32 {
        check_len(bytes.len(), 32);
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        u32::from_be_bytes(buf)
    }

    fn write_be(self, out: &mut [u8]) {
        check_len(out.len(), 32);
        out.copy_from_slice(&self.to_be_bytes());
    }

    fn from_ip(addr: IpAddr) -> Option<u32> {
        match addr {
            IpAddr::V4(a) => Some(u32::from(a)),
            IpAddr::V6(_) => None,
        }
    }

    fn to_ip(self) -> IpAddr {
        IpAddr::V4(Ipv4Addr::from(self))
    }
}

impl AddrBits for Uint128 {
    const BITS: u8 = 128;
    const ZERO: Uint128 = Uint128::ZERO;
    const ONE: Uint128 = Uint128::ONE;
    const MAX: Uint128 = Uint128::MAX;

    fn wrapping_add(self, other: Uint128) -> Uint128 {
        Uint128::wrapping_add(self, other)
    }

    fn wrapping_sub(self, other: Uint128) -> Uint128 {
        Uint128::wrapping_sub(self, other)
    }

    fn shl_bits(self, bits: u32) -> Uint128 {
        self << bits
    }

    fn shr_bits(self, bits: u32) -> Uint128 {
        self >> bits
    }

    fn bit_and(self, other: Uint128) -> Uint128 {
        self & other
    }

    fn bit_or(self, other: Uint128) -> Uint128 {
        self | other
    }

    fn bit_not(self) -> Uint128 {
        !self
    }

    fn trailing_zeros(self) -> u32 {
        Uint128::trailing_zeros(self)
    }

    fn leading_zeros(self) -> u32 {
        Uint128::leading_zeros(self)
    }

    fn from_u64_wrapping(value: u64) -> Uint128 {
        Uint128::from(value)
    }

    fn checked_from_u64(value: u64) -> Option<Uint128> {
        Some(Uint128::from(value))
    }

    fn from_be_slice(bytes: &[u8]) -> Uint128 {
        check_len(bytes.len(), 128);
        let mut buf = [0u8; 16];
        buf.copy_from_slice(bytes);
        Uint128::from_be_bytes(buf)
    }

    fn write_be(self, out: &mut [u8]) {
        check_len(out.len(), 128);
        out.copy_from_slice(&self.to_be_bytes());
    }

    fn from_ip(addr: IpAddr) -> Option<Uint128> {
        match addr {
            IpAddr::V4(_) => None,
            IpAddr::V6(a) => Some(Uint128::from(a)),
        }
    }

    fn to_ip(self) -> IpAddr {
        IpAddr::V6(Ipv6Addr::from(self))
    }
}
