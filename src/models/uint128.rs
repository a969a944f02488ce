//! 128-bit unsigned integer made of two 64-bit limbs.
//!
//! Arithmetic and shifts wrap modulo 2^128 the way fixed-width hardware
//! registers do. Several loops in the set algorithms detect the top of the
//! IPv6 address space by watching a value wrap, so no operation here ever
//! saturates, panics on overflow or widens.

use std::fmt;
use std::net::Ipv6Addr;
use std::ops::{Add, BitAnd, BitOr, Not, Shl, Shr, Sub};

/// Big-endian pair of limbs: `hi` holds bits 127..64, `lo` bits 63..0.
///
/// The derived ordering compares `hi` first, then `lo`, which is the
/// unsigned order of the 128-bit value.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Uint128 {
    pub hi: u64,
    pub lo: u64,
}

impl Uint128 {
    pub const ZERO: Uint128 = Uint128::new(0, 0);
    pub const ONE: Uint128 = Uint128::new(0, 1);
    pub const MAX: Uint128 = Uint128::new(u64::MAX, u64::MAX);
    pub const BITS: u32 = 128;

    pub const fn new(hi: u64, lo: u64) -> Uint128 {
        Uint128 { hi, lo }
    }

    /// Addition modulo 2^128, carrying out of the low limb.
    pub fn wrapping_add(self, other: Uint128) -> Uint128 {
        let (lo, carry) = self.lo.overflowing_add(other.lo);
        let hi = self
            .hi
            .wrapping_add(other.hi)
            .wrapping_add(u64::from(carry));
        Uint128 { hi, lo }
    }

    /// Subtraction modulo 2^128, borrowing from the high limb.
    pub fn wrapping_sub(self, other: Uint128) -> Uint128 {
        let (lo, borrow) = self.lo.overflowing_sub(other.lo);
        let hi = self
            .hi
            .wrapping_sub(other.hi)
            .wrapping_sub(u64::from(borrow));
        Uint128 { hi, lo }
    }

    /// Zero has 128 trailing zeros.
    pub fn trailing_zeros(self) -> u32 {
        if self.lo == 0 {
            64 + self.hi.trailing_zeros()
        } else {
            self.lo.trailing_zeros()
        }
    }

    /// Zero has 128 leading zeros.
    pub fn leading_zeros(self) -> u32 {
        if self.hi == 0 {
            64 + self.lo.leading_zeros()
        } else {
            self.hi.leading_zeros()
        }
    }

    pub fn from_be_bytes(bytes: [u8; 16]) -> Uint128 {
        let mut hi = [0u8; 8];
        let mut lo = [0u8; 8];
        hi.copy_from_slice(&bytes[..8]);
        lo.copy_from_slice(&bytes[8..]);
        Uint128 {
            hi: u64::from_be_bytes(hi),
            lo: u64::from_be_bytes(lo),
        }
    }

    pub fn to_be_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&self.hi.to_be_bytes());
        out[8..].copy_from_slice(&self.lo.to_be_bytes());
        out
    }
}

impl Add for Uint128 {
    type Output = Uint128;

    fn add(self, rhs: Uint128) -> Uint128 {
        self.wrapping_add(rhs)
    }
}

impl Sub for Uint128 {
    type Output = Uint128;

    fn sub(self, rhs: Uint128) -> Uint128 {
        self.wrapping_sub(rhs)
    }
}

/// Shifting by 128 or more yields zero.
impl Shl<u32> for Uint128 {
    type Output = Uint128;

    fn shl(self, bits: u32) -> Uint128 {
        match bits {
            0 => self,
            1..=63 => Uint128 {
                hi: (self.hi << bits) | (self.lo >> (64 - bits)),
                lo: self.lo << bits,
            },
            64..=127 => Uint128 {
                hi: self.lo << (bits - 64),
                lo: 0,
            },
            _ => Uint128::ZERO,
        }
    }
}

/// Logical shift; shifting by 128 or more yields zero.
impl Shr<u32> for Uint128 {
    type Output = Uint128;

    fn shr(self, bits: u32) -> Uint128 {
        match bits {
            0 => self,
            1..=63 => Uint128 {
                hi: self.hi >> bits,
                lo: (self.lo >> bits) | (self.hi << (64 - bits)),
            },
            64..=127 => Uint128 {
                hi: 0,
                lo: self.hi >> (bits - 64),
            },
            _ => Uint128::ZERO,
        }
    }
}

impl BitAnd for Uint128 {
    type Output = Uint128;

    fn bitand(self, rhs: Uint128) -> Uint128 {
        Uint128::new(self.hi & rhs.hi, self.lo & rhs.lo)
    }
}

impl BitOr for Uint128 {
    type Output = Uint128;

    fn bitor(self, rhs: Uint128) -> Uint128 {
        Uint128::new(self.hi | rhs.hi, self.lo | rhs.lo)
    }
}

impl Not for Uint128 {
    type Output = Uint128;

    fn not(self) -> Uint128 {
        Uint128::new(!self.hi, !self.lo)
    }
}

impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Uint128::new(0, value)
    }
}

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Uint128::new((value >> 64) as u64, value as u64)
    }
}

impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        (u128::from(value.hi) << 64) | u128::from(value.lo)
    }
}

impl From<Ipv6Addr> for Uint128 {
    fn from(addr: Ipv6Addr) -> Self {
        Uint128::from_be_bytes(addr.octets())
    }
}

impl From<Uint128> for Ipv6Addr {
    fn from(value: Uint128) -> Self {
        Ipv6Addr::from(value.to_be_bytes())
    }
}

impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", u128::from(*self))
    }
}

impl fmt::LowerHex for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&u128::from(*self), f)
    }
}
