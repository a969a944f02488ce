//! Width-generic network value used inside the set algorithms.

use super::{AddrBits, IpNetwork};
use std::net::IpAddr;

/// A network as a bare integer base plus prefix length.
///
/// The base may carry host bits; anything that compares or emits networks
/// goes through [`Net::normalized`] first. The derived ordering sorts by base
/// address, then by prefix, so a container sorts before the networks nested
/// at its own base.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Net<B> {
    pub addr: B,
    pub prefix: u8,
}

impl<B: AddrBits> Net<B> {
    /// # Panics
    /// If `prefix` exceeds the address width.
    pub fn new(addr: B, prefix: u8) -> Net<B> {
        assert!(
            prefix <= B::BITS,
            "prefix /{prefix} is longer than the {} bit address width",
            B::BITS
        );
        Net { addr, prefix }
    }

    pub fn mask(&self) -> B {
        B::prefix_mask(self.prefix)
    }

    /// Same network with the host bits of the base cleared.
    pub fn normalized(self) -> Net<B> {
        Net {
            addr: self.first(),
            prefix: self.prefix,
        }
    }

    pub fn first(&self) -> B {
        self.addr.bit_and(self.mask())
    }

    pub fn last(&self) -> B {
        self.first().bit_or(B::host_mask(self.prefix))
    }

    pub fn contains(&self, addr: B) -> bool {
        addr.bit_and(self.mask()) == self.first()
    }

    /// Like [`Net::contains`]; an address of the other family is never
    /// contained.
    pub fn contains_ip(&self, ip: IpAddr) -> bool {
        B::from_ip(ip).is_some_and(|a| self.contains(a))
    }

    /// True when `self` lies entirely inside `other`.
    pub fn is_subnet_of(&self, other: &Net<B>) -> bool {
        other.prefix <= self.prefix && other.contains(self.addr)
    }

    /// The immediate supernet: one bit shorter, last mask bit cleared.
    /// A `/0` has none.
    pub fn supernet(&self) -> Option<Net<B>> {
        let prefix = self.prefix.checked_sub(1)?;
        Some(Net {
            addr: self.addr.bit_and(B::prefix_mask(prefix)),
            prefix,
        })
    }

    /// The two halves of this network, lower half first.
    ///
    /// # Panics
    /// On a full-length (single address) network.
    pub fn children(&self) -> (Net<B>, Net<B>) {
        assert!(
            self.prefix < B::BITS,
            "a /{} network cannot be split further",
            self.prefix
        );
        let prefix = self.prefix + 1;
        let lower = self.first();
        let upper = lower.bit_or(B::pow2(u32::from(B::BITS - prefix)));
        (Net { addr: lower, prefix }, Net { addr: upper, prefix })
    }

    /// `None` when the network belongs to the other address family.
    pub fn from_network(net: &IpNetwork) -> Option<Net<B>> {
        B::from_ip(net.addr).map(|addr| Net::new(addr, net.prefix))
    }
}

impl<B: AddrBits> From<Net<B>> for IpNetwork {
    fn from(net: Net<B>) -> Self {
        IpNetwork {
            addr: net.addr.to_ip(),
            prefix: net.prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Uint128;

    fn v4(a: [u8; 4], prefix: u8) -> Net<u32> {
        Net::new(u32::from_be_bytes(a), prefix)
    }

    #[test]
    fn test_first_last() {
        let n = v4([10, 1, 1, 42], 24);
        assert_eq!(n.first(), u32::from_be_bytes([10, 1, 1, 0]));
        assert_eq!(n.last(), u32::from_be_bytes([10, 1, 1, 255]));
        assert_eq!(n.normalized(), v4([10, 1, 1, 0], 24));

        let all = v4([1, 2, 3, 4], 0);
        assert_eq!(all.first(), 0);
        assert_eq!(all.last(), u32::MAX);
    }

    #[test]
    fn test_supernet() {
        assert_eq!(v4([192, 0, 2, 64], 26).supernet(), Some(v4([192, 0, 2, 0], 25)));
        assert_eq!(v4([192, 0, 2, 192], 26).supernet(), Some(v4([192, 0, 2, 128], 25)));
        assert_eq!(v4([128, 0, 0, 0], 1).supernet(), Some(v4([0, 0, 0, 0], 0)));
        assert_eq!(v4([0, 0, 0, 0], 0).supernet(), None);

        let six = Net::new(Uint128::new(0x0000_8000_0000_0000, 0), 17);
        assert_eq!(six.supernet(), Some(Net::new(Uint128::ZERO, 16)));
    }

    #[test]
    fn test_children() {
        let (lo, hi) = v4([10, 1, 1, 0], 24).children();
        assert_eq!(lo, v4([10, 1, 1, 0], 25));
        assert_eq!(hi, v4([10, 1, 1, 128], 25));

        let (lo, hi) = v4([0, 0, 0, 0], 0).children();
        assert_eq!(lo, v4([0, 0, 0, 0], 1));
        assert_eq!(hi, v4([128, 0, 0, 0], 1));

        let (lo, hi) = Net::new(Uint128::ZERO, 127).children();
        assert_eq!(lo, Net::new(Uint128::ZERO, 128));
        assert_eq!(hi, Net::new(Uint128::ONE, 128));
    }

    #[test]
    #[should_panic(expected = "cannot be split further")]
    fn test_children_of_host() {
        v4([10, 0, 0, 1], 32).children();
    }

    #[test]
    fn test_subnet_of() {
        let outer = v4([10, 0, 0, 0], 8);
        assert!(v4([10, 1, 0, 0], 16).is_subnet_of(&outer));
        assert!(outer.is_subnet_of(&outer));
        assert!(!outer.is_subnet_of(&v4([10, 1, 0, 0], 16)));
        assert!(!v4([11, 0, 0, 0], 16).is_subnet_of(&outer));
    }

    #[test]
    fn test_ordering_puts_container_first() {
        let mut nets = vec![v4([10, 0, 0, 0], 24), v4([10, 0, 0, 0], 8), v4([9, 0, 0, 0], 8)];
        nets.sort();
        assert_eq!(
            nets,
            vec![v4([9, 0, 0, 0], 8), v4([10, 0, 0, 0], 8), v4([10, 0, 0, 0], 24)]
        );
    }

    #[test]
    #[should_panic(expected = "longer than the 32 bit")]
    fn test_new_rejects_long_prefix() {
        v4([10, 0, 0, 0], 33);
    }
}
