//! Covering an inclusive address range with CIDR blocks.

use crate::models::{AddrBits, IpNetwork, Net, Uint128};
use std::net::IpAddr;

/// The shortest list of networks that together cover `first..=last`,
/// ascending.
///
/// An empty list is returned when `first > last`.
///
/// # Panics
/// If `first` and `last` belong to different address families.
///
/// # Examples
/// ```
/// use subnet_algebra::summarize_range;
/// let blocks: Vec<String> = summarize_range("192.0.2.0".parse().unwrap(), "192.0.2.130".parse().unwrap())
///     .iter()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(blocks, ["192.0.2.0/25", "192.0.2.128/31", "192.0.2.130/32"]);
/// ```
pub fn summarize_range(first: IpAddr, last: IpAddr) -> Vec<IpNetwork> {
    log::debug!("summarize_range({first}, {last})");
    match (first, last) {
        (IpAddr::V4(f), IpAddr::V4(l)) => summarize_family(u32::from(f), u32::from(l))
            .into_iter()
            .map(IpNetwork::from)
            .collect(),
        (IpAddr::V6(f), IpAddr::V6(l)) => summarize_family(Uint128::from(f), Uint128::from(l))
            .into_iter()
            .map(IpNetwork::from)
            .collect(),
        _ => panic!("IP versions must be the same: {first} and {last}"),
    }
}

fn summarize_family<B: AddrBits>(mut first: B, last: B) -> Vec<Net<B>> {
    let width = u32::from(B::BITS);
    let mut blocks = Vec::new();
    while first <= last {
        // the block is limited by the alignment of `first` and by what is
        // left of the range
        let mut block = first.trailing_zeros().min(width);
        if !(first == B::ZERO && last == B::MAX) {
            let remaining = last.wrapping_sub(first).wrapping_add(B::ONE);
            block = block.min(width - 1 - remaining.leading_zeros());
        }
        let net = Net::new(first, B::BITS - block as u8);
        log::trace!("summarize_range: block {:?}", net);
        blocks.push(net);

        first = first.wrapping_add(B::pow2(block));
        if first == B::ZERO {
            break;
        }
    }
    blocks
}
