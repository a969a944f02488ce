//! Merging a set of networks into the smallest equivalent set.

use crate::models::{AddrBits, IpNetwork, Net, Uint128};
use itertools::{Either, Itertools};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::net::IpAddr;

/// Merge `nets` into the minimal list of disjoint networks covering exactly
/// the same addresses.
///
/// Sibling networks are combined into their supernet, duplicates and
/// networks nested inside another input disappear. The result holds the
/// IPv4 networks in ascending order followed by the IPv6 networks in
/// ascending order, with host bits cleared.
///
/// # Examples
/// ```
/// use subnet_algebra::{collapse, IpNetwork};
/// let quarters: Vec<IpNetwork> = ["192.0.2.0/26", "192.0.2.64/26", "192.0.2.128/26", "192.0.2.192/26"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(collapse(&quarters), vec![IpNetwork::new("192.0.2.0/24").unwrap()]);
/// ```
pub fn collapse(nets: &[IpNetwork]) -> Vec<IpNetwork> {
    log::debug!("collapse: {} networks", nets.len());
    let (four, six): (Vec<Net<u32>>, Vec<Net<Uint128>>) =
        nets.iter().partition_map(|n| match n.addr {
            IpAddr::V4(a) => Either::Left(Net::new(u32::from(a), n.prefix)),
            IpAddr::V6(a) => Either::Right(Net::new(Uint128::from(a), n.prefix)),
        });

    let merged: Vec<IpNetwork> = collapse_family(four)
        .into_iter()
        .map(IpNetwork::from)
        .chain(collapse_family(six).into_iter().map(IpNetwork::from))
        .collect();
    log::debug!("collapse: {} networks remain", merged.len());
    merged
}

/// Collapse networks of a single family.
pub(crate) fn collapse_family<B: AddrBits>(nets: Vec<Net<B>>) -> Vec<Net<B>> {
    let mut work: Vec<Net<B>> = nets.into_iter().map(Net::normalized).collect();
    // supernet -> the one child seen so far
    let mut claims: HashMap<Net<B>, Net<B>> = HashMap::with_capacity(work.len());
    let mut whole_space = Vec::new();

    while let Some(net) = work.pop() {
        let Some(parent) = net.supernet() else {
            whole_space.push(net);
            continue;
        };
        match claims.entry(parent) {
            Entry::Vacant(slot) => {
                slot.insert(net);
            }
            Entry::Occupied(slot) if *slot.get() == net => {
                log::trace!("collapse: duplicate {:?}", net);
            }
            Entry::Occupied(slot) => {
                log::trace!("collapse: merging siblings into {:?}", parent);
                slot.remove();
                work.push(parent);
            }
        }
    }

    let mut survivors: Vec<Net<B>> = claims.into_values().chain(whole_space).collect();
    survivors.sort();

    let mut result: Vec<Net<B>> = Vec::with_capacity(survivors.len());
    for net in survivors {
        if result.last().is_some_and(|prev| prev.contains(net.addr)) {
            log::trace!("collapse: {:?} is covered by an earlier network", net);
            continue;
        }
        result.push(net);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(items: &[&str]) -> Vec<IpNetwork> {
        items.iter().map(|s| IpNetwork::new(s).unwrap()).collect()
    }

    fn collapsed(items: &[&str]) -> Vec<String> {
        collapse(&nets(items)).iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_collapse_empty() {
        assert!(collapse(&[]).is_empty());
    }

    #[test]
    fn test_collapse_simple() {
        assert_eq!(
            collapsed(&["192.0.2.0/26", "192.0.2.64/26", "192.0.2.128/26", "192.0.2.192/26"]),
            vec!["192.0.2.0/24"]
        );
    }

    #[test]
    fn test_collapse_simple_v6() {
        assert_eq!(
            collapsed(&["::/26", "0:40::/26", "0:80::/26", "0:c0::/26"]),
            vec!["::/24"]
        );
    }

    #[test]
    fn test_collapse_order_does_not_matter() {
        assert_eq!(
            collapsed(&["192.0.2.192/26", "192.0.2.0/26", "192.0.2.128/26", "192.0.2.64/26"]),
            vec!["192.0.2.0/24"]
        );
    }

    #[test]
    fn test_collapse_partial() {
        assert_eq!(
            collapsed(&["192.0.2.0/26", "192.0.2.64/26", "192.0.2.192/26"]),
            vec!["192.0.2.0/25", "192.0.2.192/26"]
        );
        assert_eq!(
            collapsed(&["10.0.0.0/24", "10.0.2.0/24"]),
            vec!["10.0.0.0/24", "10.0.2.0/24"]
        );
    }

    #[test]
    fn test_collapse_duplicates() {
        assert_eq!(
            collapsed(&["10.0.0.0/24", "10.0.0.0/24", "10.0.0.0/24"]),
            vec!["10.0.0.0/24"]
        );
    }

    #[test]
    fn test_collapse_nested() {
        assert_eq!(
            collapsed(&["10.0.0.0/8", "10.1.0.0/16", "10.1.2.0/24"]),
            vec!["10.0.0.0/8"]
        );
        assert_eq!(
            collapsed(&["10.0.0.0/25", "10.0.0.0/24", "10.0.1.0/24"]),
            vec!["10.0.0.0/23"]
        );
    }

    #[test]
    fn test_collapse_merge_cascades() {
        assert_eq!(
            collapsed(&["10.0.0.0/25", "10.0.0.128/26", "10.0.0.192/26", "10.0.1.0/24"]),
            vec!["10.0.0.0/23"]
        );
    }

    #[test]
    fn test_collapse_host_bits_are_cleared() {
        assert_eq!(
            collapsed(&["10.0.0.77/25", "10.0.0.200/25"]),
            vec!["10.0.0.0/24"]
        );
    }

    #[test]
    fn test_collapse_mixed_families() {
        assert_eq!(
            collapsed(&["2001:db8::/33", "10.0.1.0/24", "2001:db8:8000::/33", "10.0.0.0/24"]),
            vec!["10.0.0.0/23", "2001:db8::/32"]
        );
    }

    #[test]
    fn test_collapse_whole_space() {
        assert_eq!(collapsed(&["0.0.0.0/1", "128.0.0.0/1"]), vec!["0.0.0.0/0"]);
        assert_eq!(collapsed(&["0.0.0.0/0", "10.0.0.0/8"]), vec!["0.0.0.0/0"]);
        assert_eq!(collapsed(&["::/1", "8000::/1", "::1/128"]), vec!["::/0"]);
    }

    #[test]
    fn test_collapse_host_routes() {
        assert_eq!(
            collapsed(&["10.0.0.0/32", "10.0.0.1/32", "10.0.0.2/32", "10.0.0.3/32", "10.0.0.4/32"]),
            vec!["10.0.0.0/30", "10.0.0.4/32"]
        );
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let once = collapse(&nets(&[
            "10.0.0.0/25",
            "10.0.0.128/25",
            "10.0.3.0/24",
            "172.16.0.0/12",
            "2001:db8::/48",
            "2001:db8:1::/48",
        ]));
        assert_eq!(collapse(&once), once);
    }

    #[test]
    fn test_collapse_output_is_disjoint() {
        let out = collapse(&nets(&[
            "10.0.0.0/16",
            "10.0.128.0/17",
            "10.1.0.0/16",
            "10.3.0.0/16",
            "10.2.0.0/24",
        ]));
        for (a, b) in out.iter().tuple_windows() {
            assert!(a.hi() < b.lo(), "{a} and {b} overlap or are out of order");
        }
    }
}
