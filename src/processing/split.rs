//! Enumerating the contents of a network: child networks, every address,
//! usable host addresses.

use super::iter::{AddrIter, NetIter, StepCursor};
use crate::models::{on_family, AddrBits, IpNetwork, Net};

/// Iterate the `2^(new_prefix - prefix)` equal-size children of `net`, in
/// ascending order.
///
/// # Panics
/// If `new_prefix` is outside `[net.prefix, width]`.
///
/// # Examples
/// ```
/// use subnet_algebra::{split, IpNetwork};
/// let quarters: Vec<String> = split(IpNetwork::new("10.0.0.0/24").unwrap(), 26)
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(quarters, ["10.0.0.0/26", "10.0.0.64/26", "10.0.0.128/26", "10.0.0.192/26"]);
/// ```
pub fn split(net: IpNetwork, new_prefix: u8) -> NetIter {
    let bits = net.max_prefix();
    if net.prefix > new_prefix || new_prefix > bits {
        panic!(
            "must be in [{}, {}] but got {}",
            net.prefix, bits, new_prefix
        );
    }
    log::debug!("split({net}, /{new_prefix})");
    let addrs = on_family!(net, n => AddrIter::from(child_cursor(n, new_prefix)));
    NetIter::new(addrs, new_prefix)
}

/// Iterate every address of `net`, network and broadcast address included.
pub fn addresses(net: IpNetwork) -> AddrIter {
    on_family!(net, n => AddrIter::from(address_cursor(n)))
}

/// Iterate the host addresses of `net`: everything except the first
/// (network) and last (broadcast) address.
///
/// Networks of two addresses or fewer (IPv4 `/31` and `/32`, IPv6 `/127` and
/// `/128`) have no host addresses in this sense and yield nothing.
pub fn hosts(net: IpNetwork) -> AddrIter {
    if net.max_prefix() - net.prefix < 2 {
        log::debug!("hosts({net}): network too small, no host addresses");
        return AddrIter::empty();
    }
    on_family!(net, n => AddrIter::from(host_cursor(n)))
}

fn child_cursor<B: AddrBits>(net: Net<B>, new_prefix: u8) -> StepCursor<B> {
    // a /0 child of a /0 has a stride of 2^BITS, which reads as zero: emitted once
    let stride = B::pow2(u32::from(B::BITS - new_prefix));
    StepCursor::ascending(net.first(), stride, net.last())
}

fn address_cursor<B: AddrBits>(net: Net<B>) -> StepCursor<B> {
    StepCursor::ascending(net.first(), B::ONE, net.last())
}

fn host_cursor<B: AddrBits>(net: Net<B>) -> StepCursor<B> {
    StepCursor::ascending(
        net.first().wrapping_add(B::ONE),
        B::ONE,
        net.last().wrapping_sub(B::ONE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> IpNetwork {
        IpNetwork::new(s).unwrap()
    }

    fn strings<T: ToString>(items: impl Iterator<Item = T>) -> Vec<String> {
        items.map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_split_v4() {
        assert_eq!(
            strings(split(net("10.0.0.0/24"), 26)),
            vec!["10.0.0.0/26", "10.0.0.64/26", "10.0.0.128/26", "10.0.0.192/26"]
        );
    }

    #[test]
    fn test_split_v6() {
        assert_eq!(
            strings(split(net("::/24"), 26)),
            vec!["::/26", "0:40::/26", "0:80::/26", "0:c0::/26"]
        );
    }

    #[test]
    fn test_split_same_prefix() {
        assert_eq!(strings(split(net("10.0.0.0/24"), 24)), vec!["10.0.0.0/24"]);
        assert_eq!(strings(split(net("0.0.0.0/0"), 0)), vec!["0.0.0.0/0"]);
        assert_eq!(strings(split(net("::/0"), 0)), vec!["::/0"]);
    }

    #[test]
    fn test_split_to_hosts() {
        assert_eq!(
            strings(split(net("10.0.0.0/30"), 32)),
            vec!["10.0.0.0/32", "10.0.0.1/32", "10.0.0.2/32", "10.0.0.3/32"]
        );
    }

    #[test]
    fn test_split_top_of_space() {
        assert_eq!(
            strings(split(net("255.255.255.0/24"), 25)),
            vec!["255.255.255.0/25", "255.255.255.128/25"]
        );
        assert_eq!(split(net("ffff::/16"), 20).count(), 16);
    }

    #[test]
    fn test_split_ignores_host_bits() {
        assert_eq!(
            strings(split(net("10.0.0.77/24"), 25)),
            vec!["10.0.0.0/25", "10.0.0.128/25"]
        );
    }

    #[test]
    fn test_split_whole_space_count() {
        assert_eq!(split(net("0.0.0.0/0"), 8).count(), 256);
        assert_eq!(split(net("::/0"), 4).count(), 16);
    }

    #[test]
    #[should_panic(expected = "must be in [24, 32] but got 23")]
    fn test_split_shorter_prefix_panics() {
        split(net("10.0.0.0/24"), 23);
    }

    #[test]
    #[should_panic(expected = "must be in [24, 32] but got 33")]
    fn test_split_beyond_width_panics() {
        split(net("10.0.0.0/24"), 33);
    }

    #[test]
    fn test_addresses() {
        assert_eq!(
            strings(addresses(net("10.0.0.0/30"))),
            vec!["10.0.0.0", "10.0.0.1", "10.0.0.2", "10.0.0.3"]
        );
        assert_eq!(strings(addresses(net("10.0.0.9/32"))), vec!["10.0.0.9"]);
        assert_eq!(
            strings(addresses(net("255.255.255.254/31"))),
            vec!["255.255.255.254", "255.255.255.255"]
        );
        assert_eq!(addresses(net("2001:db8::/120")).count(), 256);
    }

    #[test]
    fn test_hosts() {
        assert_eq!(
            strings(hosts(net("10.0.0.0/29"))),
            vec!["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5", "10.0.0.6"]
        );
        assert_eq!(
            strings(hosts(net("::/125"))),
            vec!["::1", "::2", "::3", "::4", "::5", "::6"]
        );
        assert_eq!(strings(hosts(net("10.0.0.0/30"))), vec!["10.0.0.1", "10.0.0.2"]);
        assert_eq!(hosts(net("10.0.0.0/24")).count(), 254);
    }

    #[test]
    fn test_hosts_degenerate_sizes() {
        assert_eq!(hosts(net("10.0.0.0/31")).count(), 0);
        assert_eq!(hosts(net("10.0.0.0/32")).count(), 0);
        assert_eq!(hosts(net("2001:db8::/127")).count(), 0);
        assert_eq!(hosts(net("2001:db8::/128")).count(), 0);
    }

    #[test]
    fn test_iterators_restart() {
        let first: Vec<_> = hosts(net("10.0.0.0/29")).collect();
        let again: Vec<_> = hosts(net("10.0.0.0/29")).collect();
        assert_eq!(first, again);
    }
}
