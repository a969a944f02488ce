//! Reverse DNS names.

use itertools::Itertools;
use std::net::{IpAddr, Ipv4Addr};

/// Name of the reverse DNS PTR record for `addr`.
///
/// IPv4 addresses, and IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`), map
/// to `d.c.b.a.in-addr.arpa`; other IPv6 addresses to their 32 nibbles in
/// reverse order under `ip6.arpa`.
///
/// # Examples
/// ```
/// use subnet_algebra::reverse_pointer;
/// assert_eq!(reverse_pointer("192.168.0.10".parse().unwrap()), "10.0.168.192.in-addr.arpa");
/// ```
pub fn reverse_pointer(addr: IpAddr) -> String {
    match addr {
        IpAddr::V4(a) => in_addr_arpa(a),
        IpAddr::V6(a) => match a.to_ipv4_mapped() {
            Some(four) => in_addr_arpa(four),
            None => {
                let nibbles = a
                    .octets()
                    .iter()
                    .rev()
                    .flat_map(|b| [b & 0x0f, b >> 4])
                    .map(|n| format!("{n:x}"))
                    .join(".");
                format!("{nibbles}.ip6.arpa")
            }
        },
    }
}

fn in_addr_arpa(addr: Ipv4Addr) -> String {
    format!("{}.in-addr.arpa", addr.octets().iter().rev().join("."))
}
