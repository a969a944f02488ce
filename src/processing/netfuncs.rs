//! Small helpers on single networks and addresses: supernets, broadcast
//! addresses, containment checks, comparison and stepping.

use crate::models::{on_family, AddrBits, IpNetwork, Net, Uint128};
use std::cmp::Ordering;
use std::net::IpAddr;

/// The network of prefix `new_prefix` that contains `net`, or `None` if
/// `new_prefix` is longer than `net`'s own prefix.
pub fn supernet(net: IpNetwork, new_prefix: u8) -> Option<IpNetwork> {
    if new_prefix > net.prefix {
        return None;
    }
    Some(on_family!(net, n => IpNetwork::from(Net::new(n.addr, new_prefix).normalized())))
}

/// The last address of `net`.
pub fn broadcast(net: IpNetwork) -> IpAddr {
    net.hi()
}

/// Whether `b` is a subnet of `a`: same family, `a` holds `b`'s base
/// address and `b`'s prefix is at least as long as `a`'s.
pub fn is_subnet(a: IpNetwork, b: IpNetwork) -> bool {
    a.same_family(&b) && a.prefix <= b.prefix && a.contains(b.addr)
}

/// Whether `b` is a supernet of `a`.
pub fn is_supernet(a: IpNetwork, b: IpNetwork) -> bool {
    is_subnet(b, a)
}

/// Numeric comparison of two addresses.
///
/// # Panics
/// If the addresses belong to different families.
pub fn cmp_ip(a: IpAddr, b: IpAddr) -> Ordering {
    match (a, b) {
        (IpAddr::V4(x), IpAddr::V4(y)) => x.cmp(&y),
        (IpAddr::V6(x), IpAddr::V6(y)) => x.cmp(&y),
        _ => panic!("IP versions must be the same: {a} and {b}"),
    }
}

/// Compare two networks by address only, ignoring the prefix.
///
/// # Panics
/// If the networks belong to different families.
pub fn cmp_net(a: IpNetwork, b: IpNetwork) -> Ordering {
    cmp_ip(a.addr, b.addr)
}

/// The address `incr` positions away from `addr`, wrapping around the
/// address space.
pub fn incr_ip(addr: IpAddr, incr: i64) -> IpAddr {
    match addr {
        IpAddr::V4(a) => step_wrapping(u32::from(a), incr, 0).to_ip(),
        IpAddr::V6(a) => step_wrapping(Uint128::from(a), incr, 0).to_ip(),
    }
}

/// The network `incr` networks of the same prefix away from `net`, wrapping
/// around the address space. Host bits are cleared.
pub fn incr_net(net: IpNetwork, incr: i64) -> IpNetwork {
    let suffix = u32::from(net.max_prefix() - net.prefix);
    on_family!(net, n => IpNetwork::from(Net::new(step_wrapping(n.first(), incr, suffix), n.prefix)))
}

/// First and last address of `net`.
pub fn net_to_range(net: IpNetwork) -> (IpAddr, IpAddr) {
    (net.lo(), net.hi())
}

/// Add `incr` to `value` counted in units of `2^suffix`, wrapping.
fn step_wrapping<B: AddrBits>(value: B, incr: i64, suffix: u32) -> B {
    let delta = B::from_u64_wrapping(incr.unsigned_abs());
    let units = value.shr_bits(suffix);
    let moved = if incr >= 0 {
        units.wrapping_add(delta)
    } else {
        units.wrapping_sub(delta)
    };
    moved.shl_bits(suffix)
}
