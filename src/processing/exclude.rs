//! Removing one network from another.

use super::netfuncs::is_subnet;
use crate::models::{on_family, AddrBits, IpNetwork, Net};

/// The networks left of `a` once `b` is removed from it, largest first.
///
/// When `b` is not a subnet of `a` (other family, or not inside `a`) the
/// result is `[a]` unchanged. Removing a network from itself leaves
/// nothing. Otherwise exactly `b.prefix - a.prefix` networks are returned.
pub fn exclude(a: IpNetwork, b: IpNetwork) -> Vec<IpNetwork> {
    if !is_subnet(a, b) {
        log::debug!("exclude: {b} is not inside {a}, nothing to remove");
        return vec![a];
    }
    log::debug!("exclude({a}, {b})");
    on_family!(a, outer => match Net::from_network(&b) {
        Some(inner) => exclude_family(outer, inner)
            .into_iter()
            .map(IpNetwork::from)
            .collect(),
        None => vec![a],
    })
}

/// Halve `outer` repeatedly towards `inner`, keeping the half that does not
/// hold it. `inner` must be a subnet of `outer`.
fn exclude_family<B: AddrBits>(outer: Net<B>, inner: Net<B>) -> Vec<Net<B>> {
    let inner = inner.normalized();
    let mut current = outer.normalized();
    let mut remainder = Vec::with_capacity(usize::from(inner.prefix - current.prefix));
    while current.prefix < inner.prefix {
        let (lower, upper) = current.children();
        if inner.is_subnet_of(&lower) {
            remainder.push(upper);
            current = lower;
        } else {
            remainder.push(lower);
            current = upper;
        }
    }
    remainder
}
