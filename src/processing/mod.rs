//! The set algorithms over networks and address ranges.
//!
//! - [`collapse`] - merging networks into a minimal disjoint set
//! - [`exclude`] - removing one network from another
//! - [`summarize_range`] - covering an address range with networks
//! - [`split`], [`addresses`], [`hosts`] - enumerating a network
//! - [`iter_ips`], [`iter_nets`] - bounded stepping over addresses and networks
//! - [`supernet`], [`is_subnet`], [`cmp_ip`], [`incr_net`] and friends - single-network helpers

mod collapse;
mod exclude;
mod iter;
mod netfuncs;
mod split;
mod summarize;

pub use collapse::collapse;
pub use exclude::exclude;
pub use iter::{iter_ips, iter_nets, AddrIter, NetIter, StepCursor};
pub use netfuncs::{
    broadcast, cmp_ip, cmp_net, incr_ip, incr_net, is_subnet, is_supernet, net_to_range, supernet,
};
pub use split::{addresses, hosts, split};
pub use summarize::summarize_range;
