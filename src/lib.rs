//! Set algebra on IPv4 and IPv6 networks.
//!
//! Merge networks into a minimal set ([`collapse`]), remove one network from
//! another ([`exclude`]), cover an address range with networks
//! ([`summarize_range`]) and enumerate networks lazily ([`split`],
//! [`addresses`], [`hosts`], [`iter_ips`], [`iter_nets`]).
//!
//! Every algorithm is written once over the [`AddrBits`] width policy and
//! runs on `u32` for IPv4 and [`Uint128`] for IPv6.
//!
//! Text and byte input is validated and reported as [`AddrError`]. Calls
//! that break an operation's contract, such as comparing addresses of
//! different families or splitting to a prefix shorter than the network's
//! own, panic.
//!
//! # Module Structure
//!
//! - [`models`] - address space model: [`Uint128`], [`AddrBits`], [`IpNetwork`]
//! - [`processing`] - the set algorithms and iterators
//! - [`output`] - terminal listings, JSON and reverse DNS names
//! - [`input`] - reading networks from free-form text
//! - [`config`], [`logging`], [`cli`] - the `subnet-algebra` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::AddrError;
pub use models::{AddrBits, IpNetwork, Net, Uint128};
pub use output::reverse_pointer;
pub use processing::{
    addresses, broadcast, cmp_ip, cmp_net, collapse, exclude, hosts, incr_ip, incr_net,
    is_subnet, is_supernet, iter_ips, iter_nets, net_to_range, split, summarize_range, supernet,
    AddrIter, NetIter, StepCursor,
};
