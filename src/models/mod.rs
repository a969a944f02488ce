//! Address space model.
//!
//! - [`Uint128`] - two-limb 128-bit unsigned integer with wraparound arithmetic
//! - [`AddrBits`] - width policy implemented for `u32` (IPv4) and [`Uint128`] (IPv6)
//! - [`Net`] - width-generic network used by the set algorithms
//! - [`IpNetwork`] - IPv4 or IPv6 network at the public API boundary

mod bits;
mod net;
mod network;
mod uint128;

// Re-export public types
pub use bits::AddrBits;
pub use net::Net;
pub(crate) use network::on_family;
pub use network::{addr_from_bytes, addr_to_bytes, max_prefix, IpNetwork, IPV4_BITS, IPV6_BITS};
pub use uint128::Uint128;
