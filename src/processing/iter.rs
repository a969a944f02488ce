//! Bounded stepping over addresses and networks.
//!
//! [`StepCursor`] walks `v, v+step, v+2·step, …` up to an inclusive bound and
//! never wraps: once the next step would cross the top (or bottom) of the
//! address space the cursor is exhausted. [`AddrIter`] and [`NetIter`] put a
//! family-independent face on it; split, addresses and hosts are built on
//! the same cursor.

use crate::models::{AddrBits, IpNetwork, Uint128};
use std::iter::FusedIterator;
use std::net::IpAddr;

/// Cursor state: current value, stride, inclusive bound and direction.
///
/// A cursor is advanced in place and owned by one caller; clone it to keep a
/// restart point.
#[derive(Debug, Clone)]
pub struct StepCursor<B> {
    current: B,
    step: B,
    last: B,
    descending: bool,
    done: bool,
}

impl<B: AddrBits> StepCursor<B> {
    /// Yields `start, start+step, …` while the value is `<= last`.
    /// A zero step yields `start` once.
    pub fn ascending(start: B, step: B, last: B) -> StepCursor<B> {
        StepCursor {
            current: start,
            step,
            last,
            descending: false,
            done: start > last,
        }
    }

    /// Yields `start, start-step, …` while the value is `>= last`.
    /// A zero step yields `start` once.
    pub fn descending(start: B, step: B, last: B) -> StepCursor<B> {
        StepCursor {
            current: start,
            step,
            last,
            descending: true,
            done: start < last,
        }
    }

    pub fn empty() -> StepCursor<B> {
        StepCursor {
            current: B::ZERO,
            step: B::ZERO,
            last: B::ZERO,
            descending: false,
            done: true,
        }
    }

    /// Emit the current value and move one step, or `None` once exhausted.
    pub fn advance(&mut self) -> Option<B> {
        if self.done {
            return None;
        }
        let value = self.current;
        let next = if self.descending {
            value.wrapping_sub(self.step)
        } else {
            value.wrapping_add(self.step)
        };
        // a wrapped or unchanged value means the step left the address space
        let stalled = if self.descending {
            next >= value || next < self.last
        } else {
            next <= value || next > self.last
        };
        if stalled {
            self.done = true;
        } else {
            self.current = next;
        }
        Some(value)
    }
}

impl<B: AddrBits> Iterator for StepCursor<B> {
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.advance()
    }
}

impl<B: AddrBits> FusedIterator for StepCursor<B> {}

/// Lazy, finite sequence of addresses of one family.
#[derive(Debug, Clone)]
pub enum AddrIter {
    V4(StepCursor<u32>),
    V6(StepCursor<Uint128>),
}

impl AddrIter {
    pub fn empty() -> AddrIter {
        AddrIter::V4(StepCursor::empty())
    }
}

impl From<StepCursor<u32>> for AddrIter {
    fn from(cursor: StepCursor<u32>) -> Self {
        AddrIter::V4(cursor)
    }
}

impl From<StepCursor<Uint128>> for AddrIter {
    fn from(cursor: StepCursor<Uint128>) -> Self {
        AddrIter::V6(cursor)
    }
}

impl Iterator for AddrIter {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        match self {
            AddrIter::V4(cursor) => cursor.advance().map(AddrBits::to_ip),
            AddrIter::V6(cursor) => cursor.advance().map(AddrBits::to_ip),
        }
    }
}

impl FusedIterator for AddrIter {}

/// Lazy, finite sequence of same-prefix networks.
#[derive(Debug, Clone)]
pub struct NetIter {
    addrs: AddrIter,
    prefix: u8,
}

impl NetIter {
    pub(crate) fn new(addrs: AddrIter, prefix: u8) -> NetIter {
        NetIter { addrs, prefix }
    }

    pub fn empty() -> NetIter {
        NetIter::new(AddrIter::empty(), 0)
    }
}

impl Iterator for NetIter {
    type Item = IpNetwork;

    fn next(&mut self) -> Option<IpNetwork> {
        let addr = self.addrs.next()?;
        Some(IpNetwork {
            addr,
            prefix: self.prefix,
        })
    }
}

impl FusedIterator for NetIter {}

/// Iterate addresses from `start` in increments of `step` over `[start, end)`.
///
/// A negative `step` walks downwards and `end` must then lie below `start`.
/// Without an `end` the walk stops short of the family maximum (ascending)
/// or of zero (descending). A zero step, an `end` of the other family or an
/// `end` on the wrong side of `start` gives an empty iterator.
pub fn iter_ips(start: IpAddr, step: i64, end: Option<IpAddr>) -> AddrIter {
    match start {
        IpAddr::V4(a) => resolve::<u32>(u32::from(a), step, end, 0)
            .map(AddrIter::from)
            .unwrap_or_else(AddrIter::empty),
        IpAddr::V6(a) => resolve::<Uint128>(Uint128::from(a), step, end, 0)
            .map(AddrIter::from)
            .unwrap_or_else(AddrIter::empty),
    }
}

/// Iterate networks of `start`'s prefix, `step` networks at a time, over
/// `[start, end)`. Host bits of `start` and `end` are ignored. Same rules as
/// [`iter_ips`]; an `end` with a different prefix gives an empty iterator.
pub fn iter_nets(start: IpNetwork, step: i64, end: Option<IpNetwork>) -> NetIter {
    if end.is_some_and(|e| e.prefix != start.prefix) {
        return NetIter::empty();
    }
    let start = start.trunc();
    let end_addr = end.map(|e| e.trunc().addr);
    let suffix = u32::from(start.max_prefix() - start.prefix);
    let addrs = match start.addr {
        IpAddr::V4(a) => resolve::<u32>(u32::from(a), step, end_addr, suffix).map(AddrIter::from),
        IpAddr::V6(a) => {
            resolve::<Uint128>(Uint128::from(a), step, end_addr, suffix).map(AddrIter::from)
        }
    };
    match addrs {
        Some(addrs) => NetIter::new(addrs, start.prefix),
        None => NetIter::empty(),
    }
}

/// Turn a signed step and an exclusive end into a cursor, `None` when the
/// walk is empty.
fn resolve<B: AddrBits>(
    start: B,
    step: i64,
    end: Option<IpAddr>,
    shift: u32,
) -> Option<StepCursor<B>> {
    if step == 0 {
        return None;
    }
    let end = match end {
        Some(e) => Some(B::from_ip(e)?),
        None => None,
    };
    // a stride wider than the address space can only ever emit `start`
    let stride = B::checked_from_u64(step.unsigned_abs())
        .filter(|m| m.shl_bits(shift).shr_bits(shift) == *m)
        .map(|m| m.shl_bits(shift))
        .unwrap_or(B::ZERO);
    if step > 0 {
        let end = end.unwrap_or(B::MAX);
        if end <= start {
            return None;
        }
        Some(StepCursor::ascending(start, stride, end.wrapping_sub(B::ONE)))
    } else {
        let end = end.unwrap_or(B::ZERO);
        if end >= start {
            return None;
        }
        Some(StepCursor::descending(start, stride, end.wrapping_add(B::ONE)))
    }
}
