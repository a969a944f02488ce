//! JSON output through serde_json.

use serde::Serialize;
use std::error::Error;
use std::io::Write;
use std::net::IpAddr;

/// An address with its reverse DNS name, as emitted by the `ptr` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PtrRecord {
    pub address: IpAddr,
    pub pointer: String,
}

/// Write `items` as a pretty-printed JSON array followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, items: &[T]) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, items)?;
    writeln!(out)?;
    Ok(())
}
