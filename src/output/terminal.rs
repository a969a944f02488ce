//! Terminal output: numbered, column-aligned listings with optional colors.

use crate::models::IpNetwork;
use colored::{Color, Colorize};
use std::fmt;
use std::io::{self, Write};
use std::net::IpAddr;

/// Quote `value` and right-align it in a column of `width`. Wider values
/// are kept whole, the column just grows for that row.
pub fn format_field<T: fmt::Display>(value: T, width: usize) -> String {
    format!("{:>width$}", format!("\"{value}\""))
}

/// Colors an already padded field, so escape codes never count towards
/// the width.
fn paint(field: String, color: Color, enabled: bool) -> String {
    if enabled {
        field.color(color).to_string()
    } else {
        field
    }
}

/// Write networks as rows of counter, network, first and last address.
pub fn write_networks<W: Write>(out: &mut W, nets: &[IpNetwork], color: bool) -> io::Result<()> {
    writeln!(
        out,
        r#" "cnt",              "network",              "first",               "last""#
    )?;
    for (i, net) in nets.iter().enumerate() {
        writeln!(
            out,
            "{cnt},{network},{first},{last}",
            cnt = format_field(i + 1, 6),
            network = paint(format_field(net, 22), Color::Green, color),
            first = format_field(net.lo(), 22),
            last = format_field(net.hi(), 22),
        )?;
    }
    Ok(())
}

/// Write one address per numbered row.
pub fn write_addresses<W: Write>(out: &mut W, addrs: &[IpAddr], color: bool) -> io::Result<()> {
    writeln!(out, r#" "cnt",              "address""#)?;
    for (i, addr) in addrs.iter().enumerate() {
        writeln!(
            out,
            "{cnt},{addr}",
            cnt = format_field(i + 1, 6),
            addr = paint(format_field(addr, 22), Color::Cyan, color),
        )?;
    }
    Ok(())
}

/// Write address and reverse DNS name pairs.
pub fn write_pointers<W: Write>(
    out: &mut W,
    records: &[(IpAddr, String)],
    color: bool,
) -> io::Result<()> {
    writeln!(out, r#" "cnt",              "address",  "pointer""#)?;
    for (i, (addr, name)) in records.iter().enumerate() {
        writeln!(
            out,
            "{cnt},{addr},{name}",
            cnt = format_field(i + 1, 6),
            addr = paint(format_field(addr, 22), Color::Cyan, color),
            name = format_field(name, 0),
        )?;
    }
    Ok(())
}

/// Line telling the reader that a listing was cut short.
pub fn truncation_notice(shown: usize, color: bool) -> String {
    let tag = if color {
        "NOTE".on_red().to_string()
    } else {
        "NOTE".to_string()
    };
    format!("#{tag}# output limited to {shown} entries, raise --limit to see more")
}
