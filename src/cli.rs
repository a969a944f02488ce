//! Command line interface of the `subnet-algebra` binary.
//!
//! Parsing is done by clap; [`run`] executes a parsed command against any
//! writer so it can be tested without a terminal.

use crate::config::Config;
use crate::error::AddrError;
use crate::input;
use crate::models::IpNetwork;
use crate::output::{self, PtrRecord};
use crate::processing::{addresses, collapse, exclude, hosts, split, summarize_range};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Write;
use std::net::IpAddr;

/// Set operations on IPv4 and IPv6 networks.
#[derive(Parser, Debug)]
#[command(name = "subnet-algebra")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print results as a JSON array
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors (also honours NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum number of entries printed by split, addresses and hosts
    /// [env: SUBNET_ALGEBRA_LIMIT, default 65536]
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge networks into the smallest equivalent set
    Collapse {
        /// Networks in CIDR notation; bare addresses are single hosts
        networks: Vec<String>,

        /// Also read networks from a file, `-` for stdin
        #[arg(short, long, value_name = "PATH")]
        file: Option<String>,
    },

    /// Remove one network from another
    Exclude {
        /// The network to remove from
        network: String,
        /// The network to remove
        remove: String,
    },

    /// Cover an inclusive address range with networks
    Summarize { first: String, last: String },

    /// Split a network into equal subnets of a longer prefix
    Split { network: String, prefix: u8 },

    /// List every address of a network
    Addresses { network: String },

    /// List the host addresses of a network
    Hosts { network: String },

    /// Reverse DNS names for addresses
    Ptr {
        addresses: Vec<String>,

        /// Also read addresses from a file, `-` for stdin
        #[arg(short, long, value_name = "PATH")]
        file: Option<String>,
    },
}

/// Settings that apply to every command once CLI flags and the
/// environment are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Render {
    json: bool,
    color: bool,
    limit: usize,
}

/// Execute `cli`, writing results to `out`.
///
/// # Errors
/// Input that does not parse, mismatched address families where one family
/// is required, an invalid split prefix, or a failing writer.
pub fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<(), Box<dyn Error>> {
    let render = Render {
        json: cli.json,
        color: config.color && !cli.no_color,
        limit: cli.limit.unwrap_or(config.limit),
    };
    log::debug!("run({:?}) with {:?}", cli.command, render);

    match &cli.command {
        Command::Collapse { networks, file } => {
            let mut nets = networks
                .iter()
                .map(|n| IpNetwork::new(n))
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(path) = file {
                nets.extend(input::parse_networks(&input::read_source(path)?)?);
            }
            log::info!("collapse {} networks", nets.len());
            emit_networks(out, &collapse(&nets), render)
        }
        Command::Exclude { network, remove } => {
            let (a, b) = (IpNetwork::new(network)?, IpNetwork::new(remove)?);
            emit_networks(out, &exclude(a, b), render)
        }
        Command::Summarize { first, last } => {
            let (first, last) = (parse_addr(first)?, parse_addr(last)?);
            if first.is_ipv4() != last.is_ipv4() {
                return Err(AddrError::FamilyMismatch(first.to_string(), last.to_string()).into());
            }
            emit_networks(out, &summarize_range(first, last), render)
        }
        Command::Split { network, prefix } => {
            let net = IpNetwork::new(network)?;
            if *prefix < net.prefix || *prefix > net.max_prefix() {
                return Err(format!(
                    "Split prefix /{prefix} must be in [{}, {}] for {net}",
                    net.prefix,
                    net.max_prefix()
                )
                .into());
            }
            let (nets, truncated) = take_limited(split(net, *prefix), render.limit);
            emit_networks(out, &nets, render)?;
            notify_truncated(&mut std::io::stderr(), truncated, nets.len(), render);
            Ok(())
        }
        Command::Addresses { network } => {
            let (addrs, truncated) = take_limited(addresses(IpNetwork::new(network)?), render.limit);
            emit_addresses(out, &addrs, render)?;
            notify_truncated(&mut std::io::stderr(), truncated, addrs.len(), render);
            Ok(())
        }
        Command::Hosts { network } => {
            let (addrs, truncated) = take_limited(hosts(IpNetwork::new(network)?), render.limit);
            emit_addresses(out, &addrs, render)?;
            notify_truncated(&mut std::io::stderr(), truncated, addrs.len(), render);
            Ok(())
        }
        Command::Ptr { addresses, file } => {
            let mut addrs = addresses
                .iter()
                .map(|a| parse_addr(a))
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(path) = file {
                addrs.extend(input::parse_addresses(&input::read_source(path)?)?);
            }
            let records: Vec<PtrRecord> = addrs
                .into_iter()
                .map(|address| PtrRecord {
                    address,
                    pointer: output::reverse_pointer(address),
                })
                .collect();
            if render.json {
                output::write_json(out, &records)
            } else {
                let pairs: Vec<(IpAddr, String)> =
                    records.into_iter().map(|r| (r.address, r.pointer)).collect();
                Ok(output::write_pointers(out, &pairs, render.color)?)
            }
        }
    }
}

fn parse_addr(text: &str) -> Result<IpAddr, AddrError> {
    text.trim()
        .parse()
        .map_err(|_| AddrError::InvalidAddress(text.to_string()))
}

/// Collect at most `limit` items; the flag tells whether more were left.
fn take_limited<I: Iterator>(mut iter: I, limit: usize) -> (Vec<I::Item>, bool) {
    let items: Vec<I::Item> = iter.by_ref().take(limit).collect();
    let truncated = iter.next().is_some();
    (items, truncated)
}

fn emit_networks<W: Write>(out: &mut W, nets: &[IpNetwork], render: Render) -> Result<(), Box<dyn Error>> {
    if render.json {
        output::write_json(out, nets)
    } else {
        Ok(output::write_networks(out, nets, render.color)?)
    }
}

fn emit_addresses<W: Write>(out: &mut W, addrs: &[IpAddr], render: Render) -> Result<(), Box<dyn Error>> {
    if render.json {
        output::write_json(out, addrs)
    } else {
        Ok(output::write_addresses(out, addrs, render.color)?)
    }
}

/// One notice line on `err` when the listing was cut short.
fn notify_truncated<E: Write>(err: &mut E, truncated: bool, shown: usize, render: Render) {
    if truncated {
        log::debug!("Output truncated after {shown} entries");
        if let Err(e) = writeln!(err, "{}", output::truncation_notice(shown, render.color)) {
            log::error!("Failed to write truncation notice: {e}");
        }
    }
}
