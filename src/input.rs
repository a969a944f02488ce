//! Reading networks and addresses from free-form text.
//!
//! Entries may be separated by whitespace, commas or semicolons; anything
//! after a `#` up to the end of the line is a comment.

use crate::error::AddrError;
use crate::models::IpNetwork;
use regex::Regex;
use std::error::Error;
use std::io::{self, Read};
use std::net::IpAddr;
use std::sync::OnceLock;

static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[\s,;]+").expect("Invalid Regex"))
}

/// Split `text` into entries, dropping comments and empty pieces.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(content, _)| content))
        .flat_map(|content| get_separator_regex().split(content))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse every entry of `text` as a network; bare addresses become
/// single-address networks.
///
/// # Errors
/// The first entry that does not parse.
pub fn parse_networks(text: &str) -> Result<Vec<IpNetwork>, AddrError> {
    tokenize(text).into_iter().map(IpNetwork::new).collect()
}

/// Parse every entry of `text` as a plain address.
///
/// # Errors
/// The first entry that is not an address.
pub fn parse_addresses(text: &str) -> Result<Vec<IpAddr>, AddrError> {
    tokenize(text)
        .into_iter()
        .map(|token| {
            token
                .parse()
                .map_err(|_| AddrError::InvalidAddress(token.to_string()))
        })
        .collect()
}

/// Read the whole input named by `path`; `-` reads standard input.
pub fn read_source(path: &str) -> Result<String, Box<dyn Error>> {
    if path == "-" {
        log::debug!("reading input from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    log::debug!("reading input from {path}");
    std::fs::read_to_string(path).map_err(|e| format!("Error reading input file {path}: {e}").into())
}
