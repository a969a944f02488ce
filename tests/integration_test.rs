//! Integration tests for subnet-algebra
//!
//! These tests exercise the public API end to end: the set algorithms
//! against each other, the iterators, and serde round trips.

use std::net::IpAddr;
use subnet_algebra::{
    addresses, collapse, exclude, hosts, incr_net, input, is_subnet, iter_nets, net_to_range,
    reverse_pointer, split, summarize_range, IpNetwork,
};

fn net(s: &str) -> IpNetwork {
    IpNetwork::new(s).expect("valid network")
}

fn ip(s: &str) -> IpAddr {
    s.parse().expect("valid address")
}

#[test]
fn test_split_then_collapse_restores_network() {
    for (cidr, prefix) in [("10.20.0.0/16", 20), ("2001:db8::/48", 52), ("0.0.0.0/0", 4)] {
        let original = net(cidr);
        let parts: Vec<IpNetwork> = split(original, prefix).collect();
        assert_eq!(parts.len(), 1usize << (prefix - original.prefix));
        assert_eq!(collapse(&parts), vec![original], "split of {cidr} into /{prefix}");
    }
}

#[test]
fn test_exclude_then_collapse_restores_network() {
    let outer = net("192.168.0.0/16");
    let hole = net("192.168.77.128/27");
    let mut rest = exclude(outer, hole);
    assert_eq!(rest.len(), 11);
    assert!(rest.iter().all(|n| is_subnet(outer, *n)));
    assert!(rest.iter().all(|n| !n.contains(hole.addr)));

    rest.push(hole);
    assert_eq!(collapse(&rest), vec![outer]);
}

#[test]
fn test_summarize_matches_collapse_of_hosts() {
    let (first, last) = (ip("10.0.0.3"), ip("10.0.0.40"));
    let singles: Vec<IpNetwork> = summarize_range(ip("10.0.0.3"), ip("10.0.0.40"))
        .into_iter()
        .flat_map(|n| addresses(n).collect::<Vec<_>>())
        .map(|a| IpNetwork::from_parts(a, 32))
        .collect();
    assert_eq!(singles.len(), 38);
    assert_eq!(singles.first().map(|n| n.addr), Some(first));
    assert_eq!(singles.last().map(|n| n.addr), Some(last));
    assert_eq!(collapse(&singles), summarize_range(first, last));
}

#[test]
fn test_summarize_blocks_are_disjoint_and_cover_range() {
    let blocks = summarize_range(ip("2001:db8::7"), ip("2001:db8::1:2"));
    let mut expected_next = ip("2001:db8::7");
    for block in &blocks {
        let (lo, hi) = net_to_range(*block);
        assert_eq!(lo, expected_next, "gap or overlap before {block}");
        expected_next = subnet_algebra::incr_ip(hi, 1);
    }
    assert_eq!(expected_next, ip("2001:db8::1:3"));
}

#[test]
fn test_hosts_and_addresses_counts() {
    assert_eq!(addresses(net("10.0.0.0/22")).count(), 1024);
    assert_eq!(hosts(net("10.0.0.0/22")).count(), 1022);
    assert_eq!(
        hosts(net("10.0.0.0/29")).map(|a| a.to_string()).collect::<Vec<_>>(),
        vec!["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5", "10.0.0.6"]
    );
}

#[test]
fn test_iter_nets_agrees_with_incr_net() {
    let start = net("172.16.0.0/20");
    let stepped: Vec<IpNetwork> = iter_nets(start, 3, Some(net("172.16.160.0/20"))).collect();
    let mut expected = Vec::new();
    let mut current = start;
    while current < net("172.16.160.0/20") {
        expected.push(current);
        current = incr_net(current, 3);
    }
    assert_eq!(stepped, expected);
    assert_eq!(stepped.len(), 4);
}

#[test]
fn test_collapse_input_file_text() {
    let text = "\
# office ranges
10.1.0.0/24, 10.1.1.0/24
10.1.2.0/23   # lab
2001:db8:0:1::/64; 2001:db8::/64
";
    let nets = input::parse_networks(text).expect("input parses");
    let merged: Vec<String> = collapse(&nets).iter().map(|n| n.to_string()).collect();
    assert_eq!(merged, vec!["10.1.0.0/22", "2001:db8::/63"]);
}

#[test]
fn test_serde_round_trip() {
    let nets = collapse(&[net("10.0.0.0/25"), net("10.0.0.128/25"), net("fd00::/8")]);
    let json = serde_json::to_string(&nets).expect("serializes");
    assert_eq!(json, r#"["10.0.0.0/24","fd00::/8"]"#);
    let back: Vec<IpNetwork> = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, nets);
}

#[test]
fn test_reverse_pointer_of_split_hosts() {
    let names: Vec<String> = split(net("192.0.2.0/30"), 32)
        .map(|n| reverse_pointer(n.addr))
        .collect();
    assert_eq!(names[3], "3.2.0.192.in-addr.arpa");
}
