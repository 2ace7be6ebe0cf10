// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Well-known address blocks used for classification.

use ipnet::{Ipv4Net, Ipv6Net};
use lazy_static::lazy_static;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Inclusive range of IPv4 addresses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Range {
    pub beg: u32,
    /// inclusive
    pub end: u32,
}

impl Range {
    #[inline]
    pub fn contains(&self, val: u32) -> bool {
        self.beg <= val && val <= self.end
    }
}

impl From<Ipv4Net> for Range {
    fn from(net: Ipv4Net) -> Self {
        Range {
            beg: u32::from(net.network()),
            end: u32::from(net.broadcast()),
        }
    }
}

#[rustfmt::skip]
const PRIVATE_V4: [(Ipv4Addr, u8); 3] = [
    (Ipv4Addr::new(10, 0, 0, 0), 8),            // RFC 1918
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

#[rustfmt::skip]
const RESERVED_V4: [(Ipv4Addr, u8); 4] = [
    (Ipv4Addr::new(0, 0, 0, 0), 8),             // "this" network
    (Ipv4Addr::new(127, 0, 0, 0), 8),           // loopback
    (Ipv4Addr::new(224, 0, 0, 0), 4),           // multicast
    (Ipv4Addr::new(240, 0, 0, 0), 4),           // future use + limited broadcast
];

const LOOPBACK_OCTET: u8 = 127;
const MULTICAST_OCTETS: std::ops::RangeInclusive<u8> = 224..=239;

// Built once per program execution, read-only afterwards.
lazy_static! {
    static ref PRIVATE_RANGES: Vec<Range> = to_ranges(&PRIVATE_V4);
    static ref RESERVED_RANGES: Vec<Range> = to_ranges(&RESERVED_V4);
    static ref V6_LINK_LOCAL: Option<Ipv6Net> =
        Ipv6Net::new(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0), 10).ok();
    static ref V6_UNIQUE_LOCAL: Option<Ipv6Net> =
        Ipv6Net::new(Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 0), 7).ok();
    static ref V6_MULTICAST: Option<Ipv6Net> =
        Ipv6Net::new(Ipv6Addr::new(0xff00, 0, 0, 0, 0, 0, 0, 0), 8).ok();
}

fn to_ranges(table: &[(Ipv4Addr, u8)]) -> Vec<Range> {
    table
        .iter()
        .filter_map(|&(addr, prefix)| Ipv4Net::new(addr, prefix).ok())
        .map(Range::from)
        .collect()
}

#[inline]
fn in_table(table: &[Range], val: u32) -> bool {
    table.iter().any(|r| r.contains(val))
}

#[inline]
fn first_octet(val: u32) -> u8 {
    val.to_be_bytes()[0]
}

/* ---------------------------------- */

pub(crate) fn is_private_v4(val: u32) -> bool {
    in_table(&PRIVATE_RANGES, val)
}

pub(crate) fn is_reserved_v4(val: u32) -> bool {
    in_table(&RESERVED_RANGES, val)
}

pub(crate) fn is_loopback_v4(val: u32) -> bool {
    first_octet(val) == LOOPBACK_OCTET
}

pub(crate) fn is_multicast_v4(val: u32) -> bool {
    MULTICAST_OCTETS.contains(&first_octet(val))
}

/* ---------------------------------- */

#[inline]
fn in_net(net: &Option<Ipv6Net>, addr: &Ipv6Addr) -> bool {
    net.as_ref().is_some_and(|n| n.contains(addr))
}

/// `fe80::/10`
pub(crate) fn is_link_local_v6(addr: &Ipv6Addr) -> bool {
    in_net(&V6_LINK_LOCAL, addr)
}

/// `fc00::/7`, i.e. both the `fc00:` and `fd00:` prefixes.
pub(crate) fn is_unique_local_v6(addr: &Ipv6Addr) -> bool {
    in_net(&V6_UNIQUE_LOCAL, addr)
}

pub(crate) fn is_multicast_v6(addr: &Ipv6Addr) -> bool {
    in_net(&V6_MULTICAST, addr)
}

pub(crate) fn is_loopback_v6(addr: &Ipv6Addr) -> bool {
    *addr == Ipv6Addr::LOCALHOST
}

/* -------------------------------------------------------------------------- */
