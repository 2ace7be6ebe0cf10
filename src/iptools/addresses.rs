// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, structs::IpFam, AddressError, IPV4_OCTETS, IPV6_GROUPS};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

// Compiled once per program execution.
lazy_static! {
    /// Four dot-separated groups of 1-3 ASCII digits. Leading zeros are allowed.
    static ref RE_IPV4: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("IPv4 regex must compile");
    static ref RE_HEXTET: Regex =
        Regex::new(r"^[0-9a-fA-F]{1,4}$").expect("hextet regex must compile");
}

/**
Parse a dotted-quad IPv4 literal into its big-endian `u32` form.

Each of the four segments must be 1-3 decimal digits with a value in
`0..=255`. Leading zeros are accepted, so `192.168.001.1` parses to the
same value as `192.168.1.1`. No surrounding whitespace is tolerated.
*/
pub fn parse_ipv4(ip: impl AsRef<str>) -> Result<u32, AddressError> {
    let ip: &str = ip.as_ref();
    let caps = RE_IPV4
        .captures(ip)
        .ok_or_else(|| AddressError::InvalidV4(ip.to_string()))?;

    let mut octets: [u8; IPV4_OCTETS] = [0; IPV4_OCTETS];
    for (i, octet) in octets.iter_mut().enumerate() {
        let val: u32 = caps[i + 1]
            .parse()
            .map_err(|_| AddressError::InvalidV4(ip.to_string()))?;
        *octet = u8::try_from(val).map_err(|_| AddressError::InvalidV4Octet(val))?;
    }
    Ok(u32::from_be_bytes(octets))
}

/**
Parse an IPv6 literal into its eight 16-bit groups.

This is a deliberately simplified validator, not a complete RFC 4291
parser:
- `::` may appear at most once and stands for one or more zero groups
- without `::` there must be exactly 8 groups, with it at most 7
- each group is 1-4 hex digits
- the final group may instead be an embedded IPv4 literal (counts as 2)

Zone identifiers (`%eth0`), brackets and prefixes are rejected.
*/
pub fn parse_ipv6(ip: impl AsRef<str>) -> Result<[u16; IPV6_GROUPS], AddressError> {
    let ip: &str = ip.as_ref();
    let err = || AddressError::InvalidV6(ip.to_string());

    if ip.matches(DCOLON).count() > 1 {
        return Err(err());
    }

    let mut segments: [u16; IPV6_GROUPS] = [0; IPV6_GROUPS];
    match ip.split_once(DCOLON) {
        None => {
            let groups: Vec<u16> = parse_groups(ip, true).ok_or_else(err)?;
            if groups.len() != IPV6_GROUPS {
                return Err(err());
            }
            segments.copy_from_slice(&groups);
        }
        Some((head, tail)) => {
            let head: Vec<u16> = parse_groups(head, false).ok_or_else(err)?;
            let tail: Vec<u16> = parse_groups(tail, true).ok_or_else(err)?;
            if head.len() + tail.len() >= IPV6_GROUPS {
                return Err(err());
            }
            segments[..head.len()].copy_from_slice(&head);
            segments[IPV6_GROUPS - tail.len()..].copy_from_slice(&tail);
        }
    }
    Ok(segments)
}

/// Parse colon-separated groups. An empty string is zero groups.
fn parse_groups(part: &str, v4_tail: bool) -> Option<Vec<u16>> {
    if part.is_empty() {
        return Some(Vec::new());
    }

    let groups: Vec<&str> = part.split(COLON).collect();
    let last: usize = groups.len() - 1;
    let mut out: Vec<u16> = Vec::with_capacity(IPV6_GROUPS);

    for (i, group) in groups.into_iter().enumerate() {
        if i == last && v4_tail && group.contains(DOT) {
            let v4: u32 = parse_ipv4(group).ok()?;
            out.push((v4 >> 16) as u16);
            out.push(v4 as u16);
        } else if RE_HEXTET.is_match(group) {
            out.push(u16::from_str_radix(group, 16).ok()?);
        } else {
            return None;
        }
    }
    Some(out)
}

/// Whether `ip` is a valid dotted-quad IPv4 literal. See [parse_ipv4].
pub fn is_valid_ipv4(ip: impl AsRef<str>) -> bool {
    parse_ipv4(ip).is_ok()
}

/// Whether `ip` is a valid IPv6 literal. See [parse_ipv6].
pub fn is_valid_ipv6(ip: impl AsRef<str>) -> bool {
    parse_ipv6(ip).is_ok()
}

/// Detect the IP family of a literal, trying IPv4 before IPv6.
pub fn detect_version(ip: impl AsRef<str>) -> Result<IpFam, AddressError> {
    let ip: &str = ip.as_ref();
    if is_valid_ipv4(ip) {
        Ok(IpFam::V4)
    } else if is_valid_ipv6(ip) {
        Ok(IpFam::V6)
    } else {
        trace!("not an IP address: '{ip}'");
        Err(AddressError::Invalid(ip.to_string()))
    }
}

/// IP family of a literal, or `None` if it is neither IPv4 nor IPv6.
pub fn get_ip_version(ip: impl AsRef<str>) -> Option<IpFam> {
    detect_version(ip).ok()
}

/* -------------------------------------------------------------------------- */
