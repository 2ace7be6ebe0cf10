// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    addresses::{is_valid_ipv6, parse_ipv4},
    codec::integer_to_ip,
    strings::*,
    structs::CidrBlock,
    AddressError, IPV4_BITS,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

lazy_static! {
    static ref RE_PREFIX: Regex = Regex::new(r"^[0-9]{1,3}$").expect("prefix regex must compile");
}

/**
Parse IPv4 CIDR notation (`a.b.c.d/n`) and compute the subnet it describes.

Never fails: on bad input the returned block has `is_valid == false`, a
human-readable `error`, empty address strings and zeroed numbers. Use
`str::parse::<CidrBlock>()` for a [Result] instead.

The address may have host bits set (`192.168.1.77/24`); they are masked off.
Surrounding whitespace around either half is ignored.
*/
pub fn parse_cidr(cidr: impl AsRef<str>) -> CidrBlock {
    match cidr_block(cidr.as_ref()) {
        Ok(block) => block,
        Err(e) => {
            debug!("rejected CIDR: {e}");
            CidrBlock::invalid(&e)
        }
    }
}

/**
Compute a [CidrBlock] for IPv4 CIDR notation, or say why that's impossible.

The usable host range is `network + 1 ..= broadcast - 1`, and the host count
is that range's length clamped at zero. No special handling exists for
`/31` and `/32`: their `first_host` sorts after `last_host`, and host count
is 0. Addresses wrap modulo 2^32, so `0.0.0.0/32` has last host
`255.255.255.255`.
*/
pub(crate) fn cidr_block(s: &str) -> Result<CidrBlock, AddressError> {
    let parts: Vec<&str> = s.split(SLASH).map(str::trim).collect();
    if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
        return Err(AddressError::InvalidCidrFmt(s.to_string()));
    }
    let (addr, prefix) = (parts[0], parts[1]);

    let ip: u32 = parse_ipv4(addr).map_err(|_| match is_valid_ipv6(addr) {
        true => AddressError::NotIpv4(addr.to_string()),
        false => AddressError::InvalidCidrAddr(addr.to_string()),
    })?;

    if !RE_PREFIX.is_match(prefix) {
        return Err(AddressError::InvalidPrefix(prefix.to_string()));
    }
    let prefix: u32 = prefix
        .parse()
        .map_err(|_| AddressError::InvalidPrefix(prefix.to_string()))?;
    let prefix: u8 = u8::try_from(prefix)
        .ok()
        .filter(|p| *p <= IPV4_BITS)
        .ok_or(AddressError::PrefixTooLarge(prefix))?;

    let mask: u32 = subnet_mask(prefix).ok_or(AddressError::PrefixTooLarge(prefix.into()))?;
    let network: u32 = ip & mask;
    let broadcast: u32 = network | !mask;

    // signed arithmetic so /31 and /32 go negative before the clamp
    let first: i64 = i64::from(network) + 1;
    let last: i64 = i64::from(broadcast) - 1;
    let host_count: u64 = u64::try_from(last - first + 1).unwrap_or(0);

    let block = CidrBlock {
        network: integer_to_ip(network),
        subnet_mask: integer_to_ip(mask),
        wildcard_mask: integer_to_ip(!mask),
        broadcast: integer_to_ip(broadcast),
        first_host: integer_to_ip(network.wrapping_add(1)),
        last_host: integer_to_ip(broadcast.wrapping_sub(1)),
        prefix,
        host_count,
        total_addresses: 1u64 << (IPV4_BITS - prefix),
        is_valid: true,
        error: None,
    };
    trace!("{s} -> {block:?}");
    Ok(block)
}

/**
The IPv4 subnet mask for a prefix length, as a `u32` with the top `prefix`
bits set. `None` if `prefix > 32`.

A shift by 32 overflows `u32`, so `/0` is special-cased to an all-zero mask.
*/
pub fn subnet_mask(prefix: u8) -> Option<u32> {
    if prefix > IPV4_BITS {
        return None;
    }
    Some((!0u32).checked_shl(u32::from(IPV4_BITS - prefix)).unwrap_or(0))
}

/// Inverse of [subnet_mask]. `None` if the set bits of `mask` are not contiguous.
pub fn prefix_from_mask(mask: u32) -> Option<u8> {
    let prefix: u8 = mask.leading_ones() as u8;
    match subnet_mask(prefix) == Some(mask) {
        true => Some(prefix),
        false => None,
    }
}

/* -------------------------------------------------------------------------- */
