// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between the textual, integer, binary and hex forms of IPv4.

use super::{addresses::parse_ipv4, strings::*};

/// Pack a dotted-quad IPv4 literal into a big-endian `u32`.
/// Returns `None` for anything that isn't valid IPv4.
pub fn ip_to_integer(ip: impl AsRef<str>) -> Option<u32> {
    parse_ipv4(ip).ok()
}

/// Render a `u32` as a canonical dotted-quad (no leading zeros).
pub fn integer_to_ip(val: u32) -> String {
    let [a, b, c, d] = val.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}

/// Each octet as 8 zero-padded binary digits, joined with `.`.
pub fn ip_to_binary(ip: impl AsRef<str>) -> Option<String> {
    ip_to_integer(ip).map(int_to_binary)
}

/// Each octet as 2 zero-padded lowercase hex digits, joined with `:`.
pub fn ip_to_hex(ip: impl AsRef<str>) -> Option<String> {
    ip_to_integer(ip).map(int_to_hex)
}

#[inline]
pub(crate) fn int_to_binary(val: u32) -> String {
    join_octets(val, |o| format!("{o:08b}"), DOT)
}

#[inline]
pub(crate) fn int_to_hex(val: u32) -> String {
    join_octets(val, |o| format!("{o:02x}"), COLON)
}

#[inline]
fn join_octets(val: u32, fmt_octet: impl Fn(u8) -> String, sep: &str) -> String {
    val.to_be_bytes()
        .into_iter()
        .map(fmt_octet)
        .collect::<Vec<String>>()
        .join(sep)
}

/* -------------------------------------------------------------------------- */
