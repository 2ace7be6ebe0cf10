// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IP address validation, classification and IPv4 CIDR subnet arithmetic.

mod addresses;
mod cidr;
mod classify;
mod codec;
mod ranges;
mod strings;
mod structs;

use std::{error, fmt};
use strings::*;

pub use addresses::*;
pub use cidr::{parse_cidr, prefix_from_mask, subnet_mask};
pub use classify::analyze_ip;
pub use codec::*;
pub use structs::{AddressClassification, CidrBlock, IpFam};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV4_OCTETS: usize = 4;
pub(crate) const IPV6_GROUPS: usize = 8;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// neither a valid IPv4 nor IPv6 literal
    Invalid(String),
    InvalidV4(String),
    InvalidV6(String),
    InvalidV4Octet(u32),
    /// not exactly one '/' with non-empty halves
    InvalidCidrFmt(String),
    InvalidCidrAddr(String),
    /// prefix is not a 1-3 digit decimal number
    InvalidPrefix(String),
    PrefixTooLarge(u32),
    /// valid IPv6 address where only IPv4 is supported
    NotIpv4(String),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Invalid(ip) => {
                write!(f, "{ERR_INVALID_IP}: '{ip}'")
            }
            AddressError::InvalidV4(ip) => {
                write!(f, "{ERR_INVALID_V4}: '{ip}'")
            }
            AddressError::InvalidV6(ip) => {
                write!(f, "{ERR_INVALID_V6}: '{ip}'")
            }
            AddressError::InvalidV4Octet(val) => {
                write!(f, "{ERR_V4_OCTET} {val}")
            }
            AddressError::InvalidCidrFmt(cidr) => {
                write!(f, "{ERR_CIDR_FMT}: '{cidr}'")
            }
            AddressError::InvalidCidrAddr(addr) => {
                write!(f, "{ERR_CIDR_INV_ADDR}: '{addr}'")
            }
            AddressError::InvalidPrefix(val) => {
                write!(f, "{ERR_CIDR_INV_PRE}: '{val}'")
            }
            AddressError::PrefixTooLarge(val) => {
                write!(f, "{ERR_CIDR_INV_V4} {val}")
            }
            AddressError::NotIpv4(addr) => {
                write!(f, "{ERR_CIDR_NOT_V4}: '{addr}'")
            }
        }
    }
}

impl error::Error for AddressError {}
