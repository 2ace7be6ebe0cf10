// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    addresses::parse_ipv4,
    cidr::{cidr_block, subnet_mask},
    strings::*,
    AddressError,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum IpFam {
    V4,
    V6,
}

impl IpFam {
    /// The version number: `4` or `6`.
    pub fn number(&self) -> u8 {
        match self {
            IpFam::V4 => 4,
            IpFam::V6 => 6,
        }
    }
}

impl fmt::Display for IpFam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IPv{}", self.number())
    }
}

/* -------------------------------------------------------------------------- */

/**
Classification of a single IP address literal.

An invalid literal yields the [Default] record: `is_valid == false`,
`version == None`, every flag `false` and no numeric forms.

`binary`, `hex` and `integer` are only ever populated for IPv4.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AddressClassification {
    pub is_valid: bool,
    pub version: Option<IpFam>,
    pub is_private: bool,
    pub is_public: bool,
    pub is_reserved: bool,
    pub is_loopback: bool,
    pub is_multicast: bool,
    pub is_link_local: bool,
    /// dotted 8-bit octets, f.ex. `11000000.10101000.00000001.00000001`
    pub binary: Option<String>,
    /// colon-separated hex octets, f.ex. `c0:a8:01:01`
    pub hex: Option<String>,
    pub integer: Option<u32>,
}

impl AddressClassification {
    /// The all-false record returned for unparseable input.
    pub fn invalid() -> Self {
        Self::default()
    }
}

/* -------------------------------------------------------------------------- */

/**
An IPv4 subnet computed from `address/prefix` notation.

All addresses are dotted-quad strings. For an invalid input every string
field is empty, every number is zero, and `error` carries the reason.

For `/31` and `/32` the usable host range is empty: `first_host` sorts
after `last_host` and `host_count` is 0.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CidrBlock {
    pub network: String,
    pub subnet_mask: String,
    /// inverse of the subnet mask
    pub wildcard_mask: String,
    pub broadcast: String,
    pub first_host: String,
    pub last_host: String,
    /// `0..=32`
    pub prefix: u8,
    /// usable hosts, never negative
    pub host_count: u64,
    /// `2^(32 - prefix)`
    pub total_addresses: u64,
    pub is_valid: bool,
    pub error: Option<String>,
}

impl CidrBlock {
    /// Build the "no result" block for a failed parse.
    pub(crate) fn invalid(err: &AddressError) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Self::default()
        }
    }

    /// Whether the IPv4 address `ip` falls within this block.
    /// Always false for an invalid block or a non-IPv4 `ip`.
    pub fn contains(&self, ip: impl AsRef<str>) -> bool {
        if !self.is_valid {
            return false;
        }
        let (Ok(net), Ok(addr), Some(mask)) = (
            parse_ipv4(&self.network),
            parse_ipv4(ip),
            subnet_mask(self.prefix),
        ) else {
            return false;
        };
        addr & mask == net
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error, self.is_valid) {
            (_, true) => write!(f, "{}{SLASH}{}", self.network, self.prefix),
            (Some(err), false) => write!(f, "{err}"),
            (None, false) => write!(f, "{ERR_CIDR_FMT}"),
        }
    }
}

impl FromStr for CidrBlock {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        cidr_block(s)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_V4: &str = "192.168.1.0/30";
    const TEST_HOST: &str = "192.168.1.77/24";

    #[test]
    fn test_ipfam_number() {
        assert_eq!(IpFam::V4.number(), 4);
        assert_eq!(IpFam::V6.number(), 6);
        assert_eq!(IpFam::V6.to_string(), "IPv6");
    }

    #[test]
    fn test_invalid_classification_is_all_false() {
        let c = AddressClassification::invalid();
        assert!(!c.is_valid);
        assert_eq!(c.version, None);
        assert!(!(c.is_private || c.is_public || c.is_reserved));
        assert!(!(c.is_loopback || c.is_multicast || c.is_link_local));
        assert_eq!((c.binary, c.hex, c.integer), (None, None, None));
    }

    #[test]
    fn test_cidr_from_str_and_display() {
        let block: CidrBlock = TEST_V4.parse().unwrap();
        assert!(block.is_valid);
        assert_eq!(block.to_string(), TEST_V4);

        // host bits are cleared when displayed
        let block: CidrBlock = TEST_HOST.parse().unwrap();
        assert_eq!(block.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_cidr_from_str_error() {
        let err = "10.0.0.0/33".parse::<CidrBlock>().unwrap_err();
        assert_eq!(err, AddressError::PrefixTooLarge(33));
    }

    #[test]
    fn test_invalid_block_display() {
        let block = CidrBlock::invalid(&AddressError::InvalidCidrFmt("x".into()));
        assert!(!block.is_valid);
        assert_eq!(block.to_string(), format!("{ERR_CIDR_FMT}: 'x'"));
        assert_eq!(block.network, "");
        assert_eq!(block.host_count, 0);
    }

    #[test]
    fn test_contains() {
        let block: CidrBlock = TEST_HOST.parse().unwrap();
        assert!(block.contains("192.168.1.0"));
        assert!(block.contains("192.168.1.255"));
        assert!(!block.contains("192.168.2.0"));
        assert!(!block.contains("::1"));
        assert!(!block.contains("garbage"));

        let everything: CidrBlock = "1.2.3.4/0".parse().unwrap();
        assert!(everything.contains("255.255.255.255"));

        assert!(!CidrBlock::default().contains("0.0.0.0"));
    }
}
