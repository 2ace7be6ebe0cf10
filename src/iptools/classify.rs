// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    addresses::{detect_version, parse_ipv4, parse_ipv6},
    codec::{int_to_binary, int_to_hex},
    ranges::*,
    structs::{AddressClassification, IpFam},
    AddressError,
};
use std::net::Ipv6Addr;
use tracing::debug;

/**
Classify an IP address literal.

Never fails: anything that is neither valid IPv4 nor valid IPv6 yields
[AddressClassification::invalid].

IPv4 flags come from the range tables. Loopback (`127/8`) and multicast
(`224/4`) are also reserved, and none of them are private, so `is_public`
is simply "none of the above". IPv4 addresses are never link-local here.

IPv6 support is best-effort: link-local `fe80::/10`, loopback `::1`,
multicast `ff00::/8`, and private meaning link-local or unique-local
`fc00::/7`. Only IPv4 results carry `binary`, `hex` and `integer`.
*/
pub fn analyze_ip(ip: impl AsRef<str>) -> AddressClassification {
    let ip: &str = ip.as_ref();
    let res: Result<AddressClassification, AddressError> = match detect_version(ip) {
        Ok(IpFam::V4) => parse_ipv4(ip).map(classify_v4),
        Ok(IpFam::V6) => parse_ipv6(ip).map(|s| classify_v6(Ipv6Addr::from(s))),
        Err(e) => Err(e),
    };

    res.unwrap_or_else(|e| {
        debug!("cannot classify: {e}");
        AddressClassification::invalid()
    })
}

fn classify_v4(val: u32) -> AddressClassification {
    let is_private: bool = is_private_v4(val);
    let is_reserved: bool = is_reserved_v4(val);
    let is_loopback: bool = is_loopback_v4(val);
    let is_multicast: bool = is_multicast_v4(val);

    AddressClassification {
        is_valid: true,
        version: Some(IpFam::V4),
        is_private,
        is_public: !(is_private || is_reserved || is_loopback),
        is_reserved,
        is_loopback,
        is_multicast,
        is_link_local: false,
        binary: Some(int_to_binary(val)),
        hex: Some(int_to_hex(val)),
        integer: Some(val),
    }
}

fn classify_v6(addr: Ipv6Addr) -> AddressClassification {
    let is_link_local: bool = is_link_local_v6(&addr);
    let is_loopback: bool = is_loopback_v6(&addr);
    let is_multicast: bool = is_multicast_v6(&addr);
    let is_private: bool = is_link_local || is_unique_local_v6(&addr);

    AddressClassification {
        is_valid: true,
        version: Some(IpFam::V6),
        is_private,
        is_public: !(is_private || is_loopback || is_multicast),
        is_reserved: false,
        is_loopback,
        is_multicast,
        is_link_local,
        binary: None,
        hex: None,
        integer: None,
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    /// Public exactly when no other IPv4 category applies.
    fn assert_public_invariant(c: &AddressClassification) {
        assert_eq!(
            c.is_public,
            !(c.is_private || c.is_reserved || c.is_loopback || c.is_multicast),
            "{c:?}"
        );
    }

    #[test]
    fn test_private_v4() {
        let c = analyze_ip("10.0.0.1");
        assert!(c.is_valid);
        assert_eq!(c.version, Some(IpFam::V4));
        assert!(c.is_private);
        assert!(!c.is_public);
        assert!(!c.is_reserved);
        assert_public_invariant(&c);
    }

    #[test]
    fn test_loopback_v4() {
        let c = analyze_ip("127.0.0.1");
        assert!(c.is_loopback);
        assert!(c.is_reserved);
        assert!(!c.is_private);
        assert!(!c.is_public);
        assert_public_invariant(&c);
    }

    #[test]
    fn test_public_v4() {
        let c = analyze_ip("8.8.8.8");
        assert!(c.is_valid);
        assert!(!c.is_private);
        assert!(!c.is_reserved);
        assert!(!c.is_loopback);
        assert!(!c.is_multicast);
        assert!(c.is_public);
        assert_eq!(c.integer, Some(0x0808_0808));
        assert_eq!(c.hex.as_deref(), Some("08:08:08:08"));
        assert_eq!(
            c.binary.as_deref(),
            Some("00001000.00001000.00001000.00001000")
        );
    }

    #[test]
    fn test_multicast_v4() {
        let c = analyze_ip("224.0.0.1");
        assert!(c.is_multicast);
        assert!(c.is_reserved);
        assert!(!c.is_private);
        assert!(!c.is_public);
        assert_public_invariant(&c);
    }

    #[test]
    fn test_invalid() {
        for ip in ["300.1.1.1", "", "hello", "1.2.3.4/24", "fe80::1::2"] {
            let c = analyze_ip(ip);
            assert_eq!(c, AddressClassification::invalid(), "Failed: '{ip}'");
            assert_eq!(c.version, None);
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_public_invariant_v4() {
        let ips: [&str; 12] = [
            "0.0.0.0", "0.1.2.3", "1.1.1.1", "10.10.10.10", "100.64.0.1",
            "169.254.1.1", "172.16.5.4", "192.168.1.1", "223.255.255.255",
            "239.1.1.1", "240.0.0.1", "255.255.255.255",
        ];
        for ip in ips {
            let c = analyze_ip(ip);
            assert!(c.is_valid, "Failed: '{ip}'");
            assert!(!c.is_link_local, "Failed: '{ip}'");
            assert!(!(c.is_private && (c.is_loopback || c.is_multicast)), "Failed: '{ip}'");
            assert_public_invariant(&c);
        }
    }

    #[test]
    fn test_leading_zeros_v4() {
        let c = analyze_ip("192.168.001.010");
        assert!(c.is_private);
        assert_eq!(c.integer, Some(0xC0A8_010A));
    }

    #[test]
    fn test_v6_link_local() {
        let c = analyze_ip("fe80::1");
        assert_eq!(c.version, Some(IpFam::V6));
        assert!(c.is_link_local);
        assert!(c.is_private);
        assert!(!c.is_public);
        assert_eq!((c.binary, c.hex, c.integer), (None, None, None));
    }

    #[test]
    fn test_v6_categories() {
        let c = analyze_ip("::1");
        assert!(c.is_loopback && !c.is_public && !c.is_private);

        let c = analyze_ip("ff02::1");
        assert!(c.is_multicast && !c.is_public);

        let c = analyze_ip("fd00::1234");
        assert!(c.is_private && !c.is_link_local && !c.is_public);

        let c = analyze_ip("FC00::1");
        assert!(c.is_private);

        let c = analyze_ip("2001:4860:4860::8888");
        assert!(c.is_public);
        assert!(!(c.is_private || c.is_loopback || c.is_multicast || c.is_reserved));
    }

    #[test]
    fn test_idempotent() {
        for ip in ["10.0.0.1", "fe80::1", "bogus"] {
            assert_eq!(analyze_ip(ip), analyze_ip(ip));
        }
    }
}
