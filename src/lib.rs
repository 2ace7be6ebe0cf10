// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IP address classification and IPv4 CIDR subnet arithmetic.

Every function here is pure: no I/O, no DNS, no shared mutable state.
Malformed input is an expected branch, not a failure, so the record-returning
entry points ([analyze_ip], [parse_cidr]) never panic and never return
`Err`; they hand back an `is_valid: false` record instead.

```ignore
use ipcalc::{analyze_ip, parse_cidr};

let c = analyze_ip("10.0.0.1");
assert!(c.is_private && !c.is_public);

let b = parse_cidr("192.168.1.0/24");
assert_eq!(b.broadcast, "192.168.1.255");
assert_eq!(b.host_count, 254);
```
*/

pub mod iptools;

pub use iptools::{
    analyze_ip, detect_version, get_ip_version, integer_to_ip, ip_to_binary, ip_to_hex,
    ip_to_integer, is_valid_ipv4, is_valid_ipv6, parse_cidr, parse_ipv4, parse_ipv6,
    prefix_from_mask, subnet_mask, AddressClassification, AddressError, CidrBlock, IpFam,
};
