// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: &str = ".";
pub(crate) static COLON: &str = ":";
pub(crate) static DCOLON: &str = "::";
pub(crate) static SLASH: &str = "/";

// addresses.rs
pub(crate) static ERR_INVALID_IP: &str = "invalid IP address";
pub(crate) static ERR_INVALID_V4: &str = "invalid IPv4 address";
pub(crate) static ERR_INVALID_V6: &str = "invalid IPv6 address";
pub(crate) static ERR_V4_OCTET: &str = "IPv4 octet must be <= 255, got";

// cidr.rs
pub(crate) static ERR_CIDR_FMT: &str = "invalid CIDR format (expected 'address/prefix')";
pub(crate) static ERR_CIDR_INV_ADDR: &str = "invalid IP address in CIDR";
pub(crate) static ERR_CIDR_INV_PRE: &str = "invalid prefix in CIDR";
pub(crate) static ERR_CIDR_INV_V4: &str = "IPv4 prefix must be <= 32, got";
pub(crate) static ERR_CIDR_NOT_V4: &str = "only IPv4 CIDR is supported";
