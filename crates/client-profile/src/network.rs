// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Client Profile Contributors

// Network address helpers

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    #[error("missing port in address {0:?}")]
    MissingPort(String),

    #[error("too many colons in address {0:?}")]
    TooManyColons(String),

    #[error("missing ']' in address {0:?}")]
    MissingBracket(String),

    #[error("unexpected '{1}' in address {0:?}")]
    UnexpectedBracket(String, char),
}

/// Split a `host:port`, `[host]:port` or `[ipv6%zone]:port` address
///
/// The port is not checked for being numeric and may be empty. An IPv6
/// literal must be bracketed.
pub fn split_host_port(addr: &str) -> Result<(&str, &str), AddrError> {
    // The port always follows the last colon
    let sep = addr
        .rfind(':')
        .ok_or_else(|| AddrError::MissingPort(addr.to_string()))?;

    let (host, host_start, host_end) = if addr.starts_with('[') {
        let end = addr
            .find(']')
            .ok_or_else(|| AddrError::MissingBracket(addr.to_string()))?;
        if end + 1 == addr.len() {
            return Err(AddrError::MissingPort(addr.to_string()));
        }
        if end + 1 != sep {
            return Err(if addr.as_bytes()[end + 1] == b':' {
                AddrError::TooManyColons(addr.to_string())
            } else {
                AddrError::MissingPort(addr.to_string())
            });
        }
        (&addr[1..end], 1, end + 1)
    } else {
        let host = &addr[..sep];
        if host.contains(':') {
            return Err(AddrError::TooManyColons(addr.to_string()));
        }
        (host, 0, 0)
    };

    if addr[host_start..].contains('[') {
        return Err(AddrError::UnexpectedBracket(addr.to_string(), '['));
    }
    if addr[host_end..].contains(']') {
        return Err(AddrError::UnexpectedBracket(addr.to_string(), ']'));
    }

    Ok((host, &addr[sep + 1..]))
}
