//! IP prefix value type
//!
//! Prefixes arrive as `address/length` strings from update feeds and are
//! rendered back in exactly that form when building lookup keys.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::TrailError;

/// An IP prefix: an address plus a mask length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpPrefix {
    addr: IpAddr,
    length: u8,
}

impl IpPrefix {
    /// Create a prefix, validating the mask length against the address family
    pub fn new(addr: IpAddr, length: u8) -> Result<Self, TrailError> {
        let max_length = match addr {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };

        if length > max_length {
            return Err(TrailError::InvalidPrefix(format!(
                "mask length {} exceeds {} for {}",
                length, max_length, addr
            )));
        }

        Ok(Self { addr, length })
    }

    /// The network address
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// The mask length
    pub fn length(&self) -> u8 {
        self.length
    }
}

impl FromStr for IpPrefix {
    type Err = TrailError;

    /// Parse an `address/length` string (e.g. `10.0.0.0/8`, `2001:db8::/32`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, length) = s
            .split_once('/')
            .ok_or_else(|| TrailError::InvalidPrefix(format!("missing '/' in {:?}", s)))?;

        let addr: IpAddr = addr
            .parse()
            .map_err(|e| TrailError::InvalidPrefix(format!("bad address in {:?}: {}", s, e)))?;

        let length: u8 = length
            .parse()
            .map_err(|e| TrailError::InvalidPrefix(format!("bad mask length in {:?}: {}", s, e)))?;

        Self::new(addr, length)
    }
}

impl fmt::Display for IpPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.length)
    }
}
