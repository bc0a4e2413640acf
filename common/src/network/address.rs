//! # Search Address
//!
//! The validated address a lookup is performed for.
//!
//! Parsing goes through [`std::net::IpAddr`], so IPv6 text is accepted as well.
//! Tables hold IPv4 ranges, which means an IPv6 address validates but never matches.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::LookupError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address(IpAddr);

impl Address {
    pub fn ip(&self) -> IpAddr {
        self.0
    }
}

impl FromStr for Address {
    type Err = LookupError;

    /// Parses dotted-decimal IPv4 (or any IPv6 form `IpAddr` understands).
    ///
    /// Anything else, surrounding whitespace included, is rejected with
    /// [`LookupError::InvalidAddress`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<IpAddr>()
            .map(Address)
            .map_err(|_| LookupError::InvalidAddress(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_parse_dotted_decimal() {
        let addr: Address = "10.0.0.5".parse().unwrap();
        assert_eq!(addr.ip(), IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5)));
        assert_eq!(addr.to_string(), "10.0.0.5");
    }

    #[test]
    fn test_parse_ipv6_is_accepted() {
        let addr: Address = "::1".parse().unwrap();
        assert!(addr.ip().is_ipv6());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["not-an-ip", "", "10.0.0", "10.0.0.256", "10.0.0.0/24", " 10.0.0.5", "10.0.0.5\n"] {
            match input.parse::<Address>() {
                Err(LookupError::InvalidAddress(raw)) => assert_eq!(raw, input),
                other => panic!("expected InvalidAddress for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_address_message() {
        let err = "not-an-ip".parse::<Address>().unwrap_err();
        assert_eq!(err.to_string(), "not-an-ip is not a valid IP Address");
    }
}
