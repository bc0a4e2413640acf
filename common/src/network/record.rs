//! # Network Table Record
//!
//! One row of the network table, shaped at load time.
//!
//! The `CIDR` and `Description` columns are lifted into named fields; every
//! other column is kept in [`NetworkRecord::extra`] in header order.

use indexmap::IndexMap;
use pnet::ipnetwork::IpNetwork;

use crate::error::LookupError;

pub const CIDR_COLUMN: &str = "CIDR";
pub const DESCRIPTION_COLUMN: &str = "Description";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkRecord {
    /// Range in CIDR notation, as written in the table. Not validated at load time.
    pub cidr: String,
    pub description: String,
    /// Remaining columns, keyed by header name.
    pub extra: IndexMap<String, String>,
}

impl NetworkRecord {
    pub fn new(cidr: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            cidr: cidr.into(),
            description: description.into(),
            extra: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(column.into(), value.into());
        self
    }

    /// Looks a value up by its header name, named columns included.
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            CIDR_COLUMN => Some(&self.cidr),
            DESCRIPTION_COLUMN => Some(&self.description),
            _ => self.extra.get(column).map(String::as_str),
        }
    }

    /// Interprets the `CIDR` column as a network.
    ///
    /// A bare address is read as a single-host network. Host bits below the
    /// prefix are accepted and masked off by containment checks.
    pub fn network(&self) -> Result<IpNetwork, LookupError> {
        self.cidr
            .parse::<IpNetwork>()
            .map_err(|e| LookupError::MalformedCidr {
                cidr: self.cidr.clone(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_get_by_column_name() {
        let record = NetworkRecord::new("10.0.0.0/24", "Lab").with_field("VLAN", "20");

        assert_eq!(record.get("CIDR"), Some("10.0.0.0/24"));
        assert_eq!(record.get("Description"), Some("Lab"));
        assert_eq!(record.get("VLAN"), Some("20"));
        assert_eq!(record.get("Site"), None);
    }

    #[test]
    fn test_network_parsing() {
        let net = NetworkRecord::new("10.0.0.0/24", "Lab").network().unwrap();
        assert_eq!(net.prefix(), 24);
        assert!(net.contains(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5))));
        assert!(!net.contains(IpAddr::V4(Ipv4Addr::new(10, 0, 1, 5))));

        let host = NetworkRecord::new("172.16.0.9", "Printer").network().unwrap();
        assert_eq!(host.prefix(), 32);
    }

    #[test]
    fn test_malformed_network() {
        for cidr in ["", "10.0.0.0/33", "lab-net", "10.0.0/24x"] {
            let err = NetworkRecord::new(cidr, "Broken").network().unwrap_err();
            assert!(
                matches!(err, LookupError::MalformedCidr { cidr: ref c, .. } if c == cidr),
                "unexpected error for {cidr:?}: {err:?}"
            );
        }
    }
}
