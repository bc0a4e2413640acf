//! # Containment Search
//!
//! Finds the network that holds an address. Records are scanned in table
//! order and the first containing range wins, so an overlapping broader
//! range listed earlier shadows a more specific one listed later.

use std::fmt;

use tracing::{debug, error, warn};

use netfind_common::network::address::Address;
use netfind_common::network::record::NetworkRecord;
use netfind_common::success;

/// A successful lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    pub address: Address,
    pub record: &'a NetworkRecord,
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} found in {} - {}",
            self.address, self.record.cidr, self.record.description
        )
    }
}

/// Returns the first record whose range contains `address`.
///
/// Rows whose `CIDR` value does not parse are skipped with a warning naming
/// the record by its 1-based position among loaded records.
/// `None` means no usable row matched and is not an error.
pub fn search(address: Address, records: &[NetworkRecord]) -> Option<Match<'_>> {
    for (idx, record) in records.iter().enumerate() {
        let network = match record.network() {
            Ok(network) => network,
            Err(e) => {
                warn!("Skipping record #{}: {e}", idx + 1);
                continue;
            }
        };

        if network.contains(address.ip()) {
            success!("Found {address} in {}", record.cidr);
            return Some(Match { address, record });
        }
    }

    debug!("Checked {} networks", records.len());
    error!("Could not find {address} in any networks");
    None
}
