#![cfg(test)]
use std::io::Write;

use netfind_common::error::LookupError;
use netfind_common::network::address::Address;
use netfind_common::network::record::NetworkRecord;
use netfind_core::{search, table};
use tempfile::NamedTempFile;

const NETWORKS: &str = "\
CIDR,Description,Site
10.0.0.0/24,Lab,hq
10.0.0.0/8,Corporate,hq
not-a-network,Decommissioned,
192.168.10.0/23,Office Wifi,branch
";

fn table_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

/// Loading a minimal table yields exactly the header-keyed record.
#[test]
fn load_single_record() {
    let file = table_file("CIDR,Description\n10.0.0.0/24,Lab\n");

    let records = table::load(file.path()).unwrap();

    assert_eq!(records, vec![NetworkRecord::new("10.0.0.0/24", "Lab")]);
}

/// End to end: load from disk, validate the argument, search, format.
#[test]
fn lookup_reports_first_match_in_file_order() {
    let file = table_file(NETWORKS);
    let records = table::load(file.path()).unwrap();
    assert_eq!(records.len(), 4);

    let address: Address = "10.0.0.5".parse().unwrap();
    let hit = search::search(address, &records).expect("10.0.0.5 should match the lab range");
    assert_eq!(hit.to_string(), "10.0.0.5 found in 10.0.0.0/24 - Lab");
    assert_eq!(hit.record.get("Site"), Some("hq"));

    let address: Address = "10.9.9.9".parse().unwrap();
    let hit = search::search(address, &records).unwrap();
    assert_eq!(hit.record.description, "Corporate");
}

/// The malformed row sits before the office range and must not stop the scan.
#[test]
fn lookup_skips_malformed_rows() {
    let file = table_file(NETWORKS);
    let records = table::load(file.path()).unwrap();

    let address: Address = "192.168.11.200".parse().unwrap();
    let hit = search::search(address, &records).unwrap();

    assert_eq!(hit.to_string(), "192.168.11.200 found in 192.168.10.0/23 - Office Wifi");
}

#[test]
fn lookup_without_match() {
    let file = table_file(NETWORKS);
    let records = table::load(file.path()).unwrap();

    let address: Address = "172.16.0.1".parse().unwrap();
    assert!(search::search(address, &records).is_none());
}

#[test]
fn missing_table_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = table::load(&dir.path().join("networks.csv"));

    assert!(matches!(result, Err(LookupError::FileNotFound { .. })));
}

#[test]
fn invalid_address_is_rejected() {
    let result = "not-an-ip".parse::<Address>();
    assert!(matches!(result, Err(LookupError::InvalidAddress(_))));
}
