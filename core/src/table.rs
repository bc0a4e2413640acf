//! # Network Table Loader
//!
//! Reads `networks.csv` style tables into [`NetworkRecord`]s.
//!
//! The format is deliberately plain: comma separated, no quoting, first line
//! is the header. Lines starting with `#` and blank lines are ignored and
//! every field is trimmed. CIDR syntax is not checked here; the searcher
//! deals with malformed ranges when it reaches them.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use indexmap::IndexMap;
use tracing::{debug, warn};

use netfind_common::error::LookupError;
use netfind_common::network::record::{CIDR_COLUMN, DESCRIPTION_COLUMN, NetworkRecord};

/// Loads the table at `path`, keeping file order.
///
/// The file handle is dropped before returning on every path.
pub fn load(path: &Path) -> Result<Vec<NetworkRecord>, LookupError> {
    debug!("Loading {}", path.display());

    let file = File::open(path).map_err(|source| LookupError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    from_reader(BufReader::new(file), path)
}

/// Parses a table from any reader. `origin` is only used to label errors.
pub fn from_reader<R: io::Read>(rdr: R, origin: &Path) -> Result<Vec<NetworkRecord>, LookupError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(rdr);

    let header: StringRecord = reader
        .headers()
        .map_err(|e| table_error(origin, e))?
        .clone();
    debug!("Headers: {:?}", header.iter().collect::<Vec<&str>>());

    let layout = Layout::from_header(&header).map_err(|reason| LookupError::MalformedTable {
        path: origin.to_path_buf(),
        reason,
    })?;

    let mut records: Vec<NetworkRecord> = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| table_error(origin, e))?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        records.push(layout.shape(&row));
    }

    debug!("Found {} networks", records.len());
    Ok(records)
}

fn table_error(path: &Path, err: csv::Error) -> LookupError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LookupError::FileNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => LookupError::MalformedTable {
            path: path.to_path_buf(),
            reason,
        },
    }
}

/// Column positions taken from the header line.
struct Layout {
    columns: Vec<String>,
    cidr: usize,
    description: usize,
}

impl Layout {
    fn from_header(header: &StringRecord) -> Result<Self, String> {
        let find = |name: &str| {
            header
                .iter()
                .position(|column| column == name)
                .ok_or_else(|| format!("header has no {name} column"))
        };

        Ok(Self {
            cidr: find(CIDR_COLUMN)?,
            description: find(DESCRIPTION_COLUMN)?,
            columns: header.iter().map(String::from).collect(),
        })
    }

    /// Zips a data row against the header.
    ///
    /// Short rows leave `cidr`/`description` empty and omit missing extra
    /// columns. Values past the last header column are dropped.
    fn shape(&self, row: &StringRecord) -> NetworkRecord {
        let line: u64 = row.position().map_or(0, |pos| pos.line());
        let expected: usize = self.columns.len();

        if row.len() < expected {
            warn!("Line {line} has {} of {expected} columns, missing values left empty", row.len());
        } else if row.len() > expected {
            warn!("Line {line} has {} values for {expected} columns, extra values dropped", row.len());
        }

        let value = |idx: usize| row.get(idx).unwrap_or_default().to_string();

        let extra: IndexMap<String, String> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != self.cidr && *idx != self.description)
            .filter_map(|(idx, name)| row.get(idx).map(|v| (name.clone(), v.to_string())))
            .collect();

        NetworkRecord {
            cidr: value(self.cidr),
            description: value(self.description),
            extra,
        }
    }
}
