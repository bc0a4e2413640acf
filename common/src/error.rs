use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Could not find {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not a valid IP Address")]
    InvalidAddress(String),
    #[error("{} is not a usable network table: {reason}", path.display())]
    MalformedTable { path: PathBuf, reason: String },
    #[error("{cidr} is not a valid network: {reason}")]
    MalformedCidr { cidr: String, reason: String },
}
