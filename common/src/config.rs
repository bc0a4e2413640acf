use std::path::PathBuf;

/// File name of the network table looked up next to the executable.
pub const DEFAULT_TABLE: &str = "networks.csv";

pub struct Config {
    /// Location of the network table.
    ///
    /// Already resolved; nothing downstream consults the working directory.
    pub table_path: PathBuf,
}
