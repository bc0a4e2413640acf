use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use netfind_common::config::DEFAULT_TABLE;

#[derive(Parser, Debug)]
#[command(name = "netfind")]
#[command(about = "Report which network in a CIDR table contains an IPv4 address.")]
pub struct CommandLine {
    /// IPv4 Address to search
    pub ip: String,
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
    /// Network table to search [default: networks.csv next to the executable]
    #[arg(short, long, value_name = "PATH")]
    pub table: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Path of the network table this invocation should read.
    ///
    /// Without `--table` the file sits in the directory of the running
    /// binary, whatever the caller's working directory is.
    pub fn table_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.table {
            return Ok(path.clone());
        }

        let exe: PathBuf = std::env::current_exe().context("Unable to locate the running executable")?;
        let dir = exe
            .parent()
            .with_context(|| format!("{} has no parent directory", exe.display()))?;

        Ok(dir.join(DEFAULT_TABLE))
    }
}
