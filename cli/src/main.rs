mod commands;
mod terminal;

use std::io::{self, Write};
use std::process::ExitCode;

use commands::CommandLine;
use netfind_common::config::Config;
use netfind_common::network::address::Address;
use netfind_core::{search, table};
use terminal::logging::Diagnostics;
use tracing::{debug, error};

/// Exit status for a completed lookup, whether or not a network matched.
const EXIT_OK: u8 = 0;
/// Exit status when the address or the table cannot be used.
const EXIT_FATAL: u8 = 1;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let _diagnostics = Diagnostics::init(commands.debug);

    ExitCode::from(execute(&commands, &mut io::stdout().lock()))
}

/// Runs the lookup and maps the outcome to an exit status.
///
/// Fatal errors are logged here, once, at error level.
fn execute<W: Write>(commands: &CommandLine, out: &mut W) -> u8 {
    match run(commands, out) {
        Ok(()) => EXIT_OK,
        Err(e) => {
            error!("{e:#}");
            EXIT_FATAL
        }
    }
}

/// Validates the address before touching the table.
fn run<W: Write>(commands: &CommandLine, out: &mut W) -> anyhow::Result<()> {
    let address: Address = commands.ip.parse()?;

    let cfg = Config {
        table_path: commands.table_path()?,
    };

    lookup(address, &cfg, out)
}

/// Loads the table and prints the first containing network.
///
/// A lookup with no match still returns `Ok`.
fn lookup<W: Write>(address: Address, cfg: &Config, out: &mut W) -> anyhow::Result<()> {
    debug!("Searching for {address} in {}", cfg.table_path.display());

    let networks = table::load(&cfg.table_path)?;

    if let Some(hit) = search::search(address, &networks) {
        writeln!(out, "{hit}")?;
    }

    Ok(())
}
