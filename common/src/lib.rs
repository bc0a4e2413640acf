//! # netfind common
//!
//! Types shared by the loader, the searcher and the command line driver.
//!
//! * **[`config`]**: Runtime options resolved once by the driver.
//! * **[`error`]**: The error taxonomy every fallible operation reports through.
//! * **[`network`]**: The network table record and the validated search address.
//! * **[`log`]**: Diagnostic helpers layered on top of `tracing`.

pub mod config;
pub mod error;
pub mod log;
pub mod network;

pub use tracing;
