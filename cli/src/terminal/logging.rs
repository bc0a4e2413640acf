//! Diagnostic output on standard error.
//!
//! Lines look like `<timestamp> | <LEVEL>    | <module>:<line> - <message>`.

use std::io::{self, IsTerminal};

use colored::*;
use netfind_common::log::SUCCESS_TARGET;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Overrides the `--debug` derived level with a full filter directive.
pub const LOG_ENV: &str = "NETFIND_LOG";

pub struct NetfindFormatter;

impl<S, N> FormatEvent<S, N> for NetfindFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (label, color_func): (&str, fn(ColoredString) -> ColoredString) = if meta.target() == SUCCESS_TARGET {
            ("SUCCESS", |s| s.green().bold())
        } else {
            match *meta.level() {
                Level::TRACE => ("TRACE", |s| s.dimmed()),
                Level::DEBUG => ("DEBUG", |s| s.blue()),
                Level::INFO => ("INFO", |s| s.normal()),
                Level::WARN => ("WARNING", |s| s.yellow().bold()),
                Level::ERROR => ("ERROR", |s| s.red().bold()),
            }
        };

        SystemTime.format_time(&mut writer)?;

        let label = format!("{label:<8}");
        if writer.has_ansi_escapes() {
            write!(writer, " | {} | ", color_func(label.as_str().into()))?;
        } else {
            write!(writer, " | {label} | ")?;
        }

        let location = meta.module_path().unwrap_or_else(|| meta.target());
        write!(writer, "{}:{} - ", location, meta.line().unwrap_or(0))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Level used when no `NETFIND_LOG` directive is set.
pub fn verbosity(debug: bool) -> LevelFilter {
    if debug { LevelFilter::DEBUG } else { LevelFilter::WARN }
}

/// Scoped diagnostics context.
///
/// The subscriber is only the default for as long as this value lives;
/// nothing is installed process-wide.
pub struct Diagnostics {
    _guard: DefaultGuard,
}

impl Diagnostics {
    pub fn init(debug: bool) -> Self {
        Self::with_writer(debug, io::stderr, io::stderr().is_terminal())
    }

    pub fn with_writer<W>(debug: bool, make_writer: W, ansi: bool) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter(debug))
            .with_writer(make_writer)
            .with_ansi(ansi)
            .event_format(NetfindFormatter)
            .finish();

        Self {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}

fn filter(debug: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(verbosity(debug).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// In-memory sink for tests that need to read back what was logged.
#[cfg(test)]
#[derive(Clone, Default)]
struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

/// Runs `emit` under a [`Diagnostics`] context writing to memory, without colors.
#[cfg(test)]
pub(crate) fn capture(debug: bool, emit: impl FnOnce()) -> String {
    let out = Captured::default();
    let sink = out.clone();
    {
        let _diagnostics = Diagnostics::with_writer(debug, move || sink.clone(), false);
        emit();
    }
    out.text()
}
