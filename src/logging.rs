//! Logging setup.
//!
//! Every line has the shape `2025-01-31 14:02:11 - script_template::config - WARN - message`.
//! The subscriber is built by [`subscriber`] so tests can install it for one thread with
//! a captured writer; the binary installs it process-wide through [`init`].

use chrono::Local;
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// `strftime` pattern for the timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Threshold selected by the verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Filter for the binary: `RUST_LOG` when set, otherwise the verbosity threshold.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .from_env_lossy()
}

/// Filter that ignores the environment.
pub fn fixed_filter(verbose: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .parse_lossy("")
}

/// Formats events as `timestamp - target - LEVEL - message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            meta.target(),
            meta.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Build the script's subscriber writing to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .event_format(LineFormat)
        .with_writer(writer)
        .finish()
}

/// Install the subscriber process-wide, writing to stderr.
pub fn init(verbose: bool) {
    let subscriber = subscriber(env_filter(verbose), std::io::stderr);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: a global logger was already installed");
    }
}
