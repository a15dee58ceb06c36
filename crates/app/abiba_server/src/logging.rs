//! Tracing setup: stderr always, plus the append-only log file that
//! `/api/logs` tails when file logging is active.

use std::fs::{File, OpenOptions};
use std::path::Path;

use abiba_core::logs::LOG_TIMESTAMP_FORMAT;
use chrono::Local;
use tracing::{Event, Subscriber, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields, format};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "info,abiba_api=debug,abiba_core=debug";

/// `<timestamp> [<LEVEL>] <message> <fields>` — one event per line.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(
            writer,
            "{} [{}] ",
            Local::now().format(LOG_TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber.
///
/// A log file that cannot be opened is reported and skipped; the server
/// keeps running with stderr only. Keep the returned guard alive for the
/// process lifetime so buffered lines reach the file.
pub fn init(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let opened = log_file.map(|path| (path, open_append(path)));
    let (file_layer, guard, open_error) = match opened {
        Some((_, Ok(file))) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_ansi(false)
                .event_format(LineFormat)
                .with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Some((path, Err(e))) => (None, None, Some((path, e))),
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some((path, e)) = open_error {
        warn!(path = %path.display(), error = %e, "file logging disabled");
    }

    guard
}
