//! Optional library-scoped log formatting for embedding binaries.

use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Crate target prefix used to scope filtering to this library.
pub const TARGET_PREFIX: &str = "gen_ai_service";

/// Compact RFC3339 UTC timer (`2025-09-12T10:20:30Z`, no fractional seconds).
#[derive(Clone, Debug, Default)]
struct Rfc3339Utc;

impl FormatTime for Rfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        w.write_str(
            &chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        )
    }
}

/// Formatting layer that renders only events emitted by this crate.
///
/// Single-line compact output with source location and span-close events,
/// colored only when stdout is a terminal. Logs from other crates pass
/// through untouched; the embedding binary composes this with its own
/// subscriber.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_timer(Rfc3339Utc)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(io::stdout().is_terminal())
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .event_format(fmt::format().compact().with_source_location(true))
        .with_filter(filter::filter_fn(|meta| {
            meta.target().starts_with(TARGET_PREFIX)
        }))
}

/// EnvFilter from the environment (or `default`), raised to `level` for this
/// library only, e.g. `info` globally but `gen_ai_service=debug`.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    let directive = format!("{TARGET_PREFIX}={}", level.as_str().to_lowercase());
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default))
        .add_directive(
            tracing_subscriber::filter::Directive::from_str(&directive)
                .expect("valid level directive"),
        )
}
