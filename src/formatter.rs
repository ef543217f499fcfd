//! Log line formatter that stamps each event with the simulation tick.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Tick of the host loop, shared with the formatter.
static TICK_COUNTER: AtomicU64 = AtomicU64::new(0);

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// Writes `HH:MM:SS.mmm T0000 LEVEL target: fields`, dimming the metadata when ANSI is enabled.
pub struct TickFormatter;

impl<S, N> FormatEvent<S, N> for TickFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        write_dimmed(&mut writer, ansi, format_args!("{timestamp} T{:04}", tick_count() % 10_000))?;
        writer.write_char(' ')?;

        let (color, label) = level_style(meta.level());
        if ansi {
            write!(writer, "{color}{label:>5}\x1b[0m ")?;
        } else {
            write!(writer, "{label:>5} ")?;
        }

        write_dimmed(&mut writer, ansi, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_style(level: &Level) -> (&'static str, &'static str) {
    match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", "INFO"),
        Level::WARN => ("\x1b[33m", "WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    }
}

fn write_dimmed(writer: &mut Writer<'_>, ansi: bool, args: fmt::Arguments<'_>) -> fmt::Result {
    if ansi {
        write!(writer, "\x1b[2m{args}\x1b[0m")
    } else {
        writer.write_fmt(args)
    }
}

/// Records the host loop's current tick.
pub fn set_tick(tick: u64) {
    TICK_COUNTER.store(tick, Ordering::Relaxed);
}

pub fn tick_count() -> u64 {
    TICK_COUNTER.load(Ordering::Relaxed)
}
