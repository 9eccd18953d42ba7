use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// `2024-05-01 09:30:00,125`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

pub const NAME_WIDTH: usize = 12;
pub const LEVEL_WIDTH: usize = 8;

/// One line per event: local timestamp, logger name padded to 12, level
/// name padded to 8, then the message and fields.
///
/// The same format is used for the console and the log file so the two
/// can be compared line for line.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineFormat;

pub fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARNING",
        Level::ERROR => "ERROR",
    }
}

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
            "{} {:<name_width$} {:<level_width$} ",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            meta.target(),
            level_name(meta.level()),
            name_width = NAME_WIDTH,
            level_width = LEVEL_WIDTH,
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .event_format(LineFormat)
            .with_writer(buffer.clone())
            .with_max_level(Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn test_line_layout() {
        let out = capture(|| tracing::info!(target: "apps", "user signed up"));
        let line = out.lines().next().unwrap();

        // "YYYY-MM-DD HH:MM:SS,mmm " is 24 characters
        let (stamp, rest) = line.split_at(24);
        assert_eq!(stamp.len(), 24);
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[19..20], ",");
        assert_eq!(rest, "apps         INFO     user signed up");
    }

    #[test]
    fn test_warning_name_and_fields() {
        let out = capture(|| tracing::warn!(target: "server", status = 404, "not found"));
        assert!(out.contains("server       WARNING  not found status=404"));
    }

    #[test]
    fn test_long_target_not_truncated() {
        let out = capture(|| tracing::error!(target: "webapp::resolver", "boom"));
        assert!(out.contains(" webapp::resolver ERROR    boom"));
    }

    #[test]
    fn test_level_names() {
        assert_eq!(level_name(&Level::WARN), "WARNING");
        assert_eq!(level_name(&Level::INFO), "INFO");
    }
}
