//! Human oriented terminal format

use super::logfmt::write_attrs;
use super::timestamp::TimeFormat;
use super::Format;
use crate::core::{LogLevel, Record};
use crate::handlers::find_caller;

/// Messages shorter than this many bytes are padded so attributes line up
pub const TERM_MSG_JUST: usize = 46;

/// Terminal format for interactive programs and development.
///
/// ```text
/// LEVEL NAME TIME CALLER] MESSAGE    key=value key=value
/// ```
///
/// Levels are colored when enabled (red for `EROR`/`CRIT`, yellow for
/// `WARN`, magenta for `INFO`) and attribute keys are bolded. Errors,
/// dumps and standalone values given without a key are printed on their
/// own lines after the attributes.
#[derive(Debug, Clone, Default)]
pub struct TerminalFormat {
    with_color: bool,
    time_format: TimeFormat,
    name: String,
}

impl TerminalFormat {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, with_color: bool) -> Self {
        self.with_color = with_color;
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Format for TerminalFormat {
    fn format(&self, record: &Record) -> Vec<u8> {
        let level = record.level.as_str_upper();
        let time = self.time_format.render(&record.time);
        let caller = find_caller(&record.attrs).map_or("", |tag| tag.0.as_str());

        let mut buf = String::with_capacity(128);
        let colored = self.with_color && has_color(record.level);
        if colored {
            buf.push_str(&paint_level(level, record.level));
        } else {
            buf.push_str(level);
        }
        buf.push(' ');
        buf.push_str(&self.name);
        buf.push_str(&time);
        buf.push_str(caller);
        buf.push_str("] ");
        buf.push_str(&record.message);
        if colored {
            buf.push_str("  ");
        }

        // padding counts bytes, so multi-byte messages align short
        if !record.attrs.is_empty() && record.message.len() < TERM_MSG_JUST {
            buf.push_str(&" ".repeat(TERM_MSG_JUST - record.message.len()));
        }
        write_attrs(&mut buf, &record.attrs, self.with_color);
        buf.into_bytes()
    }
}

fn has_color(level: LogLevel) -> bool {
    matches!(
        level,
        LogLevel::Crit | LogLevel::Error | LogLevel::Warn | LogLevel::Info
    )
}

// Escapes are written directly: `colored`'s `Display` consults the
// environment and whether stdout is a terminal, and a format only sees bytes.
#[cfg(feature = "console")]
fn paint_level(text: &str, level: LogLevel) -> String {
    use colored::Color;
    let color = match level {
        LogLevel::Crit | LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Magenta,
        LogLevel::Debug | LogLevel::Trace => return text.to_string(),
    };
    sgr(&color.to_fg_str(), text)
}

#[cfg(not(feature = "console"))]
fn paint_level(text: &str, _level: LogLevel) -> String {
    text.to_string()
}

#[cfg(feature = "console")]
pub(crate) fn bold(text: &str) -> String {
    sgr(SGR_BOLD, text)
}

#[cfg(not(feature = "console"))]
pub(crate) fn bold(text: &str) -> String {
    text.to_string()
}

#[cfg(feature = "console")]
const SGR_BOLD: &str = "1";

#[cfg(feature = "console")]
fn sgr(code: &str, text: &str) -> String {
    format!("\x1b[{code}m{text}\x1b[0m")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::core::{CallerTag, Value};
    use chrono::{TimeZone, Utc};

    fn render(format: &TerminalFormat, record: &Record) -> String {
        String::from_utf8(format.format(record)).unwrap()
    }

    #[test]
    fn test_message_without_attrs() {
        let record = Record::new(LogLevel::Info, "started", Vec::new());
        let format = TerminalFormat::new().with_name("app");
        assert_eq!(render(&format, &record), "INFO app ] started\n");
    }

    #[test]
    fn test_short_message_is_justified() {
        let record = Record::new(LogLevel::Warn, "low disk", attrs!["free", 3]);
        let out = render(&TerminalFormat::new(), &record);
        let padding = " ".repeat(TERM_MSG_JUST - "low disk".len());
        assert_eq!(out, format!("WARN  ] low disk{padding}free=3\n"));
    }

    #[test]
    fn test_long_message_is_not_padded() {
        let message = "x".repeat(TERM_MSG_JUST + 4);
        let record = Record::new(LogLevel::Debug, message.clone(), attrs!["k", "v"]);
        let out = render(&TerminalFormat::new(), &record);
        assert_eq!(out, format!("DBUG  ] {message}k=\"v\"\n"));
    }

    #[test]
    fn test_caller_and_time_in_header() {
        let t = Utc.with_ymd_and_hms(2015, 11, 20, 1, 34, 22).unwrap();
        let caller = CallerTag("log/handler.rs:12".to_string());
        let record = Record::new(LogLevel::Error, "failed", attrs!["id", 7, caller]).with_time(t);
        let format = TerminalFormat::new()
            .with_name("svc")
            .with_time_format(TimeFormat::Sec);
        let padding = " ".repeat(TERM_MSG_JUST - "failed".len());
        assert_eq!(
            render(&format, &record),
            format!("EROR svc 11-20 01:34:22 log/handler.rs:12] failed{padding}id=7 \n")
        );
    }

    #[test]
    fn test_dump_suppresses_trailing_newline() {
        let record = Record::new(LogLevel::Info, "state", attrs![Value::dump(1_u8)]);
        let out = render(&TerminalFormat::new(), &record);
        let padding = " ".repeat(TERM_MSG_JUST - "state".len());
        assert_eq!(out, format!("INFO  ] state{padding}\n-------- spew --------\n1\n"));
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let record = Record::new(LogLevel::Crit, "meltdown", attrs!["core", 4]);
        let out = render(&TerminalFormat::new().with_color(true), &record);
        assert!(out.contains("CRIT"));
        assert!(out.contains("meltdown"));
        assert!(out.contains("core"));
        assert!(out.ends_with("=4\n"));
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colored_output_writes_escapes() {
        let record = Record::new(LogLevel::Error, "boom", attrs!["k", 1]);
        let out = render(&TerminalFormat::new().with_color(true), &record);
        let padding = " ".repeat(TERM_MSG_JUST - "boom".len());
        assert_eq!(
            out,
            format!("\x1b[31mEROR\x1b[0m  ] boom  {padding}\x1b[1mk\x1b[0m=1\n")
        );
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_level_colors() {
        let paint = |level: LogLevel| paint_level(level.as_str_upper(), level);
        assert_eq!(paint(LogLevel::Crit), "\x1b[31mCRIT\x1b[0m");
        assert_eq!(paint(LogLevel::Warn), "\x1b[33mWARN\x1b[0m");
        assert_eq!(paint(LogLevel::Info), "\x1b[35mINFO\x1b[0m");
        assert_eq!(paint(LogLevel::Debug), "DBUG");
    }
}
