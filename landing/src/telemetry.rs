//! `tracing` output for the browser.
//!
//! Formatted events go to the devtools console. Errors and warnings use the
//! matching console methods so they keep their colour and filtering.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleLevel {
    Log,
    Warn,
    Error,
}

impl ConsoleLevel {
    fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleLevel::Error,
            Level::WARN => ConsoleLevel::Warn,
            _ => ConsoleLevel::Log,
        }
    }
}

/// Buffers one formatted event and hands it to the console when dropped.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: ConsoleLevel,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn emit(&mut self) {
        let Some(line) = take_line(&mut self.buf) else {
            return;
        };
        let line = JsValue::from_str(&line);
        match self.level {
            ConsoleLevel::Log => web_sys::console::log_1(&line),
            ConsoleLevel::Warn => web_sys::console::warn_1(&line),
            ConsoleLevel::Error => web_sys::console::error_1(&line),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

/// Drain `buf` into a line without the trailing newline. Empty output yields
/// nothing.
fn take_line(buf: &mut Vec<u8>) -> Option<String> {
    let text = String::from_utf8_lossy(buf).trim_end().to_owned();
    buf.clear();
    (!text.is_empty()).then_some(text)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: ConsoleLevel::Log,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: ConsoleLevel::for_level(meta.level()),
            buf: Vec::new(),
        }
    }
}

/// Install the console subscriber. A second call keeps the first subscriber.
pub fn init(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_levels_to_console_methods() {
        assert_eq!(ConsoleLevel::for_level(&Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::for_level(&Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::for_level(&Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::for_level(&Level::TRACE), ConsoleLevel::Log);
    }

    #[test]
    fn take_line_strips_newline_and_clears() {
        let mut buf = b" INFO aspire_landing: mounted\n".to_vec();
        assert_eq!(
            take_line(&mut buf).as_deref(),
            Some(" INFO aspire_landing: mounted")
        );
        assert!(buf.is_empty());
        assert_eq!(take_line(&mut buf), None);
    }

    #[test]
    fn whitespace_only_output_is_dropped() {
        let mut buf = b"\n\n".to_vec();
        assert_eq!(take_line(&mut buf), None);
    }
}
