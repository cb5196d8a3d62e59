//! Console Logger
//!
//! `tracing` subscriber for browser builds. Events are formatted by the
//! `tracing-subscriber` fmt layer and handed to the `console.*` method that
//! matches their level, so the devtools level filter works as expected.
//!
//! Off wasm32 (native tests) output goes to stderr instead.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Browser console method an event is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

impl ConsoleMethod {
    /// Pick the console method for a tracing level
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            Level::DEBUG => Self::Log,
            _ => Self::Debug,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn emit(self, message: &str) {
        use web_sys::console;

        let value = wasm_bindgen::JsValue::from_str(message);
        match self {
            Self::Error => console::error_1(&value),
            Self::Warn => console::warn_1(&value),
            Self::Info => console::info_1(&value),
            Self::Log => console::log_1(&value),
            Self::Debug => console::debug_1(&value),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(self, message: &str) {
        eprintln!("{message}");
    }
}

/// Buffers one formatted event and emits it on drop.
///
/// The fmt layer asks for a fresh writer per event, so one writer maps to
/// exactly one console call.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    pub fn method(&self) -> ConsoleMethod {
        self.method
    }

    /// Buffered text without the trailing newline the formatter appends
    pub fn message(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.method.emit(&self.message());
    }
}

/// `MakeWriter` handing out one `ConsoleWriter` per event
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

/// Install the console subscriber as the global default.
///
/// Returns `false` if a global subscriber was already set; the existing one
/// is kept.
pub fn init(max_level: LevelFilter) -> bool {
    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init()
        .is_ok()
}
