//! Console Logging
//!
//! Routes `tracing` events to the browser console. Each formatted event is
//! buffered and emitted as a single console call on drop; ERROR events go to
//! `console.error`, WARN to `console.warn`, everything else to `console.log`.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the console subscriber. Call once, before mounting the app.
pub fn init() {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Logging already initialized: {}", e).into());
    }
}

#[derive(Clone, Copy)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
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

        let line = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(line.trim_end());

        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            _ => web_sys::console::log_1(&message),
        }
    }
}
