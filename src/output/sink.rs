use crate::config_parsing::config_parser::LoggerConfig;
use crate::output::logger::init_logger;
use crate::util::constants::{LINE_TERMINATOR, PROGRAM_NAME};
use std::fmt::{Arguments, Write as _};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, Once, OnceLock};

/// Destination for the three output operations. Components that print take a
/// `&dyn Sink` so tests can hand them a [`Capture`] instead of the process streams.
pub trait Sink: Send + Sync {
    /// Diagnostic trace entry. Only reached in debug builds, the macros gate the call.
    fn trace(&self, args: Arguments<'_>);
    /// One line on standard output.
    fn out(&self, args: Arguments<'_>);
    /// One line on standard error.
    fn err(&self, args: Arguments<'_>);
}

/// The process streams plus the `log` backend.
///
/// The first trace installs the default diagnostic logger unless one is
/// already set, so tracing works without calling [`init_logger`] first.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Sink for Console {
    fn trace(&self, args: Arguments<'_>) {
        static DEFAULT_LOGGER: Once = Once::new();
        DEFAULT_LOGGER.call_once(|| {
            // Fails only when the caller installed its own logger, which then gets the entry.
            let _ = init_logger(&LoggerConfig::default());
        });
        log::trace!(target: process_tag(), "{}", args);
    }

    fn out(&self, args: Arguments<'_>) {
        // Write failures are dropped, printing must never take the process down.
        let _ = write_line(&mut io::stdout().lock(), args);
    }

    fn err(&self, args: Arguments<'_>) {
        let _ = write_line(&mut io::stderr().lock(), args);
    }
}

/// `<program>[<pid>]`, used as the log target so every trace entry names the process.
pub fn process_tag() -> &'static str {
    static TAG: OnceLock<String> = OnceLock::new();
    TAG.get_or_init(|| format!("{}[{}]", PROGRAM_NAME, std::process::id()))
}

/// Renders `args` followed by the line terminator.
pub fn render_line(args: Arguments<'_>) -> String {
    let mut line = String::new();
    // Writing into a String only fails if a Display impl reports an error.
    let _ = line.write_fmt(args);
    line.push_str(LINE_TERMINATOR);
    line
}

/// Writes one whole line with a single `write_all`, so concurrent writers
/// holding the same locked stream never split it.
pub fn write_line<W: Write>(writer: &mut W, args: Arguments<'_>) -> io::Result<()> {
    writer.write_all(render_line(args).as_bytes())?;
    writer.flush()
}

/// Records everything written to it. Trace entries are stored without a
/// terminator, stream lines with one.
#[derive(Debug, Default)]
pub struct Capture {
    traces: Mutex<Vec<String>>,
    out: Mutex<Vec<String>>,
    err: Mutex<Vec<String>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn traces(&self) -> Vec<String> {
        lock(&self.traces).clone()
    }

    pub fn out_lines(&self) -> Vec<String> {
        lock(&self.out).clone()
    }

    pub fn err_lines(&self) -> Vec<String> {
        lock(&self.err).clone()
    }

    /// Standard output as one string, the way a terminal would show it.
    pub fn out_text(&self) -> String {
        lock(&self.out).concat()
    }

    pub fn err_text(&self) -> String {
        lock(&self.err).concat()
    }
}

impl Sink for Capture {
    fn trace(&self, args: Arguments<'_>) {
        lock(&self.traces).push(args.to_string());
    }

    fn out(&self, args: Arguments<'_>) {
        lock(&self.out).push(render_line(args));
    }

    fn err(&self, args: Arguments<'_>) {
        lock(&self.err).push(render_line(args));
    }
}

// A panicking test thread must not hide what the others recorded.
fn lock(buffer: &Mutex<Vec<String>>) -> MutexGuard<'_, Vec<String>> {
    buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
