/// Traces a formatted message to the diagnostic log, in debug builds only.
///
/// In release builds the branch is dead code behind a constant, so the
/// arguments are never evaluated and nothing is allocated. Without `sink:`
/// the entry goes to [`Console`](crate::Console), which installs the default
/// logger on first use if none is set.
///
/// ```
/// use dlog::{debug_trace, Capture};
///
/// let capture = Capture::new();
/// debug_trace!(sink: &capture, "value={}", 42);
/// if dlog::util::constants::DEBUG {
///     assert_eq!(capture.traces(), ["value=42"]);
/// } else {
///     assert!(capture.traces().is_empty());
/// }
/// ```
#[macro_export]
macro_rules! debug_trace {
  (sink: $sink:expr, $($arg:tt)+) => (
    if $crate::util::constants::DEBUG {
      use $crate::output::sink::Sink as _;
      ($sink).trace(format_args!($($arg)+));
    }
  );
  ($($arg:tt)+) => (
    $crate::debug_trace!(sink: &$crate::output::sink::Console, $($arg)+)
  );
}

/// Prints a formatted line to standard output.
#[macro_export]
macro_rules! print_line {
  (sink: $sink:expr) => (
    $crate::print_line!(sink: $sink, "")
  );
  (sink: $sink:expr, $($arg:tt)+) => ({
    use $crate::output::sink::Sink as _;
    ($sink).out(format_args!($($arg)+));
  });
  () => (
    $crate::print_line!(sink: &$crate::output::sink::Console, "")
  );
  ($($arg:tt)+) => (
    $crate::print_line!(sink: &$crate::output::sink::Console, $($arg)+)
  );
}

/// Prints a formatted line to standard error.
#[macro_export]
macro_rules! print_error_line {
  (sink: $sink:expr) => (
    $crate::print_error_line!(sink: $sink, "")
  );
  (sink: $sink:expr, $($arg:tt)+) => ({
    use $crate::output::sink::Sink as _;
    ($sink).err(format_args!($($arg)+));
  });
  () => (
    $crate::print_error_line!(sink: &$crate::output::sink::Console, "")
  );
  ($($arg:tt)+) => (
    $crate::print_error_line!(sink: &$crate::output::sink::Console, $($arg)+)
  );
}
