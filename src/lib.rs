//! Debug-only tracing plus always-on line printing to standard output and
//! standard error.
//!
//! [`debug_trace!`] compiles to a dead branch in release builds. [`print_line!`]
//! and [`print_error_line!`] print in every build. All three accept
//! `sink: <expr>` first to write through a [`Sink`] other than the process
//! [`Console`].

pub mod util {
    pub mod constants;
    pub mod macros;
    pub mod misc_extension_traits;
}

pub mod output {
    pub mod logger;
    pub mod sink;
}

pub mod string_parsing {
    pub mod string_parser;
}

pub mod config_parsing {
    pub mod config_parser;
}

pub mod args_parsing {
    pub mod args_parser;
}

pub use config_parsing::config_parser::{LoggerConfig, Timestamps};
pub use output::logger::init_logger;
pub use output::sink::{Capture, Console, Sink};
