use crate::config_parsing::config_parser::{LoggerConfig, Timestamps};
use crate::util::constants::DEBUG;
use log::SetLoggerError;
use simple_logger::SimpleLogger;

/// Builds the diagnostic logger described by `cfg`. `RUST_LOG` wins over the
/// configured level.
pub fn build_logger(cfg: &LoggerConfig) -> SimpleLogger {
    let logger = SimpleLogger::new()
        .with_level(cfg.level)
        .with_colors(cfg.colors)
        .env();
    match cfg.timestamps {
        Timestamps::Local => logger.with_local_timestamps(),
        Timestamps::Utc => logger.with_utc_timestamps(),
        Timestamps::Off => logger.without_timestamps(),
    }
}

/// Installs the diagnostic logger. Release builds have nothing to trace, so
/// no logger is installed there and this always succeeds.
pub fn init_logger(cfg: &LoggerConfig) -> Result<(), SetLoggerError> {
    if !DEBUG {
        return Ok(());
    }
    build_logger(cfg).init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_build_logger_level() {
        let cfg = LoggerConfig {
            level: LevelFilter::Warn,
            colors: false,
            timestamps: Timestamps::Off,
        };
        // RUST_LOG wins when it names a level, otherwise the configured level stands.
        let expected = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn);
        assert_eq!(build_logger(&cfg).max_level(), expected);
    }

    #[test]
    fn test_log_static_level_left_to_dependents() {
        // A cap set here would be unified into every program linking this crate.
        assert_eq!(log::STATIC_MAX_LEVEL, LevelFilter::Trace);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_init_logger_is_a_no_op_in_release() {
        assert!(init_logger(&LoggerConfig::default()).is_ok());
        assert!(init_logger(&LoggerConfig::default()).is_ok());
    }
}
