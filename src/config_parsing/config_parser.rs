use crate::string_parsing::string_parser::{parse_string, StringParseErrorCode};
use crate::util::constants::LINE_TERMINATOR;
use crate::util::misc_extension_traits::PopChar;
use log::LevelFilter;
use std::fmt::{Display, Formatter};
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::Path;

/// How the diagnostic logger stamps its entries.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum Timestamps {
    Local,
    Utc,
    Off,
}

impl Timestamps {
    fn from_config_value(value: &str) -> Option<Self> {
        match value {
            "local" => Some(Timestamps::Local),
            "utc" => Some(Timestamps::Utc),
            "off" => Some(Timestamps::Off),
            _ => None,
        }
    }

    fn as_config_value(&self) -> &'static str {
        match self {
            Timestamps::Local => "local",
            Timestamps::Utc => "utc",
            Timestamps::Off => "off",
        }
    }
}

/// Settings for the diagnostic logger installed in debug builds.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    pub colors: bool,
    pub timestamps: Timestamps,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Trace,
            colors: true,
            timestamps: Timestamps::Utc,
        }
    }
}

#[derive(Debug, Eq, PartialOrd, PartialEq, Ord, Hash, Clone)]
pub enum ConfigParseErrorCode {
    ConfigCouldNotBeRead(String),
    MissingEqualSign(usize),
    MissingValue(usize),
    InvalidKey(StringParseErrorCode, usize),
    InvalidValue(StringParseErrorCode, usize),
    UnknownKey(String, usize),
    UnknownValue(String, String, usize),
}

use ConfigParseErrorCode::*;

impl Display for ConfigParseErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", config_parse_error_to_string(self))
    }
}

pub fn config_parse_error_to_string(err: &ConfigParseErrorCode) -> String {
    match err {
        ConfigCouldNotBeRead(s) => format!("The config file exists but could not be read. Here is the error the OS reported:{LINE_TERMINATOR}{s}"),
        MissingEqualSign(v) => format!("Expected an equal sign after the key. Entry number: {v}"),
        MissingValue(v) => format!("Missing value after the key. Entry number: {v}"),
        InvalidKey(e, v) => format!("The key could not be parsed into a string. Entry number: {v}. Here is the string parse error:{LINE_TERMINATOR}{e}"),
        InvalidValue(e, v) => format!("The value could not be parsed into a string. Entry number: {v}. Here is the string parse error:{LINE_TERMINATOR}{e}"),
        UnknownKey(key, v) => format!("There is no setting named {key}. Known settings are level, colors and timestamps. Entry number: {v}"),
        UnknownValue(key, value, v) => format!("{value} is not a valid value for {key}. Entry number: {v}"),
    }
}

/// Parses `"key" = "value"` entries. Later entries override earlier ones,
/// keys that never appear keep their default.
pub fn parse_config(config_as_string: &str) -> Result<LoggerConfig, ConfigParseErrorCode> {
    let slice = &mut config_as_string.trim();
    let mut result = LoggerConfig::default();
    let mut current_entry: usize = 1;
    while !slice.is_empty() {
        let key = parse_string(slice).map_err(|e| InvalidKey(e, current_entry))?;
        *slice = slice.trim_start();
        match slice.pop_char() {
            None => return Err(MissingValue(current_entry)),
            Some('=') => {}
            Some(_) => return Err(MissingEqualSign(current_entry)),
        }
        let value = parse_string(slice).map_err(|e| InvalidValue(e, current_entry))?;
        apply_setting(&mut result, key, value, current_entry)?;
        *slice = slice.trim_start();
        current_entry += 1;
    }
    Ok(result)
}

fn apply_setting(
    cfg: &mut LoggerConfig,
    key: String,
    value: String,
    current_entry: usize,
) -> Result<(), ConfigParseErrorCode> {
    let applied = match key.as_str() {
        "level" => Some(value.parse::<LevelFilter>().map(|level| cfg.level = level).is_ok()),
        "colors" => Some(value.parse::<bool>().map(|colors| cfg.colors = colors).is_ok()),
        "timestamps" => Some(
            Timestamps::from_config_value(&value)
                .map(|timestamps| cfg.timestamps = timestamps)
                .is_some(),
        ),
        _ => None,
    };
    match applied {
        Some(true) => Ok(()),
        Some(false) => Err(UnknownValue(key, value, current_entry)),
        None => Err(UnknownKey(key, current_entry)),
    }
}

/// Reads the config at `path`. A missing file is not an error, it means defaults.
pub fn read_from_config_file(path: impl AsRef<Path>) -> Result<LoggerConfig, ConfigParseErrorCode> {
    match read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(LoggerConfig::default()),
        Err(e) => Err(ConfigCouldNotBeRead(e.to_string())),
    }
}

/// Renders `cfg` in the format `parse_config` reads, one entry per line.
pub fn config_to_string(cfg: &LoggerConfig) -> String {
    let level = cfg.level.to_string().to_lowercase();
    [
        ("level", level.as_str()),
        ("colors", if cfg.colors { "true" } else { "false" }),
        ("timestamps", cfg.timestamps.as_config_value()),
    ]
    .iter()
    .map(|(key, value)| format!("\"{key}\" = \"{value}\""))
    .collect::<Vec<_>>()
    .join(LINE_TERMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::string_parsing::string_parser::StringParseErrorCode::*;

    #[test]
    fn test_parse_cfg() {
        test_parse_cfg_template(
            ["\"level\" = \"debug\"", "\"colors\" = \"false\"", "\"timestamps\" = \"off\""],
            Ok(LoggerConfig {
                level: LevelFilter::Debug,
                colors: false,
                timestamps: Timestamps::Off,
            }),
        );
        test_parse_cfg_template([], Ok(LoggerConfig::default()));
        test_parse_cfg_template(
            ["\"level\" = \"info\"", "\"level\" = \"WARN\""],
            Ok(LoggerConfig {
                level: LevelFilter::Warn,
                ..LoggerConfig::default()
            }),
        );
        test_parse_cfg_template(
            ["\"timestamps\"=\"local\"\"colors\"=\"true\""],
            Ok(LoggerConfig {
                timestamps: Timestamps::Local,
                ..LoggerConfig::default()
            }),
        );
    }

    #[test]
    fn test_parse_cfg_errors() {
        test_parse_cfg_template(["level = trace"], Err(InvalidKey(StringWithoutOpeningQuote, 1)));
        test_parse_cfg_template(["\"level = trace\""], Err(MissingValue(1)));
        test_parse_cfg_template(["\"level\"\"trace\""], Err(MissingEqualSign(1)));
        test_parse_cfg_template(
            ["\"level\" = \"trace\"", "\"colors\" = "],
            Err(InvalidValue(StringWithoutOpeningQuote, 2)),
        );
        test_parse_cfg_template(
            ["\"colors\" = \"true\"", "\"verbosity\" = \"high\""],
            Err(UnknownKey("verbosity".to_string(), 2)),
        );
        test_parse_cfg_template(
            ["\"level\" = \"loud\""],
            Err(UnknownValue("level".to_string(), "loud".to_string(), 1)),
        );
        test_parse_cfg_template(
            ["\"colors\" = \"yes\""],
            Err(UnknownValue("colors".to_string(), "yes".to_string(), 1)),
        );
        test_parse_cfg_template(
            ["\"timestamps\" = \"UTC\""],
            Err(UnknownValue("timestamps".to_string(), "UTC".to_string(), 1)),
        );
    }

    fn test_parse_cfg_template<const SIZE_OF_CFG: usize>(
        cfg: [&'static str; SIZE_OF_CFG],
        expected_result: Result<LoggerConfig, ConfigParseErrorCode>,
    ) {
        let cfg = cfg.join(LINE_TERMINATOR);
        assert_eq!(parse_config(&cfg), expected_result, "config was: {cfg:?}");
    }

    #[test]
    fn test_cfg_to_string() {
        assert_eq!(
            config_to_string(&LoggerConfig::default()),
            "\"level\" = \"trace\"\n\"colors\" = \"true\"\n\"timestamps\" = \"utc\""
        );

        let cfg = LoggerConfig {
            level: LevelFilter::Off,
            colors: false,
            timestamps: Timestamps::Local,
        };
        assert_eq!(parse_config(&config_to_string(&cfg)), Ok(cfg));
    }

    #[test]
    fn test_missing_config_file_means_defaults() {
        let path = std::env::temp_dir().join(format!("dlog-missing-{}.cfg", std::process::id()));
        assert_eq!(read_from_config_file(&path), Ok(LoggerConfig::default()));
    }

    #[test]
    fn test_read_config_file() {
        let path = std::env::temp_dir().join(format!("dlog-read-{}.cfg", std::process::id()));
        std::fs::write(&path, "\"level\" = \"error\"\n").unwrap();
        let res = read_from_config_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            res,
            Ok(LoggerConfig {
                level: LevelFilter::Error,
                ..LoggerConfig::default()
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MissingEqualSign(3).to_string(),
            "Expected an equal sign after the key. Entry number: 3"
        );
        assert_eq!(
            UnknownValue("colors".into(), "yes".into(), 1).to_string(),
            "yes is not a valid value for colors. Entry number: 1"
        );
    }
}
