use crate::consts;
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Styles used when drawing the board
    #[serde(default)]
    pub(crate) styles: Styles,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) logging: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Load the configuration file at `path` or, if that is `None`, at the
    /// default path.  Only a missing default file is tolerated.
    pub(crate) fn load_from(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Config::load(p, false),
            None => Config::load(&Config::default_path()?, true),
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(from = "RawStyles")]
pub(crate) struct Styles {
    pub(crate) snake: Style,
    pub(crate) food: Style,
    pub(crate) border: Style,
    pub(crate) score_bar: Style,
}

impl Default for Styles {
    fn default() -> Styles {
        Styles {
            snake: consts::SNAKE_STYLE,
            food: consts::FOOD_STYLE,
            border: consts::BORDER_STYLE,
            score_bar: consts::SCORE_BAR_STYLE,
        }
    }
}

/// Styles as written in the configuration file, e.g. `"bold green"`.  Unset
/// styles fall back to the defaults.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawStyles {
    snake: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    border: Option<parse_style::Style>,
    score_bar: Option<parse_style::Style>,
}

impl From<RawStyles> for Styles {
    fn from(value: RawStyles) -> Styles {
        let default = Styles::default();
        Styles {
            snake: value.snake.map_or(default.snake, Style::from),
            food: value.food.map_or(default.food, Style::from),
            border: value.border.map_or(default.border, Style::from),
            score_bar: value.score_bar.map_or(default.score_bar, Style::from),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// File to append log messages to.  Nothing is logged if this is `None`.
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level that is logged
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::INFO,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawLogConfig {
    file: Option<PathBuf>,
    level: Option<String>,
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = LevelError;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, LevelError> {
        let level = match value.level {
            Some(level) => level.parse::<LevelFilter>().map_err(|_| LevelError(level))?,
            None => LogConfig::default().level,
        };
        Ok(LogConfig {
            file: value.file,
            level,
        })
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid log level {0:?}; expected one of off, error, warn, info, debug, trace")]
pub(crate) struct LevelError(String);

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
