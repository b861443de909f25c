use crate::errors::ConfigError;
use crate::loader::DataSource;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_SOURCE: &str = "data/data.json";
pub const DEFAULT_TIMEFRAMES: &str = "daily,weekly";
pub const DEFAULT_TIMEFRAME: &str = "daily";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_source: DataSource,
    pub timeframes: Vec<String>,
    pub default_timeframe: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let data_source = DataSource::parse(
            &var("APP_DATA_SOURCE").unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string()),
        );

        let timeframes: Vec<String> = var("APP_TIMEFRAMES")
            .unwrap_or_else(|| DEFAULT_TIMEFRAMES.to_string())
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect();
        if timeframes.is_empty() {
            return Err(ConfigError::NoTimeframes);
        }

        let default_timeframe = var("APP_DEFAULT_TIMEFRAME")
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|| DEFAULT_TIMEFRAME.to_string());
        if !timeframes.contains(&default_timeframe) {
            return Err(ConfigError::UnknownDefault(default_timeframe));
        }

        Ok(Self {
            port,
            data_source,
            timeframes,
            default_timeframe,
        })
    }
}
