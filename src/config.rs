//! Runtime settings taken from the environment (and `.env` via dotenv).

use std::env;

/// Default path of the log4rs YAML configuration.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Default cap on the number of entries an enumerating command prints.
pub const DEFAULT_LIMIT: usize = 65_536;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `SUBNET_ALGEBRA_LOG_CONFIG`
    pub log_config: String,
    /// `SUBNET_ALGEBRA_LIMIT`
    pub limit: usize,
    /// Off when `NO_COLOR` is set to anything non-empty.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            limit: DEFAULT_LIMIT,
            color: true,
        }
    }
}

impl Config {
    /// Read the process environment. Call `dotenv::dotenv()` first to pick
    /// up a `.env` file.
    ///
    /// Logging is not set up yet at this point, so problems with the values
    /// are returned for the caller to log once it is.
    pub fn from_env() -> (Config, Vec<String>) {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset or unparsable values keep their
    /// defaults; every ignored value yields one warning.
    pub fn from_lookup<F>(lookup: F) -> (Config, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();
        if let Some(path) = lookup("SUBNET_ALGEBRA_LOG_CONFIG").filter(|p| !p.is_empty()) {
            config.log_config = path;
        }
        if let Some(raw) = lookup("SUBNET_ALGEBRA_LIMIT") {
            match raw.trim().parse::<usize>() {
                Ok(limit) => config.limit = limit,
                Err(e) => warnings.push(format!(
                    "Ignoring SUBNET_ALGEBRA_LIMIT={raw:?} ({e}), using {}",
                    config.limit
                )),
            }
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        (config, warnings)
    }
}
