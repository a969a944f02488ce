//! log4rs setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialize logging from the YAML file at `path`, or log warnings and
/// errors to stderr when there is no such file.
pub fn init(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())?;
        log::debug!("Logging configured from {path}");
    } else {
        log4rs::init_config(fallback_config()?)?;
        log::debug!("No log config at {path}, logging to stderr");
    }
    Ok(())
}

/// Console appender on stderr, root level `warn`.
pub fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_config() {
        let config = fallback_config().unwrap();
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.appenders()[0].name(), "stderr");
    }

    #[test]
    fn test_shipped_config_is_read_once() {
        let yaml = include_str!("../log4rs.yml");
        assert!(!yaml.contains("refresh_rate"), "log4rs.yml must not start a config watcher");
        assert!(yaml.contains("level: warn"));
    }
}
