use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};

/// Environment variable selecting the log level (`error`, `warn`, `info`,
/// `debug`, `trace` or `off`).
pub const LOG_ENV: &str = "PERCOLATION_LOG";

struct Logger;

static LOGGER: Logger = Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => "ERR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DBG",
            Level::Trace => "TRC",
        };
        // Nowhere left to report a failed write to stderr.
        let _ = writeln!(io::stderr().lock(), "[{:4}] {}", level, record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Installs the stderr logger at the level named by [`LOG_ENV`], defaulting to `warn`.
///
/// Calling it again after a logger is installed only updates the level.
pub fn init() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(LevelFilter::Warn);
    init_with_level(level);
}

pub fn init_with_level(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" TRACE "), Some(LevelFilter::Trace));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
