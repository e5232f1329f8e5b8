use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Topics accepted by `--debug-filter`
pub const TOPICS: [&str; 3] = ["tap", "guess", "ui"];

// Custom logger structure
#[derive(Debug)]
struct ParlorLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl ParlorLogger {
    fn new(level: LevelFilter, debug_filter: Option<&str>) -> Self {
        ParlorLogger {
            level,
            debug_filters: debug_filter.map(parse_filters),
        }
    }
}

fn parse_filters(filter_str: &str) -> HashSet<String> {
    filter_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl log::Log for ParlorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Topic filters only narrow debug and trace output
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        // Topic tag for the game-specific targets, e.g. [TAP]
        let context = if TOPICS.contains(&record.target()) {
            format!("[{}] ", record.target().to_uppercase())
        } else {
            String::new()
        };

        let mut output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            target = record.target(),
            message = record.args()
        );

        if let Some(module_path) = record.module_path() {
            if module_path != record.target() && !TOPICS.contains(&record.target()) {
                output.push_str(&format!(" [{}]", module_path));
            }
        }

        // Write errors are dropped
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<ParlorLogger> = OnceLock::new();

/// Installs the timestamped logger, or `env_logger` when `RUST_LOG` is set.
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    if std::env::var_os("RUST_LOG").is_some() {
        return env_logger::Builder::from_default_env().try_init();
    }

    let logger = LOGGER.get_or_init(|| ParlorLogger::new(level, debug_filter.as_deref()));
    log::set_logger(logger).map(|()| log::set_max_level(logger.level))
}

/// Parses a `--log-level` value, falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_tap {
    ($($arg:tt)*) => {
        log::debug!(target: "tap", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_guess {
    ($($arg:tt)*) => {
        log::debug!(target: "guess", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_ui {
    ($($arg:tt)*) => {
        log::debug!(target: "ui", "{}", format_args!($($arg)*))
    };
}
