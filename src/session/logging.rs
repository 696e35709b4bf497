//! Logging and tracing configuration
//!
//! Logs always go to stderr so that stdout carries only search output. An
//! optional rolling file gets the same events as JSON.

use crate::types::SearchConfig;
use std::io;
use tracing::{info, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to format console output as JSON
    pub json_format: bool,
    /// Log file directory (JSON lines, rotated daily)
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json_format: false,
            log_directory: None,
            log_file_prefix: "campus-search".to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Logging setup for the command line front end
    ///
    /// `debug` wins over `verbose`; a configured filter directive wins over
    /// both and over `RUST_LOG`.
    pub fn from_search_config(config: &SearchConfig, verbose: bool, debug: bool) -> Self {
        let mut logging = if debug {
            Self::new().with_level(Level::DEBUG).with_span_events()
        } else if verbose {
            Self::new().with_level(Level::INFO)
        } else {
            Self::new()
        };

        if config.log_json {
            logging = logging.with_json_format();
        }
        if let Some(filter) = &config.log_filter {
            logging = logging.with_env_filter(filter.clone());
        }
        if let Some(dir) = &config.log_dir {
            logging = logging.with_file_logging(dir.clone());
        }
        logging
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting on the console
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Also log to rolling files in `directory`
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Filter directive used when neither a custom filter nor `RUST_LOG` is set
    ///
    /// Covers both the library and the binary targets.
    pub fn default_directive(&self) -> String {
        let library = env!("CARGO_PKG_NAME").replace('-', "_");
        format!("{}={},campus_search={}", library, self.level, self.level)
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// When file logging is enabled the returned guard must be kept alive for
    /// buffered lines to be flushed.
    pub fn init(self) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = match &self.env_filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive())),
        };

        let console_layer = if self.json_format {
            fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(self.span_events())
                .boxed()
        } else {
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events())
                .boxed()
        };

        let (file_layer, guard) = match &self.log_directory {
            Some(dir) => {
                let appender = rolling::daily(dir, &self.log_file_prefix);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_span_events(self.span_events())
                    .boxed();
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default().with(env_filter).with(console_layer).with(file_layer).try_init()?;

        info!(level = %self.level, file_logging = self.log_directory.is_some(), "Logging initialized");
        Ok(guard)
    }
}
