//! Configuration structures for the campus directory search
//!
//! This module contains the command line arguments, the optional configuration
//! file format, and the merged [`SearchConfig`] with its validation logic.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of buttons rendered per result category
pub const DEFAULT_MAX_DISPLAY: usize = 15;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "campus-search",
    version = "0.1.0",
    about = "Campus Directory Search - find facilities and rooms by name",
    long_about = "Searches the campus facility and room directory. Input is normalized (full-width to half-width, hiragana to katakana, upper case) before matching, so queries can be typed in any of the usual Japanese input forms.

EXAMPLES:
    # Start an interactive session
    campus-search

    # Run a single query and print the matches
    campus-search --query 1ごうかん

    # Run a single query and select the unique match
    campus-search --query 図書 --enter

    # Use a custom directory
    campus-search --data campus.json

    # Dump the built-in directory as a data file template
    campus-search --print-directory > campus.json

INTERACTIVE SESSION:
    Every line typed is the new content of the search field.
    Lines starting with ':' are commands (:enter, :facility <id>, :room <id>,
    :selection, :help, :quit).

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Directory data file path (JSON format)
    #[arg(
        long,
        help = "Directory data file (JSON format)",
        long_help = "Path to a JSON file with \"facilities\" and \"rooms\" tables. When omitted the built-in campus directory is used."
    )]
    pub data: Option<String>,

    /// Maximum number of buttons rendered per category
    #[arg(
        long,
        help = "Maximum results shown per category",
        long_help = "Maximum number of rooms and of facilities rendered as buttons. Remaining matches are summarized as a count. Must be greater than 0. Default: 15"
    )]
    pub max_display: Option<usize>,

    /// Output format for rendered results
    #[arg(long, help = "Output format (text or json)")]
    pub output_format: Option<String>,

    /// Run a single query and exit
    #[arg(short, long, help = "Run a single query and print the results")]
    pub query: Option<String>,

    /// Press Enter after the one-shot query
    #[arg(long, requires = "query", help = "Press Enter after --query")]
    pub enter: bool,

    /// Directory for rolling log files
    #[arg(long, help = "Also write JSON logs to this directory")]
    pub log_dir: Option<String>,

    /// Format console logs as JSON
    #[arg(long, help = "Write console logs to stderr as JSON lines")]
    pub log_json: bool,

    /// Custom tracing filter directive
    #[arg(
        long,
        value_name = "DIRECTIVE",
        help = "Tracing filter directive (overrides RUST_LOG and -v/-d)",
        long_help = "A tracing-subscriber filter directive such as 'campus_directory_search=debug'. Takes precedence over RUST_LOG and the -v/-d level flags."
    )]
    pub log_filter: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration and directory without searching
    #[arg(long, help = "Validate configuration and directory, then exit")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Print the active directory and exit
    #[arg(long, help = "Print the active directory in JSON format and exit")]
    pub print_directory: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Maximum number of buttons rendered per category
    pub max_display: Option<usize>,

    /// Output format for rendered results
    pub output_format: Option<String>,

    /// Directory data file path
    pub data_file: Option<String>,

    /// Directory for rolling log files
    pub log_dir: Option<String>,

    /// Format console logs as JSON
    pub log_json: Option<bool>,

    /// Custom tracing filter directive
    pub log_filter: Option<String>,
}

/// Configuration for the search front end
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of buttons rendered per category
    pub max_display: usize,

    /// Output format for rendered results
    pub output_format: String,

    /// Directory data file path (None = built-in directory)
    pub data_file: Option<String>,

    /// Directory for rolling log files
    pub log_dir: Option<String>,

    /// Format console logs as JSON
    pub log_json: bool,

    /// Custom tracing filter directive (None = RUST_LOG or the level flags)
    pub log_filter: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for search configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Display limit is invalid
    #[error("Max display must be greater than 0, got {0}")]
    InvalidMaxDisplay(usize),

    /// Output format is not recognized
    #[error("Unknown output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_display: DEFAULT_MAX_DISPLAY,
            output_format: "text".to_string(),
            data_file: None,
            log_dir: None,
            log_json: false,
            log_filter: None,
        }
    }
}

impl SearchConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            max_display: config_file.max_display.unwrap_or(defaults.max_display),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            data_file: config_file.data_file.or(defaults.data_file),
            log_dir: config_file.log_dir.or(defaults.log_dir),
            log_json: config_file.log_json.unwrap_or(defaults.log_json),
            log_filter: config_file.log_filter.or(defaults.log_filter),
        }
    }

    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.max_display {
            config.max_display = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.data {
            config.data_file = Some(value);
        }
        if let Some(value) = args.log_dir {
            config.log_dir = Some(value);
        }
        if args.log_json {
            config.log_json = true;
        }
        if let Some(value) = args.log_filter {
            config.log_filter = Some(value);
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_display == 0 {
            return Err(ConfigValidationError::InvalidMaxDisplay(self.max_display));
        }

        self.get_output_format()?;

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn bare_args() -> CliArgs {
        CliArgs::try_parse_from(["test"]).unwrap()
    }

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();

        assert_eq!(config.max_display, 15);
        assert_eq!(config.output_format, "text");
        assert!(config.data_file.is_none());
        assert!(config.log_dir.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_config_file_loading() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{ "max_display": 5, "output_format": "json" }}"#).unwrap();

        let config = SearchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_display, 5);
        assert_eq!(config.output_format, "json");
        // Unspecified fields fall back to defaults
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_config_file_errors() {
        assert!(matches!(
            SearchConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::FileNotFound(_))
        ));

        let toml = Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            SearchConfig::from_file(toml.path()),
            Err(ConfigError::UnsupportedFormat(ext)) if ext == "toml"
        ));

        let mut broken = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(broken, "{{ not json").unwrap();
        assert!(matches!(SearchConfig::from_file(broken.path()), Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{ "max_display": 5, "data_file": "from-file.json" }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = CliArgs::try_parse_from([
            "test",
            "--config",
            path.as_str(),
            "--max-display",
            "20",
        ])
        .unwrap();
        let config = SearchConfig::from_cli_args(args).unwrap();

        assert_eq!(config.max_display, 20);
        assert_eq!(config.data_file.as_deref(), Some("from-file.json"));
        assert_eq!(config.output_format, "text");
    }

    #[test]
    fn test_log_settings_from_file_and_cli() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{ "log_json": true, "log_filter": "warn" }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let from_file = SearchConfig::from_file(&path).unwrap();
        assert!(from_file.log_json);
        assert_eq!(from_file.log_filter.as_deref(), Some("warn"));

        let args = CliArgs::try_parse_from([
            "test",
            "--config",
            path.as_str(),
            "--log-filter",
            "campus_directory_search=trace",
        ])
        .unwrap();
        let config = SearchConfig::from_cli_args(args).unwrap();
        assert!(config.log_json);
        assert_eq!(config.log_filter.as_deref(), Some("campus_directory_search=trace"));

        let args = CliArgs::try_parse_from(["test", "--log-json"]).unwrap();
        assert!(SearchConfig::from_cli_args(args).unwrap().log_json);
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = SearchConfig::from_cli_args(bare_args()).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_max_display() {
        let config = SearchConfig { max_display: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidMaxDisplay(0))));
    }

    #[test]
    fn test_validation_rejects_unknown_output_format() {
        let config = SearchConfig { output_format: "csv".to_string(), ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidOutputFormat(format)) if format == "csv"
        ));
    }

    #[test]
    fn test_get_output_format() {
        let config = SearchConfig { output_format: "JSON".to_string(), ..Default::default() };
        assert_eq!(config.get_output_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_print_json_contains_fields() {
        let json = SearchConfig::default().print_json().unwrap();
        assert!(json.contains("\"max_display\": 15"));
        assert!(json.contains("\"output_format\": \"text\""));
    }
}
