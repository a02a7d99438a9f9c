//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use pricer_models::instruments::ExerciseStyle;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Log level override
pub const ENV_LOG_LEVEL: &str = "CRR_LOG_LEVEL";
/// Default lattice step count
pub const ENV_STEPS: &str = "CRR_STEPS";
/// Relative spot bump for sensitivities
pub const ENV_SPOT_BUMP: &str = "CRR_SPOT_BUMP";
/// Exercise style used by the sensitivity revaluations
pub const ENV_GREEKS_STYLE: &str = "CRR_GREEKS_STYLE";
/// Output format
pub const ENV_FORMAT: &str = "CRR_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid step count: {0}. Must be a positive integer")]
    InvalidSteps(String),

    #[error("Invalid spot bump: {0}. Must lie strictly between 0 and 1")]
    InvalidSpotBump(String),

    #[error("Invalid exercise style: {0}. Must be one of: european, american")]
    InvalidStyle(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Rendering of command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn parse_style(s: &str) -> Result<ExerciseStyle, ConfigError> {
    ExerciseStyle::from_str(s).map_err(|_| ConfigError::InvalidStyle(s.to_string()))
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default lattice step count
    pub steps: usize,
    /// Relative spot bump for delta and gamma
    pub spot_bump_relative: f64,
    /// Exercise style used by the sensitivity revaluations
    #[serde(deserialize_with = "deserialize_style")]
    pub greeks_style: ExerciseStyle,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_style<'de, D>(deserializer: D) -> Result<ExerciseStyle, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_style(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            steps: 100,
            spot_bump_relative: 0.01,
            greeks_style: ExerciseStyle::European,
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields whose variables are set, using `lookup` to read them
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(steps) = lookup(ENV_STEPS) {
            self.steps = steps
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSteps(steps.clone()))?;
        }

        if let Some(bump) = lookup(ENV_SPOT_BUMP) {
            self.spot_bump_relative = bump
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSpotBump(bump.clone()))?;
        }

        if let Some(style) = lookup(ENV_GREEKS_STYLE) {
            self.greeks_style = parse_style(&style)?;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::InvalidSteps(self.steps.to_string()));
        }

        let bump = self.spot_bump_relative;
        if !bump.is_finite() || bump <= 0.0 || bump >= 1.0 {
            return Err(ConfigError::InvalidSpotBump(bump.to_string()));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(steps) = cli.steps {
            self.steps = steps;
        }
        if let Some(bump) = cli.spot_bump {
            self.spot_bump_relative = bump;
        }
        if let Some(style) = &cli.greeks_style {
            self.greeks_style = parse_style(style)?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }

        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Shorthand for `log_level = debug`
    pub verbose: bool,
    /// Step count override
    pub steps: Option<usize>,
    /// Relative spot bump override
    pub spot_bump: Option<f64>,
    /// Sensitivity exercise style override
    pub greeks_style: Option<String>,
    /// Output format override
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.steps, 100);
        assert_eq!(config.spot_bump_relative, 0.01);
        assert_eq!(config.greeks_style, ExerciseStyle::European);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("csv"),
            Err(ConfigError::InvalidFormat(_))
        ));
        assert_eq!(format!("{}", OutputFormat::Json), "json");
    }

    #[test]
    fn test_validate() {
        let mut config = CliConfig::default();
        config.steps = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSteps(_))));

        config.steps = 500;
        for bump in [0.0, -0.1, 1.0, f64::NAN] {
            config.spot_bump_relative = bump;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidSpotBump(_))
            ));
        }

        config.spot_bump_relative = 0.005;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            steps = 500
            spot_bump_relative = 0.005
            greeks_style = "american"
            format = "json"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.steps, 500);
        assert_eq!(config.spot_bump_relative, 0.005);
        assert_eq!(config.greeks_style, ExerciseStyle::American);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("steps = 250").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.steps, 250);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.greeks_style, ExerciseStyle::European);
    }

    #[test]
    fn test_toml_rejects_unknown_style() {
        let result: Result<CliConfig, _> = toml::from_str(r#"greeks_style = "bermudan""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_env() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[
                (ENV_STEPS, "400"),
                (ENV_GREEKS_STYLE, "am"),
                (ENV_SPOT_BUMP, "0.02"),
            ]))
            .unwrap();

        assert_eq!(config.steps, 400);
        assert_eq!(config.greeks_style, ExerciseStyle::American);
        assert_eq!(config.spot_bump_relative, 0.02);
        // Unset variables leave fields untouched
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_apply_env_invalid_values() {
        let mut config = CliConfig::default();
        assert!(matches!(
            config.apply_env(env(&[(ENV_STEPS, "many")])),
            Err(ConfigError::InvalidSteps(_))
        ));
        assert!(matches!(
            config.apply_env(env(&[(ENV_GREEKS_STYLE, "asian")])),
            Err(ConfigError::InvalidStyle(_))
        ));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("warn".to_string()),
            steps: Some(1000),
            format: Some("json".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.steps, 1000);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_verbose_forces_debug() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("error".to_string()),
            verbose: true,
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_build_config_priority() {
        // Environment overrides defaults, CLI overrides environment
        let cli = CliArgs {
            steps: Some(50),
            ..Default::default()
        };
        let config = build_config_with(
            &cli,
            env(&[(ENV_STEPS, "400"), (ENV_LOG_LEVEL, "trace")]),
        )
        .unwrap();

        assert_eq!(config.steps, 50);
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with(&CliArgs::default(), env(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_build_config_rejects_invalid_cli_bump() {
        let cli = CliArgs {
            spot_bump: Some(2.0),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env(&[])),
            Err(ConfigError::InvalidSpotBump(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/crr.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env(&[])),
            Err(ConfigError::FileError(_))
        ));
    }
}
