use crate::core::{ConfigProvider, DivisionRequest, ErrorStyle, OverflowPolicy};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_WORKERS: usize = 64;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub divider: DividerConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub rendezvous: RendezvousConfig,
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub requests: Vec<DivisionRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DividerConfig {
    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default)]
    pub error_style: ErrorStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendezvousConfig {
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for RendezvousConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

fn default_workers() -> usize {
    4
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl CalcConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable; unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }
}

impl ConfigProvider for CalcConfig {
    fn overflow_policy(&self) -> OverflowPolicy {
        self.divider.overflow_policy
    }

    fn error_style(&self) -> ErrorStyle {
        self.format.error_style
    }

    fn workers(&self) -> usize {
        self.rendezvous.workers
    }
}

impl Validate for CalcConfig {
    fn validate(&self) -> Result<()> {
        validate_range("rendezvous.workers", self.rendezvous.workers, 1, MAX_WORKERS)?;

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }

        Ok(())
    }
}
