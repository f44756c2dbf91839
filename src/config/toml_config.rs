use crate::core::pagination::DEFAULT_QUESTIONS_PER_PAGE;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TriviaError};
use crate::utils::validation::{
    validate_log_level, validate_path, validate_positive_number, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SNAPSHOT_PATH: &str = "trivia.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub snapshot_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub questions_per_page: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TriviaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TriviaError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or("info")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn questions_per_page(&self) -> usize {
        self.pagination
            .questions_per_page
            .unwrap_or(DEFAULT_QUESTIONS_PER_PAGE)
    }

    fn snapshot_path(&self) -> &str {
        self.store
            .snapshot_path
            .as_deref()
            .unwrap_or(DEFAULT_SNAPSHOT_PATH)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("store.snapshot_path", self.snapshot_path())?;
        validate_positive_number("pagination.questions_per_page", self.questions_per_page(), 1)?;

        validate_log_level("logging.level", self.log_level())?;
        Ok(())
    }
}
