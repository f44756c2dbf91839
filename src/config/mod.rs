pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_log_level, validate_path, validate_positive_number, Validate,
};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "trivia")]
#[command(about = "Browse, search and play a trivia question bank")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// JSON snapshot holding categories and questions (overrides config)
    #[arg(long)]
    pub snapshot: Option<String>,

    /// Questions per page (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all categories
    Categories,
    /// List one page of questions
    Questions {
        #[arg(long)]
        page: Option<String>,
    },
    /// Case-insensitive search over question text
    Search { term: String },
    /// List the questions of one category
    ByCategory { id: i64 },
    /// Draw the next quiz question
    Quiz {
        /// Category id, 0 for all categories
        #[arg(long, default_value = "0")]
        category: i64,
        /// Ids already asked in this quiz
        #[arg(long, value_delimiter = ',')]
        previous: Vec<i64>,
    },
    /// Add a question
    Create {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
        #[arg(long)]
        difficulty: i64,
        #[arg(long)]
        category: i64,
    },
    /// Delete a question by id
    Delete { id: i64 },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the TOML file (if any) with command-line overrides.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        let mut settings = Settings::from_toml(&file);

        if let Some(snapshot) = &self.snapshot {
            settings.snapshot_path = snapshot.clone();
        }
        if let Some(page_size) = self.page_size {
            settings.questions_per_page = page_size;
        }
        if self.json_logs {
            settings.json_logs = true;
        }
        if self.verbose {
            settings.log_level = "debug".to_string();
        }
        Ok(settings)
    }
}

/// Effective runtime settings after all configuration layers are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub snapshot_path: String,
    pub questions_per_page: usize,
    pub log_level: String,
    pub json_logs: bool,
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            snapshot_path: config.snapshot_path().to_string(),
            questions_per_page: config.questions_per_page(),
            log_level: config.log_level().to_string(),
            json_logs: config.json_logs(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_toml(&TomlConfig::default())
    }
}

impl ConfigProvider for Settings {
    fn questions_per_page(&self) -> usize {
        self.questions_per_page
    }

    fn snapshot_path(&self) -> &str {
        &self.snapshot_path
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("snapshot_path", &self.snapshot_path)?;
        validate_positive_number("questions_per_page", self.questions_per_page, 1)?;
        validate_log_level("log_level", &self.log_level)?;
        Ok(())
    }
}


#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[store]\nsnapshot_path = \"from-file.json\"\n[pagination]\nquestions_per_page = 4\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "trivia",
            "--config",
            &path,
            "--page-size",
            "7",
            "categories",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.snapshot_path, "from-file.json");
        assert_eq!(settings.questions_per_page, 7);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_quiz_subcommand_parses_previous_list() {
        let cli =
            CliConfig::parse_from(["trivia", "quiz", "--category", "1", "--previous", "2,5,9"]);
        match cli.command {
            Command::Quiz { category, previous } => {
                assert_eq!(category, 1);
                assert_eq!(previous, vec![2, 5, 9]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        let cli = CliConfig::parse_from(["trivia", "-v", "questions"]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.snapshot_path, "trivia.json");
        assert_eq!(settings.questions_per_page, 10);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_zero_page_size_fails_validation() {
        let cli = CliConfig::parse_from(["trivia", "--page-size", "0", "categories"]);
        assert!(cli.resolve().unwrap().validate().is_err());
    }
}
