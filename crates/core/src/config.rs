//! Configuration management for faqbot.
//!
//! Configuration is merged from three sources, later ones winning:
//! - `faqbot.yaml` in the working directory (optional)
//! - Environment variables
//! - Command-line flags
//!
//! Business logic never reads the environment directly; everything the
//! pipeline needs is resolved here and passed down as explicit values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Default URL of the FAQ document collection.
pub const DEFAULT_DOCS_URL: &str =
    "https://raw.githubusercontent.com/DataTalksClub/llm-zoomcamp/refs/heads/main/01-intro/documents.json";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL of the JSON document source
    pub docs_url: String,

    /// Retriever backend name (validated downstream against the closed enum)
    pub retriever: String,

    /// Chat model name (validated downstream against the closed enum)
    pub model: String,

    /// API key for the chat model provider
    pub api_key: Option<String>,

    /// Custom API endpoint (defaults to the provider's public endpoint)
    pub endpoint: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Disable colored output
    pub no_color: bool,
}

/// On-disk configuration file structure (`faqbot.yaml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    source: Option<SourceConfig>,
    llm: Option<LlmFileConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SourceConfig {
    url: Option<String>,
    retriever: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LlmFileConfig {
    model: Option<String>,
    endpoint: Option<String>,
    #[serde(rename = "apiKeyEnv")]
    api_key_env: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            docs_url: DEFAULT_DOCS_URL.to_string(),
            retriever: "minisearch".to_string(),
            model: "gpt-4o".to_string(),
            api_key: None,
            endpoint: None,
            log_level: None,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from `faqbot.yaml` (if present) and environment
    /// variables.
    ///
    /// Environment variables:
    /// - `FAQBOT_DOCS_URL`: document source URL
    /// - `FAQBOT_RETRIEVER`: retriever backend name
    /// - `FAQBOT_MODEL`: chat model name
    /// - `FAQBOT_OPENAI_ENDPOINT`: custom API endpoint
    /// - `OPENAI_API_KEY`: API key (unless the config file names another
    ///   variable via `llm.apiKeyEnv`)
    /// - `RUST_LOG`: log level
    /// - `NO_COLOR`: disable colored output
    pub fn load(config_file: Option<&PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        // File first, so environment variables can override it
        let path = config_file
            .cloned()
            .unwrap_or_else(|| PathBuf::from("faqbot.yaml"));
        let mut api_key_env = "OPENAI_API_KEY".to_string();
        if path.exists() {
            api_key_env = config.merge_yaml(&path)?.unwrap_or(api_key_env);
        }

        if let Ok(url) = std::env::var("FAQBOT_DOCS_URL") {
            config.docs_url = url;
        }

        if let Ok(retriever) = std::env::var("FAQBOT_RETRIEVER") {
            config.retriever = retriever;
        }

        if let Ok(model) = std::env::var("FAQBOT_MODEL") {
            config.model = model;
        }

        if let Ok(endpoint) = std::env::var("FAQBOT_OPENAI_ENDPOINT") {
            config.endpoint = Some(endpoint);
        }

        config.api_key = std::env::var(&api_key_env).ok();
        config.log_level = std::env::var("RUST_LOG").ok();

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    ///
    /// Returns the configured API key environment variable name, if any.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Option<String>> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        if let Some(source) = file.source {
            if let Some(url) = source.url {
                self.docs_url = url;
            }
            if let Some(retriever) = source.retriever {
                self.retriever = retriever;
            }
        }

        let mut api_key_env = None;
        if let Some(llm) = file.llm {
            if let Some(model) = llm.model {
                self.model = model;
            }
            if let Some(endpoint) = llm.endpoint {
                self.endpoint = Some(endpoint);
            }
            api_key_env = llm.api_key_env;
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        Ok(api_key_env)
    }

    /// Apply CLI overrides, giving flags precedence over file and
    /// environment values.
    pub fn with_overrides(
        mut self,
        docs_url: Option<String>,
        retriever: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(docs_url) = docs_url {
            self.docs_url = docs_url;
        }

        if let Some(retriever) = retriever {
            self.retriever = retriever;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose && self.log_level.is_none() {
            self.log_level = Some("debug".to_string());
        }

        if no_color {
            self.no_color = true;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.retriever, "minisearch");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.docs_url, DEFAULT_DOCS_URL);
        assert!(config.api_key.is_none());
        assert!(!config.no_color);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default().with_overrides(
            Some("http://localhost:8000/documents.json".to_string()),
            None,
            Some("gpt-4o".to_string()),
            None,
            true,
            false,
        );

        assert_eq!(config.docs_url, "http://localhost:8000/documents.json");
        assert_eq!(config.model, "gpt-4o");
        // Verbose implies debug logging when no level is set
        assert_eq!(config.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_overrides_keep_explicit_log_level() {
        let config = AppConfig::default().with_overrides(
            None,
            None,
            None,
            Some("warn".to_string()),
            true,
            false,
        );
        assert_eq!(config.log_level, Some("warn".to_string()));
    }

    #[test]
    fn test_merge_yaml() {
        let yaml = r#"
source:
  url: http://example.com/docs.json
  retriever: minisearch
llm:
  model: gpt-4o
  apiKeyEnv: MY_OPENAI_KEY
logging:
  level: debug
  color: false
"#;
        let dir = std::env::temp_dir().join("faqbot-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("faqbot.yaml");
        std::fs::write(&path, yaml).unwrap();

        let mut config = AppConfig::default();
        let api_key_env = config.merge_yaml(&path).unwrap();

        assert_eq!(config.docs_url, "http://example.com/docs.json");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.log_level, Some("debug".to_string()));
        assert!(config.no_color);
        assert_eq!(api_key_env, Some("MY_OPENAI_KEY".to_string()));
    }

    #[test]
    fn test_merge_yaml_malformed() {
        let dir = std::env::temp_dir().join("faqbot-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.yaml");
        std::fs::write(&path, "source: [not a mapping").unwrap();

        let mut config = AppConfig::default();
        assert!(matches!(
            config.merge_yaml(&path),
            Err(AppError::Config(_))
        ));
    }
}
