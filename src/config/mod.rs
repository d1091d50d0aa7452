use crate::core::{TagFileError, TagFileResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Personal access token used as a bearer credential.
    /// The GITHUB_TOKEN environment variable takes precedence over this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
        }
    }
}

impl Config {
    /// Load config from a YAML file, falling back to defaults if it doesn't exist
    pub fn load(path: &Path) -> TagFileResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| TagFileError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Resolve the credential: GITHUB_TOKEN env var wins over the file value
    pub fn resolve_token(&self) -> Option<String> {
        std::env::var("GITHUB_TOKEN")
            .ok()
            .or_else(|| self.token.clone())
    }
}
