use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sample video used when no id is given (a TED talk with manual captions)
pub const DEFAULT_VIDEO_ID: &str = "gX8s25991ac";

/// Cookie jar looked up relative to the working directory
pub const DEFAULT_COOKIES_PATH: &str = "cookies.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Transcript client settings
    pub source: SourceConfig,

    /// Fetcher settings
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Caption languages in priority order
    pub languages: Vec<String>,

    /// Keep inline formatting tags (<i>, <b>, ...) in caption text
    pub preserve_formatting: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Video id used when none is given on the command line
    pub default_video_id: String,

    /// Cookie jar used when it exists
    pub cookies_path: PathBuf,

    /// Indent JSON output
    pub pretty_json: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            preserve_formatting: false,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            default_video_id: DEFAULT_VIDEO_ID.to_string(),
            cookies_path: PathBuf::from(DEFAULT_COOKIES_PATH),
            pretty_json: false,
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a specific configuration file
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        tracing::debug!("Loading configuration from {}", path.display());

        let content = fs_err::read_to_string(path)
            .context("Failed to read config file")?;

        let config: Config = serde_yaml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// First existing configuration file, if any
    fn config_path() -> Option<PathBuf> {
        // Current directory first for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("transcript-fetch").join("config.yaml"))
            .filter(|path| path.exists())
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.source.languages.is_empty() {
            anyhow::bail!("At least one caption language must be configured");
        }

        if self.source.languages.iter().any(|l| l.trim().is_empty()) {
            anyhow::bail!("Caption language codes must not be empty");
        }

        if self.fetch.default_video_id.trim().is_empty() {
            anyhow::bail!("default_video_id must not be empty");
        }

        Ok(())
    }
}
