use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

static DEFAULT_INPUT: &str = "my_classes.json";
static DEFAULT_OUTPUT: &str = "calendar.ics";

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schedule export to read
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Where the .ics file is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Faculty directory CSV (NAME/POSITION columns) for instructor titles
    #[serde(default)]
    pub faculty: Option<PathBuf>,

    /// Start each course on its first meeting day instead of the first day of classes
    #[serde(default)]
    pub align_first_occurrence: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: default_input(),
            output: default_output(),
            faculty: None,
            align_first_occurrence: false,
        }
    }
}

/// Get the config file path (~/.config/coursecal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("coursecal");
    Ok(config_dir.join("config.toml"))
}

/// Load config from `path`, falling back to defaults when the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    Ok(config)
}
