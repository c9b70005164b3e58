use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::parsers::{
    comment::CommentDepth,
    usage::{DEFAULT_USAGE_PATTERN, compile_usage_pattern},
};

pub const CONFIG_FILE_NAME: &str = ".lprojauditrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_resource_extension")]
    pub resource_extension: String,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    #[serde(default = "default_locale_folder_suffix")]
    pub locale_folder_suffix: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_usage_pattern")]
    pub usage_pattern: String,
    /// Maximum block-comment nesting to honor; `null` for unlimited.
    #[serde(default)]
    pub block_comment_depth: Option<usize>,
}

fn default_ignores() -> Vec<String> {
    ["**/Pods/**", "**/Carthage/**", "**/.build/**", "**/DerivedData/**"]
        .map(String::from)
        .to_vec()
}

fn default_resource_extension() -> String {
    "strings".to_string()
}

fn default_source_extensions() -> Vec<String> {
    vec!["swift".to_string()]
}

fn default_locale_folder_suffix() -> String {
    ".lproj".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_placeholder() -> String {
    "%@".to_string()
}

fn default_usage_pattern() -> String {
    DEFAULT_USAGE_PATTERN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            resource_extension: default_resource_extension(),
            source_extensions: default_source_extensions(),
            locale_folder_suffix: default_locale_folder_suffix(),
            primary_locale: default_primary_locale(),
            placeholder: default_placeholder(),
            usage_pattern: default_usage_pattern(),
            block_comment_depth: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`, a usage
    /// pattern without a key capture group, an empty placeholder, or a
    /// locale folder suffix that is not an extension.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        compile_usage_pattern(&self.usage_pattern).context("Invalid 'usagePattern'")?;

        if self.placeholder.is_empty() {
            bail!("'placeholder' must not be empty");
        }

        if !self.locale_folder_suffix.starts_with('.') || self.locale_folder_suffix.len() < 2 {
            bail!(
                "'localeFolderSuffix' must look like \".lproj\", got \"{}\"",
                self.locale_folder_suffix
            );
        }

        Ok(())
    }

    pub fn comment_depth(&self) -> CommentDepth {
        CommentDepth::from(self.block_comment_depth)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
