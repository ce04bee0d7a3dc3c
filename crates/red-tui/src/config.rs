//! Configuration for the dashboard.
//!
//! Layered loading: defaults, then an optional TOML file, then `RED_`
//! environment overrides (e.g. `RED_LOGGING__LEVEL=debug`).
//!
//! The `style` section is the build-time style configuration: a list
//! of file-path globs naming the sources scanned for theme class
//! names so unused styles can be purged from the shipped assets. It
//! has no effect on rendering.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_refresh_ms")]
    pub refresh_interval_ms: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// `auto`, `unicode`, or `ascii`.
    #[serde(default = "default_theme_mode")]
    pub mode: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub log_dir: Option<String>,
}

/// The style-purge configuration: which sources the style generator
/// scans for class names.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_style_content")]
    pub content: Vec<String>,
}

fn default_refresh_ms() -> u64 {
    1000
}

fn default_theme_mode() -> String {
    "auto".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_style_content() -> Vec<String> {
    vec!["./index.html".to_string(), "./src/**/*.rs".to_string()]
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_ms(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: default_theme_mode(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            content: default_style_content(),
        }
    }
}

impl AppConfig {
    /// Load configuration, optionally from a TOML file, with `RED_`
    /// environment variables layered on top.
    pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder
            .add_source(Environment::with_prefix("RED").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// The default configuration as a TOML document.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl StyleConfig {
    /// Walk `root` and return the files matched by the content globs,
    /// in walk order.
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        let mut matched = Vec::new();
        for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = match entry.path().strip_prefix(root) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            let candidate = relative.to_string_lossy().replace('\\', "/");
            if self
                .content
                .iter()
                .any(|pattern| glob_match(pattern.trim_start_matches("./"), &candidate))
            {
                matched.push(entry.path().to_path_buf());
            }
        }
        matched
    }
}

/// Minimal glob matching over `/`-separated paths: `**` spans any
/// number of segments, `*` matches within one segment.
fn glob_match(pattern: &str, path: &str) -> bool {
    let pattern: Vec<&str> = pattern.split('/').collect();
    let path: Vec<&str> = path.split('/').collect();
    match_segments(&pattern, &path)
}

fn match_segments(pattern: &[&str], path: &[&str]) -> bool {
    match pattern.first() {
        None => path.is_empty(),
        Some(&"**") => (0..=path.len()).any(|skip| match_segments(&pattern[1..], &path[skip..])),
        Some(segment) => {
            !path.is_empty()
                && match_segment(segment, path[0])
                && match_segments(&pattern[1..], &path[1..])
        }
    }
}

fn match_segment(pattern: &str, segment: &str) -> bool {
    match pattern.split_once('*') {
        None => pattern == segment,
        Some((prefix, rest)) => {
            if let Some(stripped) = segment.strip_prefix(prefix) {
                (0..=stripped.len()).any(|skip| match_segment(rest, &stripped[skip..]))
            } else {
                false
            }
        }
    }
}
