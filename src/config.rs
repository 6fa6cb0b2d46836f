use crate::announcement::CountPolicy;
use crate::markup::html::default_css;
use crate::markup::Part;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "feedaria";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selectors: SelectorConfig,
    pub counts: CountConfig,
}

/// Per-part CSS overrides. Unset parts use [`default_css`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    pub repost_attribution: Option<String>,
    pub timestamp: Option<String>,
    pub author_name: Option<String>,
    pub post_text: Option<String>,
    pub reply_count: Option<String>,
    pub repost_count: Option<String>,
    pub like_count: Option<String>,
    pub like_control: Option<String>,
    pub reply_control: Option<String>,
    pub repost_control: Option<String>,
    pub control_count: Option<String>,
}

impl SelectorConfig {
    pub fn css_for(&self, part: Part) -> &str {
        let custom = match part {
            Part::RepostAttribution => &self.repost_attribution,
            Part::Timestamp => &self.timestamp,
            Part::AuthorName => &self.author_name,
            Part::PostText => &self.post_text,
            Part::ReplyCount => &self.reply_count,
            Part::RepostCount => &self.repost_count,
            Part::LikeCount => &self.like_count,
            Part::LikeControl => &self.like_control,
            Part::ReplyControl => &self.reply_control,
            Part::RepostControl => &self.repost_control,
            Part::ControlCount => &self.control_count,
        };
        custom.as_deref().unwrap_or_else(|| default_css(part))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountConfig {
    pub zero_match: CountPolicy,
}

impl Config {
    /// Load from `path`, or from the user config directory when no path is
    /// given. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_dir(path, dirs::config_dir().as_deref())
    }

    /// Like [`Config::load`], looking for the default file under `config_dir`.
    pub fn load_with_dir(path: Option<&Path>, config_dir: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match config_dir.map(path_in) {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

fn path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_DIR).join(CONFIG_FILENAME)
}
