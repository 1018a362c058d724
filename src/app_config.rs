use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const APP_CONFIG_FILE_NAME: &str = ".mktree.toml";

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub templates_dir: Option<PathBuf>,
    pub default_template: Option<String>,
}

impl TryFrom<String> for AppConfig {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl AppConfig {
    /// Read a config file; a missing file yields the defaults.
    /// A relative `templates_dir` is taken relative to the file itself.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents)
                .with_context(|| format!("invalid config file {}", path.display()))?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Self::default(),
                _ => anyhow::bail!(e),
            },
        };
        if let (Some(dir), Some(parent)) = (config.templates_dir.as_ref(), path.parent()) {
            if dir.is_relative() {
                config.templates_dir = Some(parent.join(dir));
            }
        }
        Ok(config)
    }
}

/// Look for `.mktree.toml` in `start` and each of its ancestors.
pub fn locate_config_file(start: impl AsRef<Path>) -> Option<PathBuf> {
    start
        .as_ref()
        .ancestors()
        .map(|dir| dir.join(APP_CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
