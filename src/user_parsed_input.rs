//! Input from user but after parse

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

use crate::app_config::{locate_config_file, AppConfig};
use crate::utils::expand_home;
use crate::AppArgs;
use log::debug;

pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

// Contains parsed information from user.
#[derive(Debug, PartialEq, Eq)]
pub struct UserParsedInput {
    templates_dir: PathBuf,
    template: Option<String>,
    destination: Option<PathBuf>,
    list_only: bool,
}

impl UserParsedInput {
    /// Merge CLI arguments over the configuration file found for the
    /// current directory (or given with `--config`).
    pub fn try_from_args(args: &AppArgs) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) => Some(path.clone()),
            None => locate_config_file(env::current_dir()?),
        };
        let config = match &config_file {
            Some(path) => {
                debug!("using config file {}", path.display());
                AppConfig::from_path(path)?
            }
            None => AppConfig::default(),
        };
        Self::merge(args, config)
    }

    fn merge(args: &AppArgs, config: AppConfig) -> Result<Self> {
        let templates_dir = args
            .templates_dir
            .clone()
            .or(config.templates_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR));
        let destination = args.destination.as_deref().map(expand_home).transpose()?;

        Ok(Self {
            templates_dir: expand_home(templates_dir)?,
            template: args.template.clone().or(config.default_template),
            destination,
            list_only: args.list,
        })
    }

    pub fn templates_dir(&self) -> &Path {
        self.templates_dir.as_path()
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    pub const fn list_only(&self) -> bool {
        self.list_only
    }
}
