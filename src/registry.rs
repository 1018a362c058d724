//! Discovery of template documents inside a template directory.

use anyhow::{Context, Result};
use console::style;
use indexmap::IndexMap;
use log::{debug, error, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::template_config::{is_template_file, ResolveError, TemplateDocument};

#[derive(Debug)]
struct RegistryEntry {
    location: PathBuf,
    description: Option<String>,
}

/// Display name -> template location, in discovery order.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    entries: IndexMap<String, RegistryEntry>,
    skipped: Vec<ResolveError>,
}

impl TemplateRegistry {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(|e| e.location.as_path())
    }

    /// Zero-based lookup in display order.
    pub fn location_at(&self, index: usize) -> Option<(&str, &Path)> {
        self.entries
            .get_index(index)
            .map(|(name, e)| (name.as_str(), e.location.as_path()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, e)| (name.as_str(), e.location.as_path()))
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|e| e.description.as_deref())
    }

    /// Documents that could not be read or parsed during discovery.
    pub fn skipped(&self) -> &[ResolveError] {
        &self.skipped
    }

    fn insert(&mut self, name: String, location: PathBuf, description: Option<String>) {
        let entry = RegistryEntry {
            location,
            description,
        };
        if let Some(previous) = self.entries.insert(name.clone(), entry) {
            warn!(
                "{} `{}` {} {}, {} {}",
                style("Template name").bold(),
                style(&name).bold().yellow(),
                style("is declared by").bold(),
                previous.location.display(),
                style("using").bold(),
                self.entries[&name].location.display()
            );
        }
    }
}

/// Scan `directory` for template documents and build a fresh registry.
///
/// A document that cannot be read or parsed is logged and skipped; only a
/// failure to list the directory itself is returned as an error.
pub fn list_templates(directory: impl AsRef<Path>) -> Result<TemplateRegistry> {
    let directory = directory.as_ref();
    let mut files = fs::read_dir(directory)
        .with_context(|| format!("cannot read template directory {}", directory.display()))?
        .map(|res| res.map(|e| e.path()))
        .collect::<Result<Vec<_>, std::io::Error>>()
        .with_context(|| format!("cannot read template directory {}", directory.display()))?;
    files.sort();

    let mut registry = TemplateRegistry::default();
    for path in files {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_template_file(file_name) || !path.is_file() {
            continue;
        }
        match TemplateDocument::from_path(&path) {
            Ok(document) => {
                let name = document.display_name().to_string();
                debug!("found template `{}` in {}", name, path.display());
                let description = document.description().map(String::from);
                registry.insert(name, path, description);
            }
            Err(e) => {
                error!("Error reading {}: {}", file_name, e);
                registry.skipped.push(e);
            }
        }
    }
    Ok(registry)
}
