use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File suffixes that mark a template document.
pub const TEMPLATE_SUFFIXES: [&str; 2] = [".yaml", ".yml"];

/// Display name used when a document has no `manifest.name`.
pub const UNNAMED_TEMPLATE: &str = "Unnamed Template";

#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
pub struct TemplateDocument {
    pub manifest: Option<Manifest>,
    pub structure: Option<serde_yaml::Value>,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
pub struct Manifest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("template file not found at {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template file {} is empty", .path.display())]
    Empty { path: PathBuf },
    #[error("error in YAML file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("no 'structure' key found in {}", .path.display())]
    MissingStructure { path: PathBuf },
}

impl ResolveError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Read { path, .. }
            | Self::Empty { path }
            | Self::Parse { path, .. }
            | Self::MissingStructure { path } => path,
        }
    }
}

impl TryFrom<String> for TemplateDocument {
    type Error = serde_yaml::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let document: Self = serde_yaml::from_str(&contents)?;
        Ok(document)
    }
}

impl TemplateDocument {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ResolveError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ResolveError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        if contents.trim().is_empty() {
            return Err(ResolveError::Empty {
                path: path.to_path_buf(),
            });
        }
        Self::try_from(contents).map_err(|source| ResolveError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn display_name(&self) -> &str {
        self.manifest
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .unwrap_or(UNNAMED_TEMPLATE)
    }

    pub fn description(&self) -> Option<&str> {
        self.manifest.as_ref().and_then(|m| m.description.as_deref())
    }

    /// The tree to instantiate; an explicit `structure: ~` counts as absent.
    pub fn structure(&self) -> Option<&serde_yaml::Value> {
        self.structure.as_ref().filter(|s| !s.is_null())
    }
}

/// Whether a file name carries one of the recognized template suffixes.
pub fn is_template_file(file_name: &str) -> bool {
    TEMPLATE_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}
