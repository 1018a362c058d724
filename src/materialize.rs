//! Turn a parsed structure tree into directories and empty files.

use log::{debug, error};
use serde_yaml::Value;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("invalid structure format at {}: expected a mapping, got {found}", .path.display())]
    NotAMapping { path: PathBuf, found: &'static str },
    #[error("invalid entry name under {}: {key} is not a path segment", .path.display())]
    InvalidName { path: PathBuf, key: String },
    #[error("failed to create file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MaterializeError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotAMapping { path, .. }
            | Self::InvalidName { path, .. }
            | Self::CreateFile { path, .. }
            | Self::CreateDir { path, .. } => path,
        }
    }
}

/// What one materialization pass did.
#[derive(Debug, Default)]
pub struct Summary {
    pub dirs_created: usize,
    pub dirs_existing: usize,
    pub files_created: usize,
    pub files_existing: usize,
    pub errors: Vec<MaterializeError>,
}

impl Summary {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn fail(&mut self, e: MaterializeError) {
        error!("{}", e);
        self.errors.push(e);
    }
}

/// Materialize `node` under `base`, creating `base` itself first.
pub fn materialize_root(base: &Path, node: &Value) -> Summary {
    if !node.is_mapping() {
        return materialize(base, node);
    }
    let mut summary = Summary::default();
    match create_dir(base, &mut summary) {
        Ok(()) => walk(base, node, &mut summary),
        Err(e) => summary.fail(e),
    }
    summary
}

/// Materialize `node` under an existing `parent`.
///
/// Failures are logged and collected per entry; siblings keep going and
/// nothing already created is rolled back.
pub fn materialize(parent: &Path, node: &Value) -> Summary {
    let mut summary = Summary::default();
    walk(parent, node, &mut summary);
    summary
}

fn walk(parent: &Path, node: &Value, summary: &mut Summary) {
    let Some(mapping) = node.as_mapping() else {
        summary.fail(MaterializeError::NotAMapping {
            path: parent.to_path_buf(),
            found: kind_of(node),
        });
        return;
    };

    for (key, content) in mapping {
        let Some(name) = segment(key) else {
            summary.fail(MaterializeError::InvalidName {
                path: parent.to_path_buf(),
                key: format!("{key:?}"),
            });
            continue;
        };
        let path = parent.join(name);
        match content {
            Value::Null | Value::String(_) => {
                if let Value::String(s) = content {
                    if !s.is_empty() {
                        debug!("ignoring contents given for {}", path.display());
                    }
                }
                if let Err(e) = touch(&path, summary) {
                    summary.fail(e);
                }
            }
            Value::Mapping(_) => match create_dir(&path, summary) {
                Ok(()) => walk(&path, content, summary),
                Err(e) => summary.fail(e),
            },
            other => summary.fail(MaterializeError::NotAMapping {
                path,
                found: kind_of(other),
            }),
        }
    }
}

/// Create an empty file, leaving an existing one's contents alone.
fn touch(path: &Path, summary: &mut Summary) -> Result<(), MaterializeError> {
    let existed = path.exists();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| MaterializeError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;
    if existed {
        debug!("kept {}", path.display());
        summary.files_existing += 1;
    } else {
        debug!("created {}", path.display());
        summary.files_created += 1;
    }
    Ok(())
}

fn create_dir(path: &Path, summary: &mut Summary) -> Result<(), MaterializeError> {
    let existed = path.is_dir();
    fs::create_dir_all(path).map_err(|source| MaterializeError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    if existed {
        summary.dirs_existing += 1;
    } else {
        debug!("created {}/", path.display());
        summary.dirs_created += 1;
    }
    Ok(())
}

/// Keys are used verbatim; numbers and booleans use their YAML spelling.
fn segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
