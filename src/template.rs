use log::{debug, info};
use std::path::Path;

use crate::materialize::{materialize_root, Summary};
use crate::template_config::{ResolveError, TemplateDocument};

/// Load the template at `location` and lay its structure out under `base_path`.
///
/// Document problems abort before anything is created; per-entry creation
/// failures are returned in the [`Summary`].
pub fn instantiate(location: &Path, base_path: &Path) -> Result<Summary, ResolveError> {
    let document = TemplateDocument::from_path(location)?;
    let structure = document
        .structure()
        .ok_or_else(|| ResolveError::MissingStructure {
            path: location.to_path_buf(),
        })?;
    debug!(
        "expanding `{}` from {} into {}",
        document.display_name(),
        location.display(),
        base_path.display()
    );

    let summary = materialize_root(base_path, structure);
    info!(
        "🔧 {} directories and {} files created, {} already present",
        summary.dirs_created,
        summary.files_created,
        summary.dirs_existing + summary.files_existing
    );
    Ok(summary)
}
