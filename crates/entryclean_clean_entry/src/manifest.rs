use anyhow::{Context, Result};
use log::{debug, trace, warn};
use serde_json::{Map, Value};
use std::{fs, path::Path};

use crate::{config::Settings, constants::LOG_PREFIX};

/// Asset name to emitted file mapping, in file order
pub type Manifest = Map<String, Value>;

/// Loads the manifest at `path`.
///
/// Returns `None` when no path is configured, no file exists there, or the
/// file holds JSON that is not an object (`null`, an array, ...). Such a
/// manifest has no keys to prune and is left as is. Malformed JSON is an
/// error.
pub fn load_manifest(path: Option<&Path>) -> Result<Option<Manifest>> {
    let Some(path) = path else {
        trace!("No manifest path configured");
        return Ok(None);
    };
    if !path.exists() {
        debug!("No manifest at {}", path.display());
        return Ok(None);
    }

    debug!("Reading manifest from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse manifest {}", path.display()))?;
    match json {
        Value::Object(manifest) => {
            debug!("Loaded manifest with {} entries", manifest.len());
            Ok(Some(manifest))
        }
        Value::Null => {
            debug!("Manifest {} is null", path.display());
            Ok(None)
        }
        other => {
            debug!(
                "Manifest {} is not an object ({}), leaving it untouched",
                path.display(),
                other
            );
            Ok(None)
        }
    }
}

/// Writes `manifest` back to the configured path as 2-space indented JSON.
///
/// Only an existing manifest file is ever overwritten; nothing happens when
/// the manifest was never loaded or the file has gone away.
pub fn save_manifest(settings: &Settings, manifest: Option<&Manifest>) -> Result<()> {
    let (Some(path), Some(manifest)) = (settings.manifest_path(), manifest) else {
        trace!("No manifest to write");
        return Ok(());
    };
    if !path.exists() {
        debug!("Manifest {} no longer exists, skipping write", path.display());
        return Ok(());
    }

    if !settings.dry_run() {
        debug!("Writing manifest to {}", path.display());
        let content = serde_json::to_string_pretty(manifest)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write manifest {}", path.display()))?;
    }

    // Logs the manifest contents rather than its path
    if settings.verbose() {
        warn!("{}: writing manifest file to {}", LOG_PREFIX, serde_json::to_string(manifest)?);
    }

    Ok(())
}
