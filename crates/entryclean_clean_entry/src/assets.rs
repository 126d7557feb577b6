use anyhow::{Context, Result};
use entryclean_core::Compilation;
use log::{debug, warn};
use path_clean::PathClean;
use std::fs;

use crate::{config::Settings, constants::LOG_PREFIX};

/// Deletes `<asset_key>.<extension>` from the output directory and drops
/// `asset_key` from the compilation's asset table.
///
/// The table key is the bare `asset_key`, not the file name. A missing file
/// or key is not an error. The notice is emitted whenever verbose is set,
/// whether or not anything was deleted.
pub fn remove_asset(
    settings: &Settings,
    compilation: &mut Compilation,
    asset_key: &str,
    extension: &str,
) -> Result<()> {
    let file = compilation.output_path().join(format!("{}.{}", asset_key, extension)).clean();

    if !settings.dry_run() && file.exists() {
        debug!("Deleting {}", file.display());
        fs::remove_file(&file).with_context(|| format!("Failed to delete {}", file.display()))?;
        compilation.assets_mut().remove(asset_key);
    }

    if settings.verbose() {
        warn!("{}: file {} has been removed", LOG_PREFIX, file.display());
    }

    Ok(())
}
