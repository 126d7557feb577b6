use anyhow::Result;
use entryclean_core::{Compilation, Compiler, Plugin};
use log::{debug, info, trace};

use crate::{
    assets::remove_asset,
    chunks::unlink_chunk_file,
    config::{Config, Settings},
    constants::{MAP_EXTENSION, PLUGIN_NAME, SCRIPT_EXTENSION},
    manifest::{load_manifest, save_manifest},
    pruner::prune_manifest,
};

/// Removes the outputs of every configured entry once a compilation has
/// emitted its assets.
#[derive(Debug, Clone)]
pub struct EntryCleaner {
    settings: Settings,
}

impl EntryCleaner {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn from_config(cfg: Config) -> Result<Self> {
        Ok(Self::new(cfg.into_settings()?))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Cleans up `compilation` in place.
    ///
    /// Entries are taken from the compilation's entry configuration, not from
    /// the `entries` option. The first I/O or manifest error aborts the run;
    /// removals already made stay made.
    pub fn run(&self, compilation: &mut Compilation) -> Result<()> {
        let settings = &self.settings;
        let mut manifest = load_manifest(settings.manifest_path())?;

        let entries = compilation.entry().names();
        info!("Cleaning {} entries in {}", entries.len(), compilation.output_path().display());
        debug!("Configured entries option (not used for resolution): {:?}", settings.entries());

        for entry in &entries {
            trace!("Cleaning entry: {}", entry);
            remove_asset(settings, compilation, entry, SCRIPT_EXTENSION)?;
            remove_asset(settings, compilation, entry, MAP_EXTENSION)?;
            prune_manifest(settings, manifest.as_mut(), entry);
            // Source maps stay in the chunk bookkeeping
            unlink_chunk_file(settings, compilation, &format!("{}.{}", entry, SCRIPT_EXTENSION));
        }

        save_manifest(settings, manifest.as_ref())
    }
}

impl Plugin for EntryCleaner {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn apply(self, compiler: &mut Compiler) {
        compiler.hooks.after_emit.tap(PLUGIN_NAME, move |compilation| self.run(compilation));
    }
}
