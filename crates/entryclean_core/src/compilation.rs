use anyhow::{Context, Result};
use log::{debug, trace};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    entry::EntryConfig,
    types::{Asset, AssetTable, Chunk},
};

/// A single compilation pass after its assets have been emitted.
///
/// Plugins receive `&mut Compilation` and mutate the asset table and chunk
/// list in place; every change is visible to the caller as soon as the plugin
/// returns. There is no rollback.
#[derive(Debug, Clone)]
pub struct Compilation {
    output_path: PathBuf,
    entry: EntryConfig,
    assets: AssetTable,
    /// Chunk slots may be empty; consumers skip them
    chunks: Vec<Option<Chunk>>,
}

impl Compilation {
    pub fn new(output_path: impl Into<PathBuf>, entry: EntryConfig) -> Self {
        Self {
            output_path: output_path.into(),
            entry,
            assets: AssetTable::new(),
            chunks: Vec::new(),
        }
    }

    /// Builds a compilation from an already emitted output directory.
    ///
    /// Every regular file directly inside `output_path` becomes an asset keyed
    /// by its file name. The chunk list starts empty.
    pub fn from_output_dir(output_path: impl Into<PathBuf>, entry: EntryConfig) -> Result<Self> {
        let output_path = output_path.into();
        debug!("Reading emitted assets from {}", output_path.display());

        let mut assets = AssetTable::new();
        let dir = fs::read_dir(&output_path)
            .with_context(|| format!("Failed to read output directory {}", output_path.display()))?;
        for dent in dir {
            let dent = dent?;
            let meta = dent.metadata()?;
            if !meta.is_file() {
                continue;
            }
            let name = dent.file_name().to_string_lossy().to_string();
            trace!("Found asset: {}", name);
            assets.insert(name, Asset { size: meta.len() });
        }
        debug!("Collected {} assets", assets.len());

        Ok(Self { output_path, entry, assets, chunks: Vec::new() })
    }

    pub fn with_assets(mut self, assets: AssetTable) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_chunks(mut self, chunks: Vec<Option<Chunk>>) -> Self {
        self.chunks = chunks;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn entry(&self) -> &EntryConfig {
        &self.entry
    }

    pub fn assets(&self) -> &AssetTable {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetTable {
        &mut self.assets
    }

    pub fn chunks(&self) -> &[Option<Chunk>] {
        &self.chunks
    }

    pub fn chunks_mut(&mut self) -> &mut [Option<Chunk>] {
        &mut self.chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_output_dir_collects_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("main.js"), "console.log(1)").unwrap();
        fs::write(root.join("main.map"), "{}").unwrap();
        fs::create_dir_all(root.join("nested")).unwrap();

        let compilation =
            Compilation::from_output_dir(root, EntryConfig::Single("main".to_string())).unwrap();

        let keys: Vec<&str> = compilation.assets().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["main.js", "main.map"]);
        assert_eq!(compilation.assets()["main.js"].size, 14);
        assert!(compilation.chunks().is_empty());
    }

    #[test]
    fn test_from_output_dir_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("dist");
        let result = Compilation::from_output_dir(&missing, EntryConfig::from_names(["a"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_mutations_visible_to_caller() {
        let mut compilation = Compilation::new("/dist", EntryConfig::from_names(["a"]))
            .with_chunks(vec![Some(Chunk::with_files(["a.js"])), None]);

        compilation.chunks_mut()[0].as_mut().unwrap().files.clear();
        assert!(compilation.chunks()[0].as_ref().unwrap().files.is_empty());
        assert!(compilation.chunks()[1].is_none());
    }
}
