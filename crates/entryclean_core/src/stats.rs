use anyhow::{Context, Result, anyhow};
use log::{debug, trace};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::types::Chunk;

/// A bundler stats file whose `chunks` array mirrors the compilation's chunk
/// bookkeeping. Fields other than each chunk's `files` list are preserved
/// as read.
#[derive(Debug, Clone)]
pub struct StatsFile {
    path: PathBuf,
    raw: Value,
}

impl StatsFile {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!("Loading stats file from {}", path.display());
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read stats file {}", path.display()))?;
        let raw: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse stats file {}", path.display()))?;
        if !raw.is_object() {
            return Err(anyhow!("Stats file {} is not a JSON object", path.display()));
        }
        Ok(Self { path, raw })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Chunk list in stats order; `null` entries become empty slots
    pub fn chunks(&self) -> Result<Vec<Option<Chunk>>> {
        let Some(chunks) = self.raw.get("chunks") else {
            trace!("Stats file has no chunks array");
            return Ok(Vec::new());
        };
        let chunks: Vec<Option<Chunk>> = serde_json::from_value(chunks.clone())
            .with_context(|| format!("Invalid chunks array in {}", self.path.display()))?;
        debug!("Loaded {} chunk slots", chunks.len());
        Ok(chunks)
    }

    /// Writes the `files` list of each chunk back into the matching stats entry
    pub fn set_chunks(&mut self, chunks: &[Option<Chunk>]) {
        let Some(raw_chunks) = self.raw.get_mut("chunks").and_then(Value::as_array_mut) else {
            return;
        };
        for (raw, chunk) in raw_chunks.iter_mut().zip(chunks) {
            if let (Some(obj), Some(chunk)) = (raw.as_object_mut(), chunk) {
                let files = chunk.files.iter().cloned().map(Value::String).collect();
                obj.insert("files".to_string(), Value::Array(files));
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        debug!("Writing stats file to {}", self.path.display());
        let content = serde_json::to_string_pretty(&self.raw)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write stats file {}", self.path.display()))
    }
}
