use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An emitted output asset as tracked by the compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Size in bytes when emitted
    pub size: u64,
}

pub type AssetTable = BTreeMap<String, Asset>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Output file names produced for this chunk, in emission order
    #[serde(default)]
    pub files: Vec<String>,
}

impl Chunk {
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { files: files.into_iter().map(Into::into).collect() }
    }
}
