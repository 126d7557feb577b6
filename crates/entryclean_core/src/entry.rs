use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entry configuration of a compiler: either a single entry or a mapping
/// from entry name to its descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryConfig {
    Single(String),
    Named(Map<String, Value>),
}

impl EntryConfig {
    /// Builds an entry configuration from a list of names.
    ///
    /// A single name becomes `Single`; anything else becomes a `Named` mapping
    /// with null descriptors, keeping the given order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() == 1 {
            return EntryConfig::Single(names.remove(0));
        }
        EntryConfig::Named(names.into_iter().map(|n| (n, Value::Null)).collect())
    }

    /// Entry names in configuration order
    pub fn names(&self) -> Vec<String> {
        match self {
            EntryConfig::Single(name) => vec![name.clone()],
            EntryConfig::Named(map) => map.keys().cloned().collect(),
        }
    }
}
