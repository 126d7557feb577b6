use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Options accepted by the entry cleaner
#[derive(Debug, Clone, Default, Parser, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Entry names (informational only; the compiler's entry configuration
    /// decides which entries are cleaned)
    #[arg(long, value_delimiter = ',')]
    pub entries: Vec<String>,

    /// Asset manifest to prune (only updated if it already exists)
    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    /// Print a notice for every removal
    #[arg(long)]
    pub verbose: bool,

    /// Report removals without touching anything (implies --verbose)
    #[arg(long)]
    pub dry_run: bool,
}

impl Config {
    /// Parse options from a JSON object such as
    /// `{"manifestPath": "dist/manifest.json", "dryRun": true}`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid clean-entry options")
    }

    /// Validate the options and resolve option interactions
    pub fn into_settings(self) -> Result<Settings> {
        if let Some(path) = &self.manifest_path
            && path.as_os_str().is_empty()
        {
            return Err(anyhow!("manifest_path must not be empty"));
        }

        let verbose = self.dry_run || self.verbose;
        debug!(
            "Resolved settings: manifest_path={:?}, verbose={}, dry_run={}",
            self.manifest_path, verbose, self.dry_run
        );

        Ok(Settings {
            entries: self.entries,
            manifest_path: self.manifest_path,
            verbose,
            dry_run: self.dry_run,
        })
    }
}

/// Validated, immutable cleaner settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    entries: Vec<String>,
    manifest_path: Option<PathBuf>,
    verbose: bool,
    dry_run: bool,
}

impl Settings {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn manifest_path(&self) -> Option<&Path> {
        self.manifest_path.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Config::default().into_settings().unwrap();
        assert!(!settings.verbose());
        assert!(!settings.dry_run());
        assert!(settings.manifest_path().is_none());
        assert!(settings.entries().is_empty());
    }

    #[test]
    fn test_dry_run_forces_verbose() {
        let cfg = Config { dry_run: true, verbose: false, ..Default::default() };
        let settings = cfg.into_settings().unwrap();
        assert!(settings.verbose());
        assert!(settings.dry_run());
    }

    #[test]
    fn test_empty_manifest_path_rejected() {
        let cfg = Config { manifest_path: Some(PathBuf::new()), ..Default::default() };
        assert!(cfg.into_settings().is_err());
    }

    #[test]
    fn test_from_json_camel_case() {
        let cfg = Config::from_json(
            r#"{"entries": ["styles"], "manifestPath": "dist/manifest.json", "dryRun": true}"#,
        )
        .unwrap();
        assert_eq!(cfg.entries, vec!["styles"]);
        assert_eq!(cfg.manifest_path, Some(PathBuf::from("dist/manifest.json")));
        assert!(cfg.dry_run);
        assert!(!cfg.verbose);
    }

    #[test]
    fn test_from_json_empty_object() {
        let cfg = Config::from_json("{}").unwrap();
        assert!(cfg.entries.is_empty());
        assert!(!cfg.dry_run);
    }

    #[test]
    fn test_cli_flags() {
        let cfg = Config::parse_from([
            "clean-entry",
            "--entries",
            "a,b",
            "--manifest-path",
            "manifest.json",
            "--dry-run",
        ]);
        assert_eq!(cfg.entries, vec!["a", "b"]);
        assert!(cfg.into_settings().unwrap().verbose());
    }
}
