//! Post-emit cleanup of intermediate entry points.
//!
//! Some entries exist only to drive code generation or shared-chunk
//! extraction, and their own output files should never ship. After a
//! compilation emits its assets, this crate removes each entry's script and
//! source map from:
//! - the output directory on disk
//! - the compilation's asset table
//! - the asset manifest file
//! - the compilation's chunk file lists
//!
//! # Examples
//!
//! ```no_run
//! use entryclean_clean_entry::{Config, EntryCleaner};
//! use entryclean_core::{Compilation, Compiler, EntryConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     entries: vec![],
//!     manifest_path: Some("dist/manifest.json".into()),
//!     verbose: true,
//!     dry_run: false,
//! };
//!
//! let mut compiler = Compiler::new();
//! compiler.register(EntryCleaner::from_config(cfg)?);
//!
//! let entry = EntryConfig::from_names(["polyfills"]);
//! let mut compilation = Compilation::from_output_dir("dist", entry)?;
//! compiler.emit_finished(&mut compilation)?;
//! # Ok(())
//! # }
//! ```

mod assets;
mod chunks;
mod cleaner;
mod config;
mod constants;
mod manifest;
mod pruner;

// Re-export public API
pub use assets::remove_asset;
pub use chunks::unlink_chunk_file;
pub use cleaner::EntryCleaner;
pub use config::{Config, Settings};
pub use constants::{LOG_PREFIX, MAP_EXTENSION, PLUGIN_NAME, SCRIPT_EXTENSION};
pub use manifest::{Manifest, load_manifest, save_manifest};
pub use pruner::prune_manifest;
